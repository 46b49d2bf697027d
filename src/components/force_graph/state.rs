//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node styling, the
//! orbit camera, and hover highlight state. The simulation moves nodes in x
//! and y; each node keeps its seeded z as depth.

use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use super::camera::{Camera, Projected};
use super::scale::ScaleConfig;
use super::theme::{Color, Theme};
use crate::presentation::{GraphStyle, LabelSprite, auto_color};
use crate::topology::{GraphData, Group};

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub label: LabelSprite,
	pub color: Color,
	/// Seeded z coordinate.
	pub z: f64,
	/// Size multiplier (1.0 = member node)
	pub size: f64,
}

/// A link as drawn: endpoints in the simulation plus its pixel-free width.
#[derive(Clone, Copy, Debug)]
pub struct LinkInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	/// Width in graph units, from the style hook.
	pub width: f64,
}

/// A node placed on screen for the current frame.
#[derive(Clone, Debug)]
pub struct ProjectedNode {
	pub idx: DefaultNodeIdx,
	pub at: Projected,
	pub info: NodeInfo,
}

/// Tracks an in-progress camera orbit drag.
#[derive(Clone, Debug, Default)]
pub struct OrbitState {
	pub active: bool,
	pub last_x: f64,
	pub last_y: f64,
}

/// Hover highlight: the hovered node and its neighbors stay lit while
/// everything else dims.
///
/// `level` eases toward 1.0 while a node is hovered and back to 0.0 after,
/// so dimming fades rather than snaps. The lit set is kept until the fade-out
/// finishes.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered: Option<DefaultNodeIdx>,
	lit: HashSet<DefaultNodeIdx>,
	level: f64,
}

impl HighlightState {
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>, links: &[LinkInfo]) {
		if self.hovered == node {
			return;
		}
		self.hovered = node;

		if let Some(idx) = node {
			self.lit.clear();
			self.lit.insert(idx);
			for link in links {
				if link.source == idx {
					self.lit.insert(link.target);
				} else if link.target == idx {
					self.lit.insert(link.source);
				}
			}
		}
	}

	/// Ease `level` toward its target with exponential smoothing.
	pub fn tick(&mut self, dt: f64) {
		const SPEED: f64 = 6.0;
		let target = if self.hovered.is_some() { 1.0 } else { 0.0 };
		self.level += (target - self.level) * (1.0 - (-SPEED * dt).exp());
		if self.hovered.is_none() && self.level < 0.01 {
			self.level = 0.0;
			self.lit.clear();
		}
	}

	pub fn level(&self) -> f64 {
		self.level
	}

	pub fn is_lit(&self, idx: DefaultNodeIdx) -> bool {
		self.lit.contains(&idx)
	}

	/// Opacity multiplier for a node.
	pub fn node_alpha(&self, idx: DefaultNodeIdx) -> f64 {
		if self.is_lit(idx) {
			1.0
		} else {
			1.0 - 0.75 * self.level
		}
	}
}

/// Core graph state combining physics simulation with camera and highlight tracking.
///
/// Created once when the component mounts, then mutated each frame by the
/// animation loop.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub camera: Camera,
	pub orbit: OrbitState,
	pub highlight: HighlightState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	links: Vec<LinkInfo>,
}

/// Relative node size by group.
fn group_size(group: Group) -> f64 {
	match group {
		Group::Center => 2.2,
		Group::Core => 1.6,
		Group::Funder => 1.0,
	}
}

impl ForceGraphState {
	pub fn new(data: &GraphData, style: &GraphStyle, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 120.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut links = Vec::with_capacity(data.links.len());

		for (i, node) in data.nodes.iter().enumerate() {
			let color = if style.node_auto_color_by == "group" {
				auto_color(node.group, &theme.palette)
			} else {
				theme.palette.get(i)
			};
			let idx = graph.add_node(NodeData {
				x: node.position.x as f32,
				y: node.position.y as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: (style.node_label)(node),
					color,
					z: node.position.z,
					size: group_size(node.group),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			match (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				(Some(&source), Some(&target)) => {
					graph.add_edge(source, target, EdgeData::default());
					links.push(LinkInfo {
						source,
						target,
						width: (style.link_width)(link),
					});
				}
				_ => warn!(
					"funding-graph: dropping link {} -> {} with unknown endpoint",
					link.source, link.target
				),
			}
		}

		Self {
			graph,
			links,
			camera: Camera::new(width, height),
			orbit: OrbitState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn links(&self) -> &[LinkInfo] {
		&self.links
	}

	/// All visible nodes projected for this frame, farthest first.
	pub fn project_nodes(&self) -> Vec<ProjectedNode> {
		let mut projected = Vec::new();
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if let Some(at) = self.camera.project(node.x() as f64, node.y() as f64, info.z) {
				projected.push(ProjectedNode {
					idx: node.index(),
					at,
					info: info.clone(),
				});
			}
		});
		projected.sort_by(|a, b| b.at.depth.total_cmp(&a.at.depth));
		projected
	}

	/// Nearest node under the given screen point.
	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		self.project_nodes()
			.into_iter()
			.rev()
			.find(|p| {
				let (dx, dy) = (p.at.x - sx, p.at.y - sy);
				(dx * dx + dy * dy).sqrt() < config.hit_radius(p.info.size, p.at.scale)
			})
			.map(|p| p.idx)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.links);
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.highlight.tick(dt as f64);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.resize(width, height);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::{Category, LayoutConfig, NoJitter, build_graph};

	fn state() -> ForceGraphState {
		let categories = vec![
			Category::new("Health", &["Wellcome Trust", "Gates Foundation"], 3.0),
			Category::new("Arts", &["Mellon Foundation"], 1.5),
		];
		let data = build_graph(&categories, &LayoutConfig::default(), &mut NoJitter);
		ForceGraphState::new(&data, &GraphStyle::default(), 800.0, 600.0, &Theme::default())
	}

	fn idx_of(state: &ForceGraphState, text: &str) -> DefaultNodeIdx {
		let mut found = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.label.text == text {
				found = Some(node.index());
			}
		});
		found.unwrap()
	}

	#[test]
	fn test_links_carry_style_width() {
		let state = state();
		assert_eq!(state.links().len(), 5);
		let health = idx_of(&state, "Health");
		for link in state.links().iter().filter(|l| l.source == health) {
			assert!((link.width - 2.0).abs() < 1e-12);
		}
	}

	#[test]
	fn test_node_info_from_hooks() {
		let state = state();
		let mut root = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.label.text == "IAR" {
				root = Some(node.data.user_data.clone());
			}
		});
		let root = root.unwrap();
		assert_eq!(root.label.color, "red");
		assert_eq!(root.color, Theme::default().palette.get(0));
		assert_eq!(root.z, 0.0);
	}

	#[test]
	fn test_hover_lights_neighbors() {
		let mut state = state();
		let health = idx_of(&state, "Health");
		state.set_hover(Some(health));
		assert!(state.highlight.is_lit(idx_of(&state, "IAR")));
		assert!(state.highlight.is_lit(idx_of(&state, "Wellcome Trust")));
		assert!(!state.highlight.is_lit(idx_of(&state, "Mellon Foundation")));

		for _ in 0..120 {
			state.highlight.tick(0.016);
		}
		assert!(state.highlight.level() > 0.9);

		state.set_hover(None);
		for _ in 0..240 {
			state.highlight.tick(0.016);
		}
		assert_eq!(state.highlight.level(), 0.0);
		assert!(!state.highlight.is_lit(health));
	}

	#[test]
	fn test_projection_is_back_to_front() {
		let state = state();
		let projected = state.project_nodes();
		assert_eq!(projected.len(), 6);
		assert!(projected.windows(2).all(|w| w[0].at.depth >= w[1].at.depth));
	}

	#[test]
	fn test_pick_root_at_center() {
		let state = state();
		let hit = state.node_at_position(400.0, 300.0, &ScaleConfig::default());
		assert_eq!(hit, Some(idx_of(&state, "IAR")));
	}
}
