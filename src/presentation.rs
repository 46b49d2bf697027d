//! Per-group styling hooks handed to the renderer alongside the graph.
//!
//! Nothing here touches topology: every hook is a pure function of a node's
//! group or a link's value.

use crate::components::force_graph::theme::{Color, NodePalette};
use crate::topology::{GraphLink, GraphNode, Group};

/// Link values are divided by this to get a line width.
pub const LINK_WIDTH_DIVISOR: f64 = 1.5;

/// Label color and size for one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupStyle {
	/// CSS color name.
	pub label_color: &'static str,
	/// Label font size in graph units.
	pub label_size: f64,
}

/// Label style for `group`.
pub fn group_style(group: Group) -> GroupStyle {
	match group {
		Group::Center => GroupStyle {
			label_color: "red",
			label_size: 10.0,
		},
		Group::Core => GroupStyle {
			label_color: "orange",
			label_size: 8.0,
		},
		Group::Funder => GroupStyle {
			label_color: "lightblue",
			label_size: 6.0,
		},
	}
}

/// Text label drawn next to a node.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSprite {
	/// Text shown, the node id.
	pub text: String,
	/// CSS color name.
	pub color: &'static str,
	/// Font size in graph units.
	pub size: f64,
}

/// Builds the label for a node from its id and group.
pub fn node_label(node: &GraphNode) -> LabelSprite {
	let style = group_style(node.group);
	LabelSprite {
		text: node.id.clone(),
		color: style.label_color,
		size: style.label_size,
	}
}

/// Line width of a link, in graph units.
pub fn link_width(link: &GraphLink) -> f64 {
	link.value / LINK_WIDTH_DIVISOR
}

/// Node fill color, picked from the palette by group.
pub fn auto_color(group: Group, palette: &NodePalette) -> Color {
	palette.get(group.ordinal())
}

/// Styling hooks the renderer consults while building its scene.
#[derive(Clone, Copy, Debug)]
pub struct GraphStyle {
	/// Node attribute that drives automatic coloring.
	pub node_auto_color_by: &'static str,
	/// Width of each link.
	pub link_width: fn(&GraphLink) -> f64,
	/// Label built for each node.
	pub node_label: fn(&GraphNode) -> LabelSprite,
}

impl Default for GraphStyle {
	fn default() -> Self {
		Self {
			node_auto_color_by: "group",
			link_width,
			node_label,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::Position;

	fn node(id: &str, group: Group) -> GraphNode {
		GraphNode {
			id: id.into(),
			group,
			position: Position::ORIGIN,
		}
	}

	#[test]
	fn test_group_table() {
		assert_eq!(group_style(Group::Center).label_color, "red");
		assert_eq!(group_style(Group::Center).label_size, 10.0);
		assert_eq!(group_style(Group::Core).label_color, "orange");
		assert_eq!(group_style(Group::Core).label_size, 8.0);
		assert_eq!(group_style(Group::Funder).label_color, "lightblue");
		assert_eq!(group_style(Group::Funder).label_size, 6.0);
	}

	#[test]
	fn test_label_uses_id() {
		let label = node_label(&node("Ford Foundation", Group::Funder));
		assert_eq!(
			label,
			LabelSprite {
				text: "Ford Foundation".into(),
				color: "lightblue",
				size: 6.0,
			}
		);
	}

	#[test]
	fn test_link_width_ignores_endpoints() {
		let root = GraphLink {
			source: "IAR".into(),
			target: "Arts".into(),
			value: 2.0,
		};
		let member = GraphLink {
			source: "Arts".into(),
			target: "Mellon".into(),
			value: 3.0,
		};
		assert!((link_width(&root) - 2.0 / 1.5).abs() < 1e-12);
		assert!((link_width(&member) - 2.0).abs() < 1e-12);
	}

	#[test]
	fn test_auto_color_by_group() {
		let palette = NodePalette::slate();
		let core = auto_color(Group::Core, &palette).to_css_rgb();
		let funder = auto_color(Group::Funder, &palette).to_css_rgb();
		assert_ne!(core, funder);
		assert_eq!(core, auto_color(Group::Core, &palette).to_css_rgb());
	}

	#[test]
	fn test_default_style_hooks() {
		let style = GraphStyle::default();
		assert_eq!(style.node_auto_color_by, "group");
		let center = node("IAR", Group::Center);
		assert_eq!((style.node_label)(&center).color, "red");
	}
}
