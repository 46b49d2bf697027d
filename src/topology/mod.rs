//! Funding tree construction and seed layout.
//!
//! Turns an ordered category table into a two-level tree rooted at a single
//! center node:
//! - one `core` node per category, seeded on a ring around the root and
//!   stepped along z by category index
//! - one `funder` node per member, seeded at its category's position plus a
//!   jitter offset
//!
//! Category seeds are deterministic; only member seeds depend on the
//! [`Jitter`] source.

mod jitter;
mod types;

use std::f64::consts::TAU;

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::{info, warn};
use thiserror::Error;

pub use jitter::{Jitter, JitterExtent, NoJitter, UniformJitter};
pub use types::{GraphData, GraphLink, GraphNode, Group, Position};

/// A funding theme and the organizations grouped under it.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
	/// Category name, also its node id.
	pub name: String,
	/// Member names in table order; each becomes a funder node.
	pub members: Vec<String>,
	/// Weight of every category→member link.
	pub weight: f64,
}

impl Category {
	/// Creates a category from borrowed names.
	pub fn new(name: &str, members: &[&str], weight: f64) -> Self {
		Self {
			name: name.to_string(),
			members: members.iter().map(|m| m.to_string()).collect(),
			weight,
		}
	}
}

/// Errors raised while assembling categories from the literal tables.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
	/// A category has no entry in the weight table.
	#[error("category `{category}` has no edge weight")]
	MissingWeight {
		/// Category without a weight.
		category: String,
	},
	/// A category has more than one entry in the weight table.
	#[error("category `{category}` has more than one edge weight")]
	DuplicateWeight {
		/// Category weighted twice.
		category: String,
	},
	/// A weight is not a finite, positive number.
	#[error("category `{category}` has invalid edge weight {weight}")]
	InvalidWeight {
		/// Category carrying the weight.
		category: String,
		/// The rejected weight.
		weight: f64,
	},
	/// A weight entry names no category.
	#[error("edge weight given for unknown category `{category}`")]
	UnknownWeight {
		/// Name used by the stray weight entry.
		category: String,
	},
}

/// Joins the category→members table with the category→weight table.
///
/// Every category needs exactly one finite, positive weight, and every weight
/// must name a category.
pub fn join_tables(
	categories: &[(&str, &[&str])],
	weights: &[(&str, f64)],
) -> Result<Vec<Category>, TopologyError> {
	if let Some((unknown, _)) = weights
		.iter()
		.find(|(name, _)| !categories.iter().any(|(c, _)| c == name))
	{
		return Err(TopologyError::UnknownWeight {
			category: unknown.to_string(),
		});
	}

	categories
		.iter()
		.map(|&(name, members)| {
			let mut entries = weights.iter().filter(|(w, _)| *w == name);
			let weight = match (entries.next(), entries.next()) {
				(Some(&(_, weight)), None) => weight,
				(None, _) => {
					return Err(TopologyError::MissingWeight {
						category: name.to_string(),
					});
				}
				(Some(_), Some(_)) => {
					return Err(TopologyError::DuplicateWeight {
						category: name.to_string(),
					});
				}
			};
			if !weight.is_finite() || weight <= 0.0 {
				return Err(TopologyError::InvalidWeight {
					category: name.to_string(),
					weight,
				});
			}
			Ok(Category::new(name, members, weight))
		})
		.collect()
}

/// Geometry and fixed weights used when seeding the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Id of the single center node.
	pub root_id: String,
	/// Weight of every root→category link.
	pub root_link_value: f64,
	/// Radius of the category ring in the xy-plane.
	pub ring_radius: f64,
	/// z distance between consecutive categories.
	pub z_step: f64,
	/// z of the first category.
	pub z_offset: f64,
	/// Box a member seed may be offset into around its category.
	pub member_jitter: JitterExtent,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			root_id: "IAR".to_string(),
			root_link_value: 2.0,
			ring_radius: 100.0,
			z_step: 10.0,
			z_offset: -40.0,
			member_jitter: JitterExtent {
				x: 20.0,
				y: 20.0,
				z: 5.0,
			},
		}
	}
}

impl LayoutConfig {
	/// Seed position of the category at `index` out of `count`.
	pub fn category_seed(&self, index: usize, count: usize) -> Position {
		let theta = if count == 0 {
			0.0
		} else {
			(index as f64 / count as f64) * TAU
		};
		Position {
			x: self.ring_radius * theta.cos(),
			y: self.ring_radius * theta.sin(),
			z: self.z_step * index as f64 + self.z_offset,
		}
	}
}

/// Insertion-ordered node accumulator keyed by id.
///
/// Re-inserting an id overwrites group and position but keeps the slot of the
/// first insertion (last write wins).
#[derive(Debug, Default)]
struct NodeSet {
	nodes: IndexMap<String, GraphNode>,
}

impl NodeSet {
	fn insert(&mut self, node: GraphNode) {
		match self.nodes.entry(node.id.clone()) {
			Entry::Occupied(mut slot) => {
				warn!(
					"funding-graph: node id `{}` reused ({} -> {}), keeping the later one",
					node.id,
					slot.get().group.as_str(),
					node.group.as_str()
				);
				slot.insert(node);
			}
			Entry::Vacant(slot) => {
				slot.insert(node);
			}
		}
	}

	fn into_vec(self) -> Vec<GraphNode> {
		self.nodes.into_values().collect()
	}
}

/// Builds the funding tree from `categories` in table order.
pub fn build_graph(
	categories: &[Category],
	layout: &LayoutConfig,
	jitter: &mut impl Jitter,
) -> GraphData {
	let mut nodes = NodeSet::default();
	let mut links = Vec::with_capacity(
		categories.len() + categories.iter().map(|c| c.members.len()).sum::<usize>(),
	);

	nodes.insert(GraphNode {
		id: layout.root_id.clone(),
		group: Group::Center,
		position: Position::ORIGIN,
	});

	for (i, category) in categories.iter().enumerate() {
		let seed = layout.category_seed(i, categories.len());
		nodes.insert(GraphNode {
			id: category.name.clone(),
			group: Group::Core,
			position: seed,
		});
		links.push(GraphLink {
			source: layout.root_id.clone(),
			target: category.name.clone(),
			value: layout.root_link_value,
		});

		for member in &category.members {
			nodes.insert(GraphNode {
				id: member.clone(),
				group: Group::Funder,
				position: seed.translate(jitter.offset(layout.member_jitter)),
			});
			links.push(GraphLink {
				source: category.name.clone(),
				target: member.clone(),
				value: category.weight,
			});
		}
	}

	let data = GraphData {
		nodes: nodes.into_vec(),
		links,
	};
	info!(
		"funding-graph: built {} nodes, {} links from {} categories",
		data.nodes.len(),
		data.links.len(),
		categories.len()
	);
	data
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<Category> {
		vec![
			Category::new("Health", &["Wellcome Trust", "Gates Foundation"], 1.5),
			Category::new("Arts", &["Mellon Foundation"], 1.0),
			Category::new("Climate", &[], 2.5),
		]
	}

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn test_counts() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		assert_eq!(graph.nodes.len(), 1 + 3 + 3);
		assert_eq!(graph.links.len(), 3 + 3);
	}

	#[test]
	fn test_single_center_at_origin() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		let center = graph.center().unwrap();
		assert_eq!(center.id, "IAR");
		assert_eq!(center.position, Position::ORIGIN);
	}

	#[test]
	fn test_insertion_order() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(
			ids,
			[
				"IAR",
				"Health",
				"Wellcome Trust",
				"Gates Foundation",
				"Arts",
				"Mellon Foundation",
				"Climate"
			]
		);
		let pairs: Vec<(&str, &str)> = graph
			.links
			.iter()
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect();
		assert_eq!(
			pairs,
			[
				("IAR", "Health"),
				("Health", "Wellcome Trust"),
				("Health", "Gates Foundation"),
				("IAR", "Arts"),
				("Arts", "Mellon Foundation"),
				("IAR", "Climate"),
			]
		);
	}

	#[test]
	fn test_category_seeds_on_ring() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		for (i, name) in ["Health", "Arts", "Climate"].iter().enumerate() {
			let p = graph.node(name).unwrap().position;
			assert!(approx(p.x * p.x + p.y * p.y, 100.0 * 100.0));
			assert!(approx(p.z, 10.0 * i as f64 - 40.0));
		}
	}

	#[test]
	fn test_eight_category_angle() {
		let layout = LayoutConfig::default();
		let p = layout.category_seed(3, 8);
		let theta = (3.0 / 8.0) * TAU;
		assert!(approx(p.x, 100.0 * theta.cos()));
		assert!(approx(p.y, 100.0 * theta.sin()));
		assert!(approx(p.z, -10.0));
	}

	#[test]
	fn test_members_within_jitter_box() {
		let categories = sample();
		let graph = build_graph(
			&categories,
			&LayoutConfig::default(),
			&mut UniformJitter::seeded(99),
		);
		for category in &categories {
			let c = graph.node(&category.name).unwrap().position;
			for member in &category.members {
				let p = graph.node(member).unwrap().position;
				assert!((p.x - c.x).abs() <= 20.0);
				assert!((p.y - c.y).abs() <= 20.0);
				assert!((p.z - c.z).abs() <= 5.0);
				assert_eq!(graph.node(member).unwrap().group, Group::Funder);
			}
		}
	}

	#[test]
	fn test_zero_jitter_members_sit_on_category() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		assert_eq!(
			graph.node("Mellon Foundation").unwrap().position,
			graph.node("Arts").unwrap().position
		);
	}

	#[test]
	fn test_link_values() {
		let categories = sample();
		let graph = build_graph(&categories, &LayoutConfig::default(), &mut NoJitter);
		for link in &graph.links {
			if link.source == "IAR" {
				assert_eq!(link.value, 2.0);
			} else {
				let owner = categories.iter().find(|c| c.name == link.source).unwrap();
				assert_eq!(link.value, owner.weight);
			}
		}
	}

	#[test]
	fn test_tree_in_degree() {
		let graph = build_graph(&sample(), &LayoutConfig::default(), &mut NoJitter);
		for node in &graph.nodes {
			let expected = if node.group == Group::Center { 0 } else { 1 };
			assert_eq!(graph.in_degree(&node.id), expected, "{}", node.id);
		}
	}

	#[test]
	fn test_topology_idempotent_across_seeds() {
		let layout = LayoutConfig::default();
		let a = build_graph(&sample(), &layout, &mut UniformJitter::seeded(1));
		let b = build_graph(&sample(), &layout, &mut UniformJitter::seeded(2));
		assert_eq!(a.links, b.links);
		let strip = |g: &GraphData| -> Vec<(String, Group)> {
			g.nodes.iter().map(|n| (n.id.clone(), n.group)).collect()
		};
		assert_eq!(strip(&a), strip(&b));
		assert_eq!(
			a.node("Health").unwrap().position,
			b.node("Health").unwrap().position
		);
	}

	#[test]
	fn test_duplicate_id_last_write_wins() {
		let categories = vec![
			Category::new("Health", &["Shared Fund"], 1.0),
			Category::new("Arts", &["Shared Fund"], 3.0),
		];
		let graph = build_graph(&categories, &LayoutConfig::default(), &mut NoJitter);
		assert_eq!(graph.nodes.len(), 4);
		assert_eq!(graph.links.len(), 4);
		// keeps the first slot, takes the later position
		assert_eq!(graph.nodes[2].id, "Shared Fund");
		assert_eq!(
			graph.nodes[2].position,
			graph.node("Arts").unwrap().position
		);
		assert_eq!(graph.in_degree("Shared Fund"), 2);
	}

	#[test]
	fn test_category_named_like_root_becomes_core() {
		let categories = vec![Category::new("IAR", &[], 1.0)];
		let graph = build_graph(&categories, &LayoutConfig::default(), &mut NoJitter);
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].group, Group::Core);
	}

	#[test]
	fn test_empty_table() {
		let graph = build_graph(&[], &LayoutConfig::default(), &mut NoJitter);
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.links.is_empty());
	}

	#[test]
	fn test_category_new_copies_names() {
		let category = Category::new("Arts", &["Mellon Foundation", "Knight Foundation"], 1.0);
		assert_eq!(category.name, "Arts");
		assert_eq!(category.members, ["Mellon Foundation", "Knight Foundation"]);
	}

	#[test]
	fn test_join_tables() {
		let categories: [(&str, &[&str]); 2] = [("A", &["a1", "a2"]), ("B", &["b1"])];
		let joined = join_tables(&categories, &[("B", 1.0), ("A", 3.0)]).unwrap();
		assert_eq!(joined[0], Category::new("A", &["a1", "a2"], 3.0));
		assert_eq!(joined[1], Category::new("B", &["b1"], 1.0));
	}

	#[test]
	fn test_join_rejects_missing_weight() {
		let categories: [(&str, &[&str]); 2] = [("A", &["a1"]), ("B", &["b1"])];
		assert_eq!(
			join_tables(&categories, &[("A", 1.0)]),
			Err(TopologyError::MissingWeight {
				category: "B".into()
			})
		);
	}

	#[test]
	fn test_join_rejects_bad_weights() {
		let categories: [(&str, &[&str]); 1] = [("A", &["a1"])];
		assert!(matches!(
			join_tables(&categories, &[("A", 0.0)]),
			Err(TopologyError::InvalidWeight { .. })
		));
		assert!(matches!(
			join_tables(&categories, &[("A", f64::NAN)]),
			Err(TopologyError::InvalidWeight { .. })
		));
		assert_eq!(
			join_tables(&categories, &[("A", 1.0), ("A", 5.0)]),
			Err(TopologyError::DuplicateWeight {
				category: "A".into()
			})
		);
		assert_eq!(
			join_tables(&categories, &[("A", 1.0), ("Z", 1.0)]),
			Err(TopologyError::UnknownWeight {
				category: "Z".into()
			})
		);
	}
}
