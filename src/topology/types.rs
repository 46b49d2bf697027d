//! Graph data structures handed to the renderer.

use serde::Serialize;

/// A point in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
	/// Depth coordinate.
	pub z: f64,
}

impl Position {
	/// The origin, where the root sits.
	pub const ORIGIN: Position = Position {
		x: 0.0,
		y: 0.0,
		z: 0.0,
	};

	/// Returns this position moved by `by`.
	pub fn translate(self, by: Position) -> Self {
		Self {
			x: self.x + by.x,
			y: self.y + by.y,
			z: self.z + by.z,
		}
	}
}

/// Role of a node in the funding tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
	/// The single root.
	Center,
	/// A funding category.
	Core,
	/// An organization inside a category.
	Funder,
}

impl Group {
	/// Name used in serialized output.
	pub fn as_str(self) -> &'static str {
		match self {
			Group::Center => "center",
			Group::Core => "core",
			Group::Funder => "funder",
		}
	}

	/// Stable index used for palette lookups.
	pub fn ordinal(self) -> usize {
		match self {
			Group::Center => 0,
			Group::Core => 1,
			Group::Funder => 2,
		}
	}
}

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphNode {
	/// Unique identifier. Category and member names double as ids.
	pub id: String,
	/// Role in the tree; drives color and label style.
	pub group: Group,
	/// Seed position; the simulation moves the node from here.
	#[serde(flatten)]
	pub position: Position,
}

/// A directed, weighted edge between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Edge weight, drives the drawn line width.
	pub value: f64,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GraphData {
	/// Nodes in insertion order, root first.
	pub nodes: Vec<GraphNode>,
	/// Links in the same traversal order as nodes.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Looks up a node by id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// The root node, if the graph has exactly one.
	pub fn center(&self) -> Option<&GraphNode> {
		let mut centers = self.nodes.iter().filter(|n| n.group == Group::Center);
		match (centers.next(), centers.next()) {
			(Some(node), None) => Some(node),
			_ => None,
		}
	}

	/// Outgoing links of `id`.
	pub fn links_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphLink> + 'a {
		self.links.iter().filter(move |l| l.source == id)
	}

	/// Number of links pointing at `id`.
	pub fn in_degree(&self, id: &str) -> usize {
		self.links.iter().filter(|l| l.target == id).count()
	}

	/// Serializes to the `{ nodes: [...], links: [...] }` shape renderers expect.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}
