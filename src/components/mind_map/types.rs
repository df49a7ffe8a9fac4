//! Graph data structures exchanged between the generator and the renderer.

use serde::{Deserialize, Serialize};

/// A node in the mind map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MindMapNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Display label shown inside the node box.
	pub label: String,
	/// Optional CSS color (e.g., "#ff0000"). The root node has no stored
	/// color; the renderer paints it with the theme's root color.
	#[serde(default)]
	pub color: Option<String>,
	/// Whether this is the single root node summarizing the whole input.
	#[serde(default)]
	pub is_root: bool,
}

/// A directed link between two nodes, referenced by id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MindMapLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Optional link weight. Unused by the layout, carried for callers.
	#[serde(default)]
	pub value: Option<f64>,
}

/// Complete mind map description: nodes and links.
///
/// Links may form cycles (cross-links are added between arbitrary non-root
/// nodes), so consumers must treat this as a general adjacency structure,
/// not a tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MindMapData {
	pub nodes: Vec<MindMapNode>,
	pub links: Vec<MindMapLink>,
}
