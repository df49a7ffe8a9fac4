//! Render-session state: simulation, view transform, and interaction
//! tracking for one mind map.
//!
//! Built fresh each time a new [`MindMapData`] arrives; node positions and
//! the selection are owned here for the lifetime of that graph and are
//! discarded wholesale with it.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::warn;

use super::simulation::{SimNode, Simulation, SimulationParams};
use super::types::MindMapData;

/// Zoom bounds for the view transform.
pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 4.0;

/// Fixed height of a node box.
pub const NODE_HEIGHT: f64 = 50.0;

/// Per-node display metadata, parallel to the simulation's node list.
#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub id: String,
	pub label: String,
	pub color: Option<String>,
	pub is_root: bool,
	/// Box width, sized to the label.
	pub width: f64,
}

impl NodeVisual {
	/// Box width follows label length with a floor, matching the hit area
	/// to what is drawn.
	fn width_for(label: &str) -> f64 {
		(label.chars().count() as f64 * 8.0 + 20.0).max(100.0)
	}
}

/// Pan and zoom transform applied to the entire rendered group.
#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor, clamped to [`ZOOM_MIN`]..[`ZOOM_MAX`].
	pub k: f64,
}

/// Tracks an in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	/// Whether the pointer moved past the click threshold.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	/// Grab offset from the node center, in graph space.
	pub offset_x: f64,
	pub offset_y: f64,
}

/// Tracks an in-progress canvas pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Complete state for one rendered mind map.
pub struct MindMapState {
	pub sim: Simulation,
	pub nodes: Vec<NodeVisual>,
	/// Links resolved to node indices. Dangling links are dropped.
	pub links: Vec<(usize, usize)>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Globally selected node, highlighted until cleared.
	pub selected: Option<usize>,
	pub width: f64,
	pub height: f64,
}

impl MindMapState {
	/// Builds simulation and interaction state for a graph. Nodes are
	/// seeded on a circle around the origin; the initial transform centers
	/// the layout and shrinks it slightly.
	pub fn new(data: &MindMapData, width: f64, height: f64) -> Self {
		let count = data.nodes.len().max(1);
		let mut id_to_idx = HashMap::new();
		let mut visuals = Vec::with_capacity(data.nodes.len());
		let mut sim_nodes = Vec::with_capacity(data.nodes.len());

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = i as f64 * 2.0 * PI / count as f64;
			sim_nodes.push(SimNode::at(120.0 * angle.cos(), 120.0 * angle.sin()));
			visuals.push(NodeVisual {
				id: node.id.clone(),
				label: node.label.clone(),
				color: node.color.clone(),
				is_root: node.is_root,
				width: NodeVisual::width_for(&node.label),
			});
			id_to_idx.insert(node.id.as_str(), i);
		}

		let mut links = Vec::with_capacity(data.links.len());
		for link in &data.links {
			match (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				(Some(&s), Some(&t)) => links.push((s, t)),
				_ => warn!(
					"mindmesh: dropping link with unknown endpoint {} -> {}",
					link.source, link.target
				),
			}
		}

		Self {
			sim: Simulation::new(sim_nodes, links.clone(), SimulationParams::default()),
			nodes: visuals,
			links,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 0.8,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			selected: None,
			width,
			height,
		}
	}

	/// Converts screen coordinates to graph space.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node whose box contains the given screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// Nodes are drawn in order, so the last hit is the one on top.
		for (idx, visual) in self.nodes.iter().enumerate().rev() {
			let node = &self.sim.nodes()[idx];
			let (hw, hh) = (visual.width / 2.0, NODE_HEIGHT / 2.0);
			if (gx - node.x).abs() <= hw && (gy - node.y).abs() <= hh {
				return Some(idx);
			}
		}
		None
	}

	/// Applies a zoom step anchored at the given screen position.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self) {
		self.sim.tick();
	}
}

#[cfg(test)]
mod tests {
	use crate::components::mind_map::types::{MindMapLink, MindMapNode};

	use super::*;

	fn sample_data() -> MindMapData {
		MindMapData {
			nodes: vec![
				MindMapNode {
					id: "root0".into(),
					label: "Root".into(),
					color: None,
					is_root: true,
				},
				MindMapNode {
					id: "topic1".into(),
					label: "A topic".into(),
					color: Some("#8B5CF6".into()),
					is_root: false,
				},
			],
			links: vec![
				MindMapLink {
					source: "root0".into(),
					target: "topic1".into(),
					value: None,
				},
				MindMapLink {
					source: "root0".into(),
					target: "missing".into(),
					value: None,
				},
			],
		}
	}

	#[test]
	fn dangling_links_are_dropped() {
		let state = MindMapState::new(&sample_data(), 800.0, 600.0);
		assert_eq!(state.links, vec![(0, 1)]);
	}

	#[test]
	fn initial_transform_centers_and_shrinks() {
		let state = MindMapState::new(&sample_data(), 800.0, 600.0);
		assert_eq!(state.transform.x, 400.0);
		assert_eq!(state.transform.y, 300.0);
		assert_eq!(state.transform.k, 0.8);
	}

	#[test]
	fn screen_to_graph_inverts_transform() {
		let state = MindMapState::new(&sample_data(), 800.0, 600.0);
		let (gx, gy) = state.screen_to_graph(400.0, 300.0);
		assert_eq!((gx, gy), (0.0, 0.0));
	}

	#[test]
	fn zoom_clamps_to_bounds() {
		let mut state = MindMapState::new(&sample_data(), 800.0, 600.0);
		for _ in 0..100 {
			state.zoom_at(400.0, 300.0, 1.1);
		}
		assert_eq!(state.transform.k, ZOOM_MAX);
		for _ in 0..200 {
			state.zoom_at(400.0, 300.0, 0.9);
		}
		assert_eq!(state.transform.k, ZOOM_MIN);
	}

	#[test]
	fn hit_test_uses_label_sized_box() {
		let mut state = MindMapState::new(&sample_data(), 800.0, 600.0);
		// Pin node 1 at the graph origin so the hit position is known.
		state.sim.pin(1, 0.0, 0.0);
		state.sim.set_alpha_target(0.3);
		state.tick();

		// Graph origin maps to the screen center.
		assert_eq!(state.node_at_position(400.0, 300.0), Some(1));
		// Just below the 50-unit-tall box (scaled by k=0.8).
		assert_eq!(state.node_at_position(400.0, 300.0 + 26.0 * 0.8), None);
	}
}
