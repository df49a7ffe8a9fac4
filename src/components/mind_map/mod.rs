//! Force-directed mind map visualization.
//!
//! Renders a [`MindMapData`] graph on an HTML canvas with:
//! - Physics-based node positioning via a damped force simulation
//! - Node dragging (pinned to the pointer, layout re-heats live)
//! - Click-selection, pan, and zoom
//!
//! The graph is replaced wholesale whenever a new one is generated; node
//! positions live in [`MindMapState`] for the duration of one render
//! session.

mod component;
mod render;
pub mod simulation;
mod state;
pub mod theme;
mod types;

pub use component::{MindMapCanvas, SharedMindMapState};
pub use state::{MindMapState, NODE_HEIGHT};
pub use theme::{Color, Theme};
pub use types::{MindMapData, MindMapLink, MindMapNode};
