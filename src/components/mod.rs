//! UI components: page chrome, text input, toasts, and the mind map canvas.

pub mod header;
pub mod mind_map;
pub mod text_input;
pub mod toast;
