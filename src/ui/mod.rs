//! Immediate-mode UI for the pattern editor
//!
//! - Immediate mode (no retained widget state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod panel;
mod widgets;
mod input;
mod actions;
pub mod theme;

pub use rect::*;
pub use panel::*;
pub use widgets::*;
pub use input::*;
pub use actions::*;
