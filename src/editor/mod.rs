//! Pattern Editor
//!
//! Layout:
//! - Top-down platform grid (click or drag to paint)
//! - Paint controls (type, behavior, delay, speed)
//! - Pattern list

mod state;
mod layout;
mod grid_view;
mod actions;

pub use state::*;
pub use layout::*;
pub use grid_view::GridLayout;
pub use actions::{action_for_id, apply_bindings, build_context, create_editor_actions};
