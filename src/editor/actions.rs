//! Pattern Editor Action Definitions
//!
//! Shortcuts, labels and enable conditions for every editor command.

use macroquad::prelude::*;
use thiserror::Error;
use crate::config::KeyBinding;
use crate::pattern::PlatformType;
use crate::ui::{Action, ActionContext, ActionRegistry, RebindError, Shortcut};
use super::EditorAction;

/// Custom flags for editor-specific conditions
pub mod flags {
    /// At least one pattern is stored
    pub const HAS_PATTERN: u32 = 1 << 0;
    /// More than one pattern is stored (navigation does something)
    pub const MULTIPLE_PATTERNS: u32 = 1 << 1;
}

/// Create the complete action registry for the pattern editor
pub fn create_editor_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    // ========================================================================
    // Pattern Actions
    // ========================================================================
    registry.register(
        Action::new("pattern.previous")
            .label("Previous")
            .shortcut(Shortcut::key(KeyCode::Q))
            .status_tip("Select the previous pattern")
            .category("Pattern")
            .enabled_when(|ctx| ctx.has_flag(flags::MULTIPLE_PATTERNS)),
    );

    registry.register(
        Action::new("pattern.next")
            .label("Next")
            .shortcut(Shortcut::key(KeyCode::E))
            .status_tip("Select the next pattern")
            .category("Pattern")
            .enabled_when(|ctx| ctx.has_flag(flags::MULTIPLE_PATTERNS)),
    );

    registry.register(
        Action::new("pattern.add")
            .label("Add")
            .shortcut(Shortcut::key(KeyCode::Equal))
            .status_tip("Add an empty pattern")
            .category("Pattern"),
    );

    registry.register(
        Action::new("pattern.remove")
            .label("Remove")
            .shortcut(Shortcut::key(KeyCode::Minus))
            .status_tip("Remove the current pattern")
            .category("Pattern")
            .enabled_when(|ctx| ctx.has_flag(flags::HAS_PATTERN)),
    );

    // ========================================================================
    // Tile Type Quick-Set
    // ========================================================================
    registry.register(
        Action::new("tile.type_none")
            .label("None")
            .shortcut(Shortcut::key(KeyCode::Key0))
            .status_tip("Paint empty tiles")
            .category("Tile"),
    );

    registry.register(
        Action::new("tile.type_drop")
            .label("Drop")
            .shortcut(Shortcut::key(KeyCode::Key1))
            .status_tip("Paint drop platforms")
            .category("Tile"),
    );

    registry.register(
        Action::new("tile.type_item")
            .label("Item")
            .shortcut(Shortcut::key(KeyCode::Key2))
            .status_tip("Paint item platforms")
            .category("Tile"),
    );

    // ========================================================================
    // Data Actions
    // ========================================================================
    registry.register(
        Action::new("data.generate")
            .label("Generate")
            .status_tip("Open the level generator")
            .category("Data"),
    );

    registry.register(
        Action::new("data.export")
            .label("Export")
            .shortcut(Shortcut::ctrl(KeyCode::S))
            .status_tip("Export all patterns as JSON")
            .category("Data"),
    );

    registry.register(
        Action::new("data.import")
            .label("Import")
            .shortcut(Shortcut::ctrl(KeyCode::O))
            .status_tip("Replace all patterns from a JSON file")
            .category("Data"),
    );

    registry
}

/// Build an ActionContext from the current editor state
pub fn build_context(pattern_count: usize, pointer_captured: bool) -> ActionContext {
    let mut ctx = ActionContext { pointer_captured, flags: 0 };
    if pattern_count > 0 {
        ctx = ctx.with_flag(flags::HAS_PATTERN);
    }
    if pattern_count > 1 {
        ctx = ctx.with_flag(flags::MULTIPLE_PATTERNS);
    }
    ctx
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("unrecognised shortcut \"{0}\"")]
    BadShortcut(String),
    #[error(transparent)]
    Rebind(#[from] RebindError),
}

fn apply_binding(registry: &mut ActionRegistry, binding: &KeyBinding) -> Result<(), BindingError> {
    let text = binding.shortcut.trim();
    if text.eq_ignore_ascii_case("default") {
        return Ok(registry.reset_shortcut(&binding.action)?);
    }
    let shortcut = if text.is_empty() {
        None
    } else {
        Some(Shortcut::parse(text).ok_or_else(|| BindingError::BadShortcut(text.to_string()))?)
    };
    Ok(registry.rebind(&binding.action, shortcut)?)
}

/// Apply configured shortcut overrides in order. Bad entries are logged and
/// skipped; returns how many were applied.
pub fn apply_bindings(registry: &mut ActionRegistry, bindings: &[KeyBinding]) -> usize {
    let mut applied = 0;
    for binding in bindings {
        match apply_binding(registry, binding) {
            Ok(()) => applied += 1,
            Err(e) => tracing::warn!(action = %binding.action, shortcut = %binding.shortcut, error = %e, "ignoring key binding"),
        }
    }
    applied
}

/// Editor command for a registered action id
pub fn action_for_id(id: &str) -> Option<EditorAction> {
    let action = match id {
        "pattern.previous" => EditorAction::PreviousPattern,
        "pattern.next" => EditorAction::NextPattern,
        "pattern.add" => EditorAction::AddPattern,
        "pattern.remove" => EditorAction::RemovePattern,
        "tile.type_none" => EditorAction::SetPlatformType(PlatformType::None),
        "tile.type_drop" => EditorAction::SetPlatformType(PlatformType::Drop),
        "tile.type_item" => EditorAction::SetPlatformType(PlatformType::Item),
        "data.generate" => EditorAction::Generate,
        "data.export" => EditorAction::Export,
        "data.import" => EditorAction::Import,
        _ => return None,
    };
    Some(action)
}
