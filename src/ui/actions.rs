//! Centralized Action Registry
//!
//! Keyboard shortcuts and buttons share one table of actions:
//! - Dynamic enable/disable conditions
//! - User-rebindable shortcuts with conflict detection
//! - Status tips for tooltips
//!
//! # Example
//! ```ignore
//! let mut registry = ActionRegistry::new();
//!
//! registry.register(Action::new("pattern.next")
//!     .label("Next Pattern")
//!     .shortcut(Shortcut::key(KeyCode::E))
//!     .enabled_when(|ctx| ctx.has_flag(HAS_PATTERN)));
//!
//! for id in registry.process_triggers(&ctx) {
//!     // dispatch on id
//! }
//! ```

use macroquad::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

/// A keyboard shortcut (key + modifiers)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub key: KeyCode,
    pub ctrl: bool, // Cmd on Mac
    pub shift: bool,
}

impl Shortcut {
    pub fn key(key: KeyCode) -> Self {
        Self { key, ctrl: false, shift: false }
    }

    pub fn ctrl(key: KeyCode) -> Self {
        Self { key, ctrl: true, shift: false }
    }

    /// Check if this shortcut was pressed this frame
    pub fn is_pressed(&self) -> bool {
        if !is_key_pressed(self.key) {
            return false;
        }

        let ctrl_down = is_key_down(KeyCode::LeftControl)
            || is_key_down(KeyCode::RightControl)
            || is_key_down(KeyCode::LeftSuper)
            || is_key_down(KeyCode::RightSuper);
        let shift_down = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);

        self.ctrl == ctrl_down && self.shift == shift_down
    }

    /// Format for display (e.g. "Ctrl+S", "⌘S")
    pub fn display(&self) -> String {
        let mut out = String::new();

        #[cfg(target_os = "macos")]
        {
            if self.ctrl {
                out.push('⌘');
            }
            if self.shift {
                out.push('⇧');
            }
        }

        #[cfg(not(target_os = "macos"))]
        {
            if self.ctrl {
                out.push_str("Ctrl+");
            }
            if self.shift {
                out.push_str("Shift+");
            }
        }

        out.push_str(key_name(self.key));
        out
    }
}

const KEY_NAMES: &[(KeyCode, &str)] = &[
    (KeyCode::A, "A"), (KeyCode::B, "B"), (KeyCode::C, "C"), (KeyCode::D, "D"),
    (KeyCode::E, "E"), (KeyCode::F, "F"), (KeyCode::G, "G"), (KeyCode::H, "H"),
    (KeyCode::I, "I"), (KeyCode::J, "J"), (KeyCode::K, "K"), (KeyCode::L, "L"),
    (KeyCode::M, "M"), (KeyCode::N, "N"), (KeyCode::O, "O"), (KeyCode::P, "P"),
    (KeyCode::Q, "Q"), (KeyCode::R, "R"), (KeyCode::S, "S"), (KeyCode::T, "T"),
    (KeyCode::U, "U"), (KeyCode::V, "V"), (KeyCode::W, "W"), (KeyCode::X, "X"),
    (KeyCode::Y, "Y"), (KeyCode::Z, "Z"),
    (KeyCode::Key0, "0"), (KeyCode::Key1, "1"), (KeyCode::Key2, "2"), (KeyCode::Key3, "3"),
    (KeyCode::Key4, "4"), (KeyCode::Key5, "5"), (KeyCode::Key6, "6"), (KeyCode::Key7, "7"),
    (KeyCode::Key8, "8"), (KeyCode::Key9, "9"),
    (KeyCode::Minus, "-"), (KeyCode::Equal, "="),
    (KeyCode::Space, "Space"), (KeyCode::Tab, "Tab"),
    (KeyCode::Delete, "Del"), (KeyCode::Backspace, "Backspace"),
    (KeyCode::Left, "Left"), (KeyCode::Right, "Right"), (KeyCode::Up, "Up"), (KeyCode::Down, "Down"),
    (KeyCode::PageUp, "PgUp"), (KeyCode::PageDown, "PgDn"),
];

fn key_name(key: KeyCode) -> &'static str {
    KEY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map_or("?", |(_, name)| name)
}

fn key_from_name(name: &str) -> Option<KeyCode> {
    KEY_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(k, _)| *k)
}

impl Shortcut {
    /// Parse "Ctrl+Shift+S" style text (modifiers in any order, case-insensitive)
    pub fn parse(text: &str) -> Option<Shortcut> {
        let mut parts: Vec<&str> = text.split('+').map(str::trim).collect();
        let key = key_from_name(parts.pop()?)?;
        let mut shortcut = Shortcut::key(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "cmd" => shortcut.ctrl = true,
                "shift" => shortcut.shift = true,
                _ => return None,
            }
        }
        Some(shortcut)
    }
}

/// Context for checking action enable conditions
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Shortcuts are blocked while a widget owns the mouse drag
    pub pointer_captured: bool,
    /// App-specific condition flags
    pub flags: u32,
}

impl ActionContext {
    pub fn with_flag(mut self, flag: u32) -> Self {
        self.flags |= flag;
        self
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        (self.flags & flag) != 0
    }
}

type EnableFn = fn(&ActionContext) -> bool;

fn always_enabled(_: &ActionContext) -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RebindError {
    #[error("action not found: {0}")]
    NotFound(String),
    #[error("shortcut already used by {0}")]
    Conflict(&'static str),
}

/// A registered action
#[derive(Clone)]
pub struct Action {
    /// Unique identifier (e.g. "pattern.add")
    pub id: &'static str,
    pub label: &'static str,
    pub default_shortcut: Option<Shortcut>,
    pub shortcut: Option<Shortcut>,
    pub status_tip: &'static str,
    enabled_fn: EnableFn,
    pub category: &'static str,
}

impl Action {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            label: "",
            default_shortcut: None,
            shortcut: None,
            status_tip: "",
            enabled_fn: always_enabled,
            category: "General",
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn shortcut(mut self, shortcut: Shortcut) -> Self {
        self.default_shortcut = Some(shortcut.clone());
        self.shortcut = Some(shortcut);
        self
    }

    pub fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = tip;
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    pub fn enabled_when(mut self, f: EnableFn) -> Self {
        self.enabled_fn = f;
        self
    }

    pub fn is_enabled(&self, ctx: &ActionContext) -> bool {
        if ctx.pointer_captured {
            return false;
        }
        (self.enabled_fn)(ctx)
    }

    /// Shortcut pressed this frame and action enabled
    pub fn is_triggered(&self, ctx: &ActionContext) -> bool {
        self.is_enabled(ctx) && self.shortcut.as_ref().is_some_and(|s| s.is_pressed())
    }

    /// Tooltip with shortcut hint
    pub fn tooltip(&self) -> String {
        let text = if self.status_tip.is_empty() { self.label } else { self.status_tip };
        match &self.shortcut {
            Some(shortcut) => format!("{} ({})", text, shortcut.display()),
            None => text.to_string(),
        }
    }
}

/// Central registry for all actions
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Action>,
    /// Registration order, used for deterministic trigger order
    order: Vec<&'static str>,
    shortcut_map: HashMap<Shortcut, &'static str>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, action: Action) {
        if let Some(ref shortcut) = action.shortcut {
            if let Some(existing) = self.shortcut_map.insert(shortcut.clone(), action.id) {
                if existing != action.id {
                    tracing::warn!(shortcut = %shortcut.display(), existing, replaced_by = action.id, "shortcut conflict");
                    if let Some(displaced) = self.actions.get_mut(existing) {
                        displaced.shortcut = None;
                    }
                }
            }
        }
        if !self.actions.contains_key(action.id) {
            self.order.push(action.id);
        }
        self.actions.insert(action.id, action);
    }

    pub fn get(&self, id: &str) -> Option<&Action> {
        self.actions.get(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_enabled(&self, id: &str, ctx: &ActionContext) -> bool {
        self.actions.get(id).is_some_and(|a| a.is_enabled(ctx))
    }

    /// Action bound to `shortcut`, if any
    #[cfg(test)]
    pub fn action_for(&self, shortcut: &Shortcut) -> Option<&'static str> {
        self.shortcut_map.get(shortcut).copied()
    }

    /// Rebind a shortcut (None clears it)
    pub fn rebind(&mut self, id: &str, new_shortcut: Option<Shortcut>) -> Result<(), RebindError> {
        let static_id = self
            .actions
            .get(id)
            .map(|a| a.id)
            .ok_or_else(|| RebindError::NotFound(id.to_string()))?;

        if let Some(ref shortcut) = new_shortcut {
            if let Some(&existing_id) = self.shortcut_map.get(shortcut) {
                if existing_id != static_id {
                    return Err(RebindError::Conflict(existing_id));
                }
            }
        }

        if let Some(action) = self.actions.get_mut(static_id) {
            if let Some(old) = action.shortcut.take() {
                self.shortcut_map.remove(&old);
            }
            if let Some(ref shortcut) = new_shortcut {
                self.shortcut_map.insert(shortcut.clone(), static_id);
            }
            action.shortcut = new_shortcut;
        }
        Ok(())
    }

    pub fn reset_shortcut(&mut self, id: &str) -> Result<(), RebindError> {
        let default = self
            .actions
            .get(id)
            .ok_or_else(|| RebindError::NotFound(id.to_string()))?
            .default_shortcut
            .clone();
        self.rebind(id, default)
    }

    /// IDs of all actions triggered this frame, in registration order
    pub fn process_triggers(&self, ctx: &ActionContext) -> Vec<&'static str> {
        self.order
            .iter()
            .filter_map(|id| self.actions.get(id))
            .filter(|a| a.is_triggered(ctx))
            .map(|a| a.id)
            .collect()
    }

    /// Actions in a category, in registration order
    pub fn actions_in_category(&self, category: &str) -> Vec<&Action> {
        self.order
            .iter()
            .filter_map(|id| self.actions.get(id))
            .filter(|a| a.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_display() {
        assert!(Shortcut::ctrl(KeyCode::S).display().contains('S'));
        assert_eq!(Shortcut::key(KeyCode::Key1).display(), "1");
    }

    #[test]
    fn test_shortcut_parse() {
        assert_eq!(Shortcut::parse("Q"), Some(Shortcut::key(KeyCode::Q)));
        assert_eq!(Shortcut::parse("ctrl+s"), Some(Shortcut::ctrl(KeyCode::S)));
        assert_eq!(
            Shortcut::parse("Shift + Ctrl + 1"),
            Some(Shortcut { key: KeyCode::Key1, ctrl: true, shift: true })
        );
        assert_eq!(Shortcut::parse("="), Some(Shortcut::key(KeyCode::Equal)));
        assert_eq!(Shortcut::parse("Alt+Q"), None);
        assert_eq!(Shortcut::parse("F13"), None);
        assert_eq!(Shortcut::parse(""), None);
    }

    #[test]
    fn test_enable_condition() {
        let mut registry = ActionRegistry::new();
        registry.register(Action::new("pattern.remove").enabled_when(|ctx| ctx.has_flag(1)));

        assert!(!registry.is_enabled("pattern.remove", &ActionContext::default()));
        assert!(registry.is_enabled("pattern.remove", &ActionContext::default().with_flag(1)));

        let captured = ActionContext { pointer_captured: true, flags: 1 };
        assert!(!registry.is_enabled("pattern.remove", &captured));
    }

    #[test]
    fn test_register_conflict_moves_shortcut() {
        let mut registry = ActionRegistry::new();
        registry.register(Action::new("pattern.next").label("Next").shortcut(Shortcut::key(KeyCode::E)));
        registry.register(Action::new("data.export").label("Export").shortcut(Shortcut::key(KeyCode::E)));

        assert_eq!(registry.action_for(&Shortcut::key(KeyCode::E)), Some("data.export"));
        let displaced = registry.get("pattern.next").unwrap();
        assert_eq!(displaced.shortcut, None);
        assert_eq!(displaced.tooltip(), "Next");
        // The default stays so a reset can still restore it
        assert_eq!(displaced.default_shortcut, Some(Shortcut::key(KeyCode::E)));
    }

    #[test]
    fn test_rebind_and_conflict() {
        let mut registry = ActionRegistry::new();
        registry.register(Action::new("pattern.next").shortcut(Shortcut::key(KeyCode::E)));
        registry.register(Action::new("pattern.previous").shortcut(Shortcut::key(KeyCode::Q)));

        assert_eq!(
            registry.rebind("pattern.next", Some(Shortcut::key(KeyCode::Q))),
            Err(RebindError::Conflict("pattern.previous"))
        );

        registry.rebind("pattern.next", Some(Shortcut::key(KeyCode::D))).unwrap();
        assert_eq!(registry.action_for(&Shortcut::key(KeyCode::D)), Some("pattern.next"));
        assert_eq!(registry.action_for(&Shortcut::key(KeyCode::E)), None);

        registry.reset_shortcut("pattern.next").unwrap();
        assert_eq!(registry.action_for(&Shortcut::key(KeyCode::E)), Some("pattern.next"));

        assert!(matches!(registry.rebind("missing", None), Err(RebindError::NotFound(_))));
    }

    #[test]
    fn test_tooltip_includes_shortcut() {
        let action = Action::new("data.export")
            .label("Export")
            .status_tip("Export all patterns")
            .shortcut(Shortcut::ctrl(KeyCode::S));
        assert!(action.tooltip().starts_with("Export all patterns ("));
        assert_eq!(Action::new("x").label("Plain").tooltip(), "Plain");
    }
}
