//! Application state
//!
//! Owns the pattern store, editor UI state and the file bridge, and applies
//! the actions produced by buttons and shortcuts.

use crate::config::EditorConfig;
use crate::editor::{
    action_for_id, apply_bindings, build_context, create_editor_actions, EditorAction, EditorLayout, EditorState, GridLayout,
};
use crate::files::{ExportOutcome, FileBridge};
use crate::pattern::io::{load_patterns, mismatched_lengths, patterns_from_json, patterns_to_json};
use crate::pattern::{Pattern, PatternStorage};
use crate::ui::{ActionRegistry, UiContext};
use std::path::Path;

const STATUS_SECS: f64 = 3.0;
const ERROR_STATUS_SECS: f64 = 5.0;

pub struct AppState {
    pub config: EditorConfig,
    pub storage: PatternStorage,
    pub editor: EditorState,
    pub layout: EditorLayout,
    pub grid: GridLayout,
    pub actions: ActionRegistry,
    pub files: FileBridge,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        let grid = GridLayout::from_config(&config);
        let storage = PatternStorage::seeded(grid.tile_count(), config.initial_patterns);
        let mut actions = create_editor_actions();
        let bound = apply_bindings(&mut actions, &config.bindings);
        if bound > 0 {
            tracing::info!(bound, "applied key bindings");
        }
        tracing::info!(
            columns = grid.columns,
            rows = grid.rows,
            patterns = storage.len(),
            "editor ready"
        );
        Self {
            config,
            storage,
            editor: EditorState::new(),
            layout: EditorLayout::new(),
            grid,
            actions,
            files: FileBridge::new(),
        }
    }

    /// Per-frame bookkeeping before drawing
    pub fn begin_frame(&mut self, now: f64, ui: &UiContext) {
        self.editor.begin_frame(now, &ui.mouse);
        self.poll_import();
    }

    /// Actions whose shortcuts fired this frame
    pub fn triggered_actions(&self, ui: &UiContext) -> Vec<EditorAction> {
        let ctx = build_context(self.storage.len(), ui.dragging.is_some());
        self.actions
            .process_triggers(&ctx)
            .into_iter()
            .filter_map(action_for_id)
            .collect()
    }

    pub fn apply(&mut self, action: EditorAction) {
        match action {
            EditorAction::None => {}
            EditorAction::AddPattern => {
                self.storage.add();
                self.status(&format!("Added pattern_{}", self.storage.index()));
            }
            EditorAction::RemovePattern => {
                if self.storage.is_empty() {
                    self.status("Nothing to remove");
                } else {
                    let removed = self.storage.index();
                    self.storage.remove();
                    self.status(&format!("Removed pattern_{}", removed));
                }
            }
            EditorAction::NextPattern => self.storage.next(),
            EditorAction::PreviousPattern => self.storage.previous(),
            EditorAction::SelectPattern(index) => {
                if let Err(e) = self.storage.select(index) {
                    tracing::warn!(index, error = %e, "select rejected");
                    self.error_status(&e.to_string());
                }
            }
            EditorAction::SetPlatformType(platform_type) => {
                self.editor.paint.platform_type = platform_type;
            }
            EditorAction::Generate => self.generate(),
            EditorAction::Export => self.export(),
            EditorAction::Import => {
                if self.files.request_import() {
                    self.status("Select a .json file to import...");
                }
            }
        }
    }

    fn generate(&mut self) {
        if let Err(e) = self.files.open_generator(&self.config) {
            tracing::warn!(error = %e, "generator navigation failed");
            self.error_status(&format!("Generate failed: {}", e));
        }
    }

    fn export(&mut self) {
        let json = match patterns_to_json(self.storage.all()) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "serialize failed");
                self.error_status(&format!("Export failed: {}", e));
                return;
            }
        };
        let file_name = self.config.export_file_name.clone();
        match self.files.export(&file_name, &json) {
            #[cfg(not(target_arch = "wasm32"))]
            Ok(ExportOutcome::Saved(path)) => self.status(&format!("Exported to {}", path.display())),
            #[cfg(target_arch = "wasm32")]
            Ok(ExportOutcome::Downloaded(name)) => self.status(&format!("Downloaded {}", name)),
            #[cfg(not(target_arch = "wasm32"))]
            Ok(ExportOutcome::Cancelled) => {}
            Err(e) => {
                tracing::warn!(error = %e, "export failed");
                self.error_status(&format!("Export failed: {}", e));
            }
        }
    }

    /// Pick up a finished import from the file bridge
    pub fn poll_import(&mut self) {
        match self.files.poll_import() {
            Some(Ok(file)) => self.import_json(&file.name, &file.contents),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "import failed");
                self.error_status(&format!("Import failed: {}", e));
            }
            None => {}
        }
    }

    /// Load an export file from disk (desktop startup argument)
    pub fn load_file(&mut self, path: &Path) {
        match load_patterns(path) {
            Ok(patterns) => {
                let name = path.display().to_string();
                self.replace_patterns(&name, patterns);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "load failed");
                self.error_status(&format!("Load failed: {}", e));
            }
        }
    }

    /// Replace every pattern with the contents of an export file.
    /// Storage is left untouched when the file does not parse.
    pub fn import_json(&mut self, name: &str, contents: &str) {
        let patterns = match patterns_from_json(contents) {
            Ok(patterns) => patterns,
            Err(e) => {
                tracing::warn!(file = name, error = %e, "import rejected");
                self.error_status(&format!("Import failed: {}", e));
                return;
            }
        };
        self.replace_patterns(name, patterns);
    }

    fn replace_patterns(&mut self, name: &str, patterns: Vec<Pattern>) {
        let mismatched = mismatched_lengths(&patterns, self.grid.tile_count());
        let count = patterns.len();
        self.storage.update(patterns);

        if mismatched.is_empty() {
            tracing::info!(file = name, patterns = count, "imported patterns");
            self.status(&format!("Imported {} patterns from {}", count, name));
        } else {
            tracing::warn!(file = name, ?mismatched, expected = self.grid.tile_count(), "pattern sizes differ from grid");
            self.error_status(&format!(
                "Imported {} patterns; {} do not match the {}-tile grid",
                count,
                mismatched.len(),
                self.grid.tile_count()
            ));
        }
    }

    fn status(&mut self, message: &str) {
        self.editor.set_status(message, STATUS_SECS);
    }

    fn error_status(&mut self, message: &str) {
        self.editor.set_status(message, ERROR_STATUS_SECS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{PlatformModel, PlatformType, TileUpdate};

    fn app() -> AppState {
        AppState::new(EditorConfig::default())
    }

    #[test]
    fn test_new_seeds_one_pattern() {
        let app = app();
        assert_eq!(app.storage.len(), 1);
        assert_eq!(app.storage.tile_count(), 81);
        assert_eq!(app.storage.current().map(|p| p.len()), Some(81));
    }

    #[test]
    fn test_pattern_navigation_actions() {
        let mut app = app();
        app.apply(EditorAction::AddPattern);
        app.apply(EditorAction::AddPattern);
        assert_eq!(app.storage.len(), 3);
        assert_eq!(app.storage.index(), 2);

        app.apply(EditorAction::NextPattern);
        assert_eq!(app.storage.index(), 0);
        app.apply(EditorAction::PreviousPattern);
        assert_eq!(app.storage.index(), 2);

        app.apply(EditorAction::SelectPattern(1));
        assert_eq!(app.storage.index(), 1);
        app.apply(EditorAction::SelectPattern(9));
        assert_eq!(app.storage.index(), 1);

        app.apply(EditorAction::RemovePattern);
        assert_eq!(app.storage.len(), 2);
        app.apply(EditorAction::RemovePattern);
        app.apply(EditorAction::RemovePattern);
        assert!(app.storage.is_empty());
        app.apply(EditorAction::RemovePattern);
        assert!(app.storage.is_empty());
    }

    #[test]
    fn test_set_platform_type_action() {
        let mut app = app();
        app.apply(EditorAction::SetPlatformType(PlatformType::Item));
        assert_eq!(app.editor.paint.platform_type, PlatformType::Item);
    }

    #[test]
    fn test_import_replaces_patterns() {
        let mut app = app();
        let json = r#"[[{"type":"Drop","behaviour":2,"delay":0.5,"speed":10}],[{"type":2,"behaviour":0,"delay":0,"speed":0,"id":0}]]"#;
        app.import_json("export.json", json);

        assert_eq!(app.storage.len(), 2);
        assert_eq!(app.storage.index(), 0);
        assert_eq!(app.storage.tile(0), Some(&PlatformModel::new(PlatformType::Drop, 2, 0.5, 10.0)));
        // Short patterns are kept but reported
        assert!(app.editor.get_status().is_some_and(|s| s.contains("do not match")));
    }

    #[test]
    fn test_load_file() {
        let mut app = app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        let patterns = vec![Pattern::new(81); 4];
        std::fs::write(&path, patterns_to_json(&patterns).unwrap()).unwrap();

        app.load_file(&path);
        assert_eq!(app.storage.len(), 4);

        app.load_file(&dir.path().join("missing.json"));
        assert_eq!(app.storage.len(), 4);
        assert!(app.editor.get_status().is_some_and(|s| s.starts_with("Load failed")));
    }

    #[test]
    fn test_config_bindings_applied() {
        let config = EditorConfig {
            bindings: vec![crate::config::KeyBinding { action: "data.generate".into(), shortcut: "G".into() }],
            ..EditorConfig::default()
        };
        let app = AppState::new(config);
        let shortcut = app.actions.get("data.generate").and_then(|a| a.shortcut.clone());
        assert_eq!(shortcut.map(|s| s.display()), Some("G".to_string()));
    }

    #[test]
    fn test_invalid_import_keeps_storage() {
        let mut app = app();
        app.storage
            .set(TileUpdate::new(4, PlatformModel::new(PlatformType::Item, 1, 1.0, 1.0)))
            .unwrap();
        let before = app.storage.all().to_vec();

        app.import_json("broken.json", "{ not json");

        assert_eq!(app.storage.all(), before.as_slice());
        assert!(app.editor.get_status().is_some_and(|s| s.starts_with("Import failed")));
    }
}
