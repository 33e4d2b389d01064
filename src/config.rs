//! Editor configuration
//!
//! Read from a RON file at startup. Every field is optional:
//!
//! ```ron
//! (
//!     grid_columns: 9,
//!     grid_rows: 9,
//!     tile_spacing: 1.0,
//!     initial_patterns: 1,
//!     export_file_name: "export.json",
//!     generator_route: "/export",
//!     generator_base_url: "http://localhost:5173",
//!     bindings: [
//!         (action: "pattern.next", shortcut: "D"),
//!         (action: "data.generate", shortcut: "Ctrl+G"),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pattern::io::EXPORT_FILE_NAME;

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "stepstone.ron";
/// Environment variable overriding the config path
pub const CONFIG_ENV_VAR: &str = "STEPSTONE_CONFIG";

/// Upper bound per grid side
pub const MAX_GRID_SIDE: usize = 64;

/// Upper bound on patterns created at startup
pub const MAX_INITIAL_PATTERNS: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Shortcut override for one action.
///
/// `shortcut` uses the "Ctrl+Shift+Key" form. An empty string unbinds the
/// action and `"default"` restores its built-in shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub action: String,
    pub shortcut: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_columns: usize,
    pub grid_rows: usize,
    /// Distance between tile centres in game units
    pub tile_spacing: f32,
    /// Patterns created at startup
    pub initial_patterns: usize,
    pub export_file_name: String,
    /// Route of the level generator page
    pub generator_route: String,
    /// Origin the generator route is resolved against on desktop
    pub generator_base_url: String,
    pub bindings: Vec<KeyBinding>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_columns: 9,
            grid_rows: 9,
            tile_spacing: 1.0,
            initial_patterns: 1,
            export_file_name: EXPORT_FILE_NAME.to_string(),
            generator_route: "/export".to_string(),
            generator_base_url: "http://localhost:5173".to_string(),
            bindings: Vec::new(),
        }
    }
}

impl EditorConfig {
    pub fn tile_count(&self) -> usize {
        self.grid_columns * self.grid_rows
    }

    /// Absolute generator URL for opening in a system browser
    pub fn generator_url(&self) -> String {
        if self.generator_route.starts_with("http://") || self.generator_route.starts_with("https://") {
            return self.generator_route.clone();
        }
        format!(
            "{}/{}",
            self.generator_base_url.trim_end_matches('/'),
            self.generator_route.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, side) in [("grid_columns", self.grid_columns), ("grid_rows", self.grid_rows)] {
            if side == 0 || side > MAX_GRID_SIDE {
                return Err(ConfigError::Invalid(format!(
                    "{} must be between 1 and {} (got {})",
                    name, MAX_GRID_SIDE, side
                )));
            }
        }
        if self.initial_patterns > MAX_INITIAL_PATTERNS {
            return Err(ConfigError::Invalid(format!(
                "initial_patterns must be at most {} (got {})",
                MAX_INITIAL_PATTERNS, self.initial_patterns
            )));
        }
        if !(self.tile_spacing.is_finite() && self.tile_spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tile_spacing must be positive (got {})",
                self.tile_spacing
            )));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("export_file_name is empty".to_string()));
        }
        Ok(())
    }

    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load the config from `STEPSTONE_CONFIG` or `stepstone.ron`,
    /// falling back to defaults when absent or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| CONFIG_FILE_NAME.to_string());
        if !Path::new(&path).exists() {
            tracing::debug!(%path, "no config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(%path, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(%path, error = %e, "ignoring config");
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = EditorConfig::from_ron_str("(grid_columns: 5)").unwrap();
        assert_eq!(config.grid_columns, 5);
        assert_eq!(config.grid_rows, 9);
        assert_eq!(config.export_file_name, "export.json");
        assert_eq!(config.tile_count(), 45);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(
            EditorConfig::from_ron_str("(grid_rows: 0)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_ron_str("(tile_spacing: -1.0)"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_too_many_initial_patterns() {
        assert!(matches!(
            EditorConfig::from_ron_str("(initial_patterns: 18446744073709551615)"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            EditorConfig::from_ron_str("(initial_patterns: 257)"),
            Err(ConfigError::Invalid(_))
        ));
        let config = EditorConfig::from_ron_str("(initial_patterns: 256)").unwrap();
        assert_eq!(config.initial_patterns, MAX_INITIAL_PATTERNS);
        assert_eq!(EditorConfig::from_ron_str("(initial_patterns: 0)").unwrap().initial_patterns, 0);
    }

    #[test]
    fn test_generator_url() {
        let mut config = EditorConfig::default();
        assert_eq!(config.generator_url(), "http://localhost:5173/export");

        config.generator_base_url = "https://levels.example/".to_string();
        assert_eq!(config.generator_url(), "https://levels.example/export");

        config.generator_route = "https://other.example/gen".to_string();
        assert_eq!(config.generator_url(), "https://other.example/gen");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "(grid_columns: 4, grid_rows: 3, initial_patterns: 2)").unwrap();

        let config = EditorConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.tile_count(), 12);
        assert_eq!(config.initial_patterns, 2);
    }

    #[test]
    fn test_bindings() {
        let config = EditorConfig::from_ron_str(
            r#"(bindings: [(action: "pattern.next", shortcut: "Ctrl+D")])"#,
        )
        .unwrap();
        assert_eq!(
            config.bindings,
            vec![KeyBinding { action: "pattern.next".into(), shortcut: "Ctrl+D".into() }]
        );
        assert!(EditorConfig::default().bindings.is_empty());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "grid_columns = 4").unwrap();

        assert!(matches!(EditorConfig::load(temp_file.path()), Err(ConfigError::Parse(_))));
    }
}
