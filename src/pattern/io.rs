//! Pattern file I/O
//!
//! Patterns are exchanged as a JSON array of arrays of tiles, the format the
//! level generator consumes.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::model::Pattern;

/// Default name for exported pattern files
pub const EXPORT_FILE_NAME: &str = "export.json";

/// Maximum import size (10 MB)
pub const MAX_IMPORT_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum PatternIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("file too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}

/// Serialize every pattern to compact JSON
pub fn patterns_to_json(patterns: &[Pattern]) -> Result<String, PatternIoError> {
    Ok(serde_json::to_string(patterns)?)
}

/// Parse patterns from JSON text (upload or file contents)
pub fn patterns_from_json(contents: &str) -> Result<Vec<Pattern>, PatternIoError> {
    if contents.len() > MAX_IMPORT_SIZE {
        return Err(PatternIoError::TooLarge {
            size: contents.len(),
            max: MAX_IMPORT_SIZE,
        });
    }
    Ok(serde_json::from_str(contents)?)
}

pub fn load_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Pattern>, PatternIoError> {
    let contents = fs::read_to_string(path)?;
    patterns_from_json(&contents)
}

/// Indices of patterns whose length differs from the grid
pub fn mismatched_lengths(patterns: &[Pattern], tile_count: usize) -> Vec<usize> {
    patterns
        .iter()
        .enumerate()
        .filter(|(_, p)| p.len() != tile_count)
        .map(|(i, _)| i)
        .collect()
}
