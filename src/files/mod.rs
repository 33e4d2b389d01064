//! File bridge: export downloads, import uploads and generator navigation
//!
//! Native builds use rfd dialogs and the system browser. The wasm build talks
//! to `stepstone_io.js`, where the file read completes asynchronously and is
//! picked up by `FileBridge::poll_import` on a later frame.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(not(target_arch = "wasm32"))]
pub use native::FileBridge;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::FileBridge;

/// Maximum import file name length
#[cfg(target_arch = "wasm32")]
pub const MAX_FILENAME_LEN: usize = 256;

/// File contents handed back by an import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    pub name: String,
    pub contents: String,
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Written to disk
    #[cfg(not(target_arch = "wasm32"))]
    Saved(PathBuf),
    /// Handed to the browser as a download
    #[cfg(target_arch = "wasm32")]
    Downloaded(String),
    /// User dismissed the dialog
    #[cfg(not(target_arch = "wasm32"))]
    Cancelled,
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file too large ({size} bytes, max {max})")]
    TooLarge { size: usize, max: usize },
    #[cfg(target_arch = "wasm32")]
    #[error("file name too long")]
    NameTooLong,
    #[cfg(target_arch = "wasm32")]
    #[error("browser could not read the file")]
    ReadFailed,
    #[cfg(not(target_arch = "wasm32"))]
    #[error("could not open {url}: {reason}")]
    Navigation { url: String, reason: String },
}
