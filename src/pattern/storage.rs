//! Pattern storage
//!
//! Ordered list of patterns plus the index of the one being edited.
//! The index is always a valid position, or 0 when the list is empty.

use thiserror::Error;
use tracing::debug;

use super::model::{Pattern, PlatformModel, TileUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("no patterns stored")]
    Empty,
    #[error("pattern {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("tile {id} out of range (pattern has {len} tiles)")]
    TileOutOfRange { id: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct PatternStorage {
    patterns: Vec<Pattern>,
    index: usize,
    /// Tiles per pattern created by `add`
    tile_count: usize,
}

impl PatternStorage {
    /// Empty storage whose new patterns have `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        Self {
            patterns: Vec::new(),
            index: 0,
            tile_count,
        }
    }

    /// Storage pre-seeded with `count` default patterns, first one selected
    pub fn seeded(tile_count: usize, count: usize) -> Self {
        Self {
            patterns: vec![Pattern::new(tile_count); count],
            index: 0,
            tile_count,
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Append a default pattern and select it
    pub fn add(&mut self) {
        self.patterns.push(Pattern::new(self.tile_count));
        self.index = self.patterns.len() - 1;
        debug!(index = self.index, "pattern added");
    }

    /// Delete the current pattern. No-op when empty.
    pub fn remove(&mut self) {
        if self.patterns.is_empty() {
            return;
        }
        self.patterns.remove(self.index);
        if self.index >= self.patterns.len() {
            self.index = self.patterns.len().saturating_sub(1);
        }
        debug!(index = self.index, remaining = self.patterns.len(), "pattern removed");
    }

    /// Select pattern `index`; out-of-range indices leave the selection unchanged
    pub fn select(&mut self, index: usize) -> Result<(), PatternError> {
        if index >= self.patterns.len() {
            return Err(PatternError::IndexOutOfRange {
                index,
                len: self.patterns.len(),
            });
        }
        self.index = index;
        Ok(())
    }

    pub fn next(&mut self) {
        if !self.patterns.is_empty() {
            self.index = (self.index + 1) % self.patterns.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.patterns.is_empty() {
            self.index = (self.index + self.patterns.len() - 1) % self.patterns.len();
        }
    }

    /// Replace every pattern (used by import) and select the first
    pub fn update(&mut self, patterns: Vec<Pattern>) {
        self.patterns = patterns;
        self.index = 0;
        debug!(count = self.patterns.len(), "patterns replaced");
    }

    pub fn all(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn current(&self) -> Option<&Pattern> {
        self.patterns.get(self.index)
    }

    /// Tile `id` of the current pattern
    pub fn tile(&self, id: usize) -> Option<&PlatformModel> {
        self.current().and_then(|p| p.get(id))
    }

    /// Write one tile of the current pattern
    pub fn set(&mut self, update: TileUpdate) -> Result<(), PatternError> {
        let pattern = self
            .patterns
            .get_mut(self.index)
            .ok_or(PatternError::Empty)?;
        let len = pattern.len();
        if pattern.set(update.id, update.model) {
            Ok(())
        } else {
            Err(PatternError::TileOutOfRange { id: update.id, len })
        }
    }
}
