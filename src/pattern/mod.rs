//! Stepping stone patterns
//!
//! - `model`: tile and pattern types
//! - `storage`: the ordered pattern list being edited
//! - `io`: JSON exchange format

mod model;
mod storage;
pub mod io;

pub use model::*;
pub use storage::*;
