//! ## Crate layout
//! - `core`: the engine — value model, entity collections, field indexes,
//!   loader, and search.
//!
//! The `prelude` module mirrors the surface embedders use: build a
//! [`core::config::Config`], initialize an [`core::db::Engine`], then call
//! `search` for exact-match lookups with relationship expansion.

pub use siftdb_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use siftdb_core::{Engine, InitError, SearchHit};

///
/// Prelude
///

pub mod prelude {
    pub use siftdb_core::prelude::*;
}
