//! Core runtime for siftdb: the tagged attribute value model, entity
//! collections, per-field indexes, the loader, and the search entry point.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod metadata;
pub mod value;

pub use db::{Engine, SearchHit};
pub use error::InitError;

///
/// Prelude
///
/// Domain vocabulary only; no stores, loaders, or helpers.
///

pub mod prelude {
    pub use crate::{
        config::{Config, Source},
        db::{Engine, SearchHit},
        entity::{Entity, EntityId, FieldValue},
        error::InitError,
        metadata::{Metadata, Relationship},
        value::{IndexKey, Value},
    };
}
