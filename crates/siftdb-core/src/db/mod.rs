mod index;
mod load;
mod search;
mod store;

pub use index::{FieldIndex, IndexRegistry, TypeIndexes};
pub use search::SearchHit;
pub use store::{EntityStore, StoreRegistry};

use crate::{config::Config, error::InitError, metadata::Metadata};
use tracing::debug;

///
/// Engine
///
/// Composition root: owns the loaded entity collections, their field
/// indexes, and the relationship metadata. Built exactly once by
/// [`Engine::init`] and read-only afterwards, so shared references are safe
/// for concurrent reads. Rebuilding means constructing a fresh engine and
/// swapping it in; there is no incremental update path.
///

#[derive(Debug)]
pub struct Engine {
    metadata: Metadata,
    stores: StoreRegistry,
    indexes: IndexRegistry,
}

impl Engine {
    /// Validate metadata, load every configured source, and build all
    /// indexes. Fails atomically: any error leaves no usable state behind.
    pub fn init(config: &Config) -> Result<Self, InitError> {
        if let Some(entity) = config.metadata.unknown_relationship_entity() {
            return Err(InitError::UnknownRelationshipEntity {
                entity: entity.to_string(),
            });
        }

        let stores = load::load_stores(config)?;
        let indexes = IndexRegistry::build(&stores);

        debug!(
            entity_types = stores.len(),
            relationships = config.metadata.relationships.len(),
            "engine initialized"
        );

        Ok(Self {
            metadata: config.metadata.clone(),
            stores,
            indexes,
        })
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[must_use]
    pub fn stores(&self) -> &StoreRegistry {
        &self.stores
    }

    #[must_use]
    pub fn indexes(&self) -> &IndexRegistry {
        &self.indexes
    }
}
