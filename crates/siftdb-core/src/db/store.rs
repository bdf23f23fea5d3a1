use crate::entity::{Entity, EntityId};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;

///
/// EntityStore
///
/// Loaded entities for one entity type, keyed by id. Populated once at load
/// time and read-only afterwards; this map is also the `_id` search path.
///

#[derive(Debug, Default, Deref)]
pub struct EntityStore(BTreeMap<EntityId, Entity>);

impl EntityStore {
    // Duplicate ids within one source file: last row wins.
    pub(crate) fn insert(&mut self, entity: Entity) {
        self.0.insert(entity.id().clone(), entity);
    }
}

///
/// StoreRegistry
///
/// Entity type → loaded collection.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct StoreRegistry(BTreeMap<String, EntityStore>);

impl StoreRegistry {
    pub(crate) fn store_mut(&mut self, entity_type: &str) -> &mut EntityStore {
        self.0.entry(entity_type.to_string()).or_default()
    }
}
