use crate::{
    db::store::{EntityStore, StoreRegistry},
    entity::EntityId,
    value::{IndexKey, Value},
};
use derive_more::Deref;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

///
/// FieldIndex
///
/// Value key → ids of the owning entities. List attributes contribute one
/// posting per element. `len()` is the distinct-value count for the field.
///

#[derive(Debug, Default, Deref)]
pub struct FieldIndex(BTreeMap<IndexKey, BTreeSet<EntityId>>);

impl FieldIndex {
    fn insert(&mut self, key: IndexKey, id: EntityId) {
        self.0.entry(key).or_default().insert(id);
    }
}

///
/// TypeIndexes
///
/// Field name → index, for the fields of one entity type that earned one.
///

#[derive(Debug, Default, Deref)]
pub struct TypeIndexes(BTreeMap<String, FieldIndex>);

///
/// IndexRegistry
///
/// Entity type → per-field indexes. Built once after load from the stores;
/// fields without an index remain searchable through the scan path.
///

#[derive(Debug, Default, Deref)]
pub struct IndexRegistry(BTreeMap<String, TypeIndexes>);

impl IndexRegistry {
    /// Build all per-field indexes from the loaded stores.
    ///
    /// Indexability rule (fixed): a field earns an index iff
    /// - it is present on every entity of its type,
    /// - it yields at least one indexable key,
    /// - any of its values is a boolean or a list, or its distinct-key count
    ///   is at most half the entity count.
    ///
    /// `_id` is never indexed here; the store's own id map covers it.
    pub(crate) fn build(stores: &StoreRegistry) -> Self {
        let mut registry = BTreeMap::new();

        for (entity_type, store) in stores.iter() {
            let indexes = build_type_indexes(store);
            debug!(
                entity_type = entity_type.as_str(),
                fields = indexes.len(),
                "built field indexes"
            );
            registry.insert(entity_type.clone(), indexes);
        }

        Self(registry)
    }

    #[must_use]
    pub fn field_index(&self, entity_type: &str, field: &str) -> Option<&FieldIndex> {
        self.0.get(entity_type).and_then(|indexes| indexes.get(field))
    }
}

#[derive(Default)]
struct FieldStats {
    present: usize,
    bool_or_list: bool,
    index: FieldIndex,
}

fn build_type_indexes(store: &EntityStore) -> TypeIndexes {
    let total = store.len();
    let mut stats: BTreeMap<String, FieldStats> = BTreeMap::new();

    for entity in store.values() {
        for (field, value) in entity.attributes() {
            let entry = stats.entry(field.to_string()).or_default();
            entry.present += 1;
            if matches!(value, Value::Bool(_) | Value::List(_)) {
                entry.bool_or_list = true;
            }
            for key in IndexKey::element_keys(value) {
                entry.index.insert(key, entity.id().clone());
            }
        }
    }

    let mut indexes = BTreeMap::new();
    for (field, field_stats) in stats {
        let keyed = !field_stats.index.is_empty();
        let low_cardinality = field_stats.index.len() * 2 <= total;
        if field_stats.present == total && keyed && (field_stats.bool_or_list || low_cardinality) {
            indexes.insert(field, field_stats.index);
        }
    }

    TypeIndexes(indexes)
}
