use crate::{
    db::Engine,
    entity::{Entity, EntityId},
    value::Value,
};
use std::collections::BTreeSet;
use tracing::trace;

/// Field name convention for identifier lookups, matched case-insensitively.
const ID_FIELD: &str = "_id";

///
/// SearchHit
///
/// One matched entity plus the related entities reachable through declared
/// relationships, resolved in both directions. Related entities are borrowed
/// from the engine; expansion never mutates the stored entity.
///

#[derive(Clone, Debug)]
pub struct SearchHit<'a> {
    pub entity: &'a Entity,
    pub related: Vec<&'a Entity>,
}

impl Engine {
    /// Search entities of `entity_type` whose `field` equals `value`.
    ///
    /// `None` is the designated no-result outcome: unknown entity types,
    /// unknown fields, uncoercible query values, and plain zero-match sets
    /// all land there — never an error. A `Some` result is never empty.
    pub fn search<'a>(
        &'a self,
        entity_type: &str,
        field: &str,
        value: impl Into<Value>,
    ) -> Option<Vec<SearchHit<'a>>> {
        let value = value.into();
        let store = self.stores().get(entity_type)?;

        let matched: Vec<&Entity> = if field.eq_ignore_ascii_case(ID_FIELD) {
            trace!(entity_type, field, plan = "id", "search plan");
            let id = EntityId::from_value(&value)?;
            store.get(&id).into_iter().collect()
        } else if let Some(index) = self.indexes().field_index(entity_type, field) {
            trace!(entity_type, field, plan = "index", "search plan");
            let key = value.index_key()?;
            index
                .get(&key)
                .map(|ids| ids.iter().filter_map(|id| store.get(id)).collect())
                .unwrap_or_default()
        } else {
            trace!(entity_type, field, plan = "scan", "search plan");
            store
                .values()
                .filter(|entity| {
                    entity
                        .get(field)
                        .is_some_and(|stored| stored.matches(&value))
                })
                .collect()
        };

        if matched.is_empty() {
            return None;
        }

        Some(
            matched
                .into_iter()
                .map(|entity| SearchHit {
                    entity,
                    related: self.related_entities(entity),
                })
                .collect(),
        )
    }

    /// Expand one matched entity through every relationship, both as the
    /// declaring side and as the target side. Deduplicated by (type, id) in
    /// encounter order.
    fn related_entities<'a>(&'a self, entity: &Entity) -> Vec<&'a Entity> {
        let mut related: Vec<&Entity> = Vec::new();
        let mut seen: BTreeSet<(&str, &EntityId)> = BTreeSet::new();

        for rel in &self.metadata().relationships {
            if rel.from_type == entity.entity_type() {
                self.collect_relation_matches(
                    entity,
                    &rel.from_field,
                    &rel.to_type,
                    &rel.to_field,
                    &mut related,
                    &mut seen,
                );
            }
            if rel.to_type == entity.entity_type() {
                self.collect_relation_matches(
                    entity,
                    &rel.to_field,
                    &rel.from_type,
                    &rel.from_field,
                    &mut related,
                    &mut seen,
                );
            }
        }

        related
    }

    // One directional step of the field-equality relation: take the source
    // entity's values under `source_field` and find every `target_type`
    // entity whose `target_field` holds an equal value.
    fn collect_relation_matches<'a>(
        &'a self,
        source: &Entity,
        source_field: &str,
        target_type: &str,
        target_field: &str,
        related: &mut Vec<&'a Entity>,
        seen: &mut BTreeSet<(&'a str, &'a EntityId)>,
    ) {
        let Some(store) = self.stores().get(target_type) else {
            return;
        };

        for value in relation_values(source, source_field) {
            let targets: Vec<&Entity> = if target_field.eq_ignore_ascii_case(ID_FIELD) {
                EntityId::from_value(&value)
                    .and_then(|id| store.get(&id))
                    .into_iter()
                    .collect()
            } else if let Some(index) = self.indexes().field_index(target_type, target_field) {
                value
                    .index_key()
                    .and_then(|key| index.get(&key))
                    .map(|ids| ids.iter().filter_map(|id| store.get(id)).collect())
                    .unwrap_or_default()
            } else {
                store
                    .values()
                    .filter(|candidate| {
                        candidate
                            .get(target_field)
                            .is_some_and(|stored| stored.matches(&value))
                    })
                    .collect()
            };

            for target in targets {
                if seen.insert((target.entity_type(), target.id())) {
                    related.push(target);
                }
            }
        }
    }
}

// Values the relation compares on the source side: the canonical id for
// `_id`, otherwise the attribute's scalar value or each list element.
fn relation_values(source: &Entity, field: &str) -> Vec<Value> {
    if field.eq_ignore_ascii_case(ID_FIELD) {
        return vec![Value::Text(source.id().as_str().to_string())];
    }

    match source.get(field) {
        Some(Value::List(items)) => items.clone(),
        Some(value) => vec![value.clone()],
        None => Vec::new(),
    }
}
