use crate::{
    config::Config,
    db::store::StoreRegistry,
    entity::{Entity, EntityId},
    error::InitError,
    value::Value,
};
use std::fs;
use tracing::debug;

/// Identifier field lifted out of the attribute map.
const ID_FIELD: &str = "_id";

/// Conventional display-name fields, in precedence order. They stay in the
/// attribute map as well.
const NAME_FIELDS: [&str; 2] = ["name", "subject"];

/// Read every configured source into per-type entity stores.
///
/// Fails atomically: the first missing directory, missing file, or malformed
/// document aborts the whole load.
pub(crate) fn load_stores(config: &Config) -> Result<StoreRegistry, InitError> {
    if !config.directory.is_dir() {
        return Err(InitError::DirectoryNotFound {
            path: config.directory.clone(),
        });
    }

    let mut stores = StoreRegistry::default();

    for source in &config.sources {
        let path = config.source_path(source);
        let bytes = fs::read(&path).map_err(|err| InitError::read(&path, err))?;

        let rows: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_slice(&bytes).map_err(|err| InitError::deserialize(&path, err))?;

        let store = stores.store_mut(&source.entity);
        for row in rows {
            let entity = entity_from_row(&source.entity, row)
                .map_err(|reason| InitError::deserialize(&path, reason))?;
            store.insert(entity);
        }

        debug!(
            entity_type = source.entity.as_str(),
            count = store.len(),
            "loaded entity collection"
        );
    }

    Ok(stores)
}

// Convert one flat JSON object into an Entity, preserving document order.
fn entity_from_row(
    entity_type: &str,
    row: serde_json::Map<String, serde_json::Value>,
) -> Result<Entity, String> {
    let mut id = None;
    let mut attributes = Vec::with_capacity(row.len());

    for (field, raw) in row {
        if field.eq_ignore_ascii_case(ID_FIELD) {
            let value = Value::try_from(raw).map_err(|err| format!("field '{field}': {err}"))?;
            id = EntityId::from_value(&value);
            if id.is_none() {
                return Err(format!("field '{field}' is not a usable identifier"));
            }
            continue;
        }

        let value = Value::try_from(raw).map_err(|err| format!("field '{field}': {err}"))?;
        attributes.push((field, value));
    }

    let id = id.ok_or_else(|| format!("row in '{entity_type}' is missing an '{ID_FIELD}' field"))?;

    let name = NAME_FIELDS.iter().find_map(|name_field| {
        attributes
            .iter()
            .find(|(field, _)| field == name_field)
            .and_then(|(_, value)| value.as_text())
            .map(ToString::to_string)
    });

    Ok(Entity::new(id, entity_type.to_string(), name, attributes))
}
