use crate::value::Value;
use derive_more::Display;
use serde::Serialize;

///
/// EntityId
///
/// Opaque identifier, unique within its entity type. Stored as a
/// string-comparable token: numeric source values canonicalize to their
/// decimal text form so `1` and `"1"` name the same entity; text ids are
/// taken verbatim.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct EntityId(String);

impl EntityId {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Coerce a query value into canonical id form.
    ///
    /// Booleans, nulls, and lists cannot name an id and yield `None`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(Self::new(s.clone())),
            Value::Int(i) => Some(Self::new(i.to_string())),
            Value::Uint(u) => Some(Self::new(u.to_string())),
            Value::Float(f) if f.is_integral() => Some(Self::new((f.get() as i128).to_string())),
            Value::Float(_) | Value::Bool(_) | Value::List(_) | Value::Null => None,
        }
    }
}

impl From<&str> for EntityId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for EntityId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

///
/// Entity
///
/// One loaded record: id, entity type, optional display name, and the
/// insertion-ordered attribute list. Immutable after construction.
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    id: EntityId,
    entity_type: String,
    name: Option<String>,
    attributes: Vec<(String, Value)>,
}

impl Entity {
    pub(crate) fn new(
        id: EntityId,
        entity_type: String,
        name: Option<String>,
        attributes: Vec<(String, Value)>,
    ) -> Self {
        Self {
            id,
            entity_type,
            name,
            attributes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Raw attribute lookup; `None` when the attribute is absent.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Typed, missing-safe attribute access.
    ///
    /// Absent or uncoercible attributes resolve to the type's zero value
    /// (empty string, false, zero, empty list) — never a failure, since
    /// schemas are not enforced across entities of one type.
    #[must_use]
    pub fn attribute<T: FieldValue>(&self, field: &str) -> T {
        self.get(field)
            .and_then(T::from_value)
            .unwrap_or_default()
    }
}

///
/// FieldValue
///
/// Conversion contract for typed attribute access.
///

pub trait FieldValue: Default + Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FieldValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl FieldValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        if let Value::Bool(b) = value {
            Some(*b)
        } else {
            None
        }
    }
}

impl FieldValue for i64 {
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            Value::Uint(u) => Self::try_from(*u).ok(),
            Value::Float(f) if f.is_integral() => {
                let v = f.get();
                if v >= Self::MIN as f64 && v <= Self::MAX as f64 {
                    Some(v as Self)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl FieldValue for u64 {
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_precision_loss)]
    #[expect(clippy::cast_sign_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Uint(u) => Some(*u),
            Value::Int(i) => Self::try_from(*i).ok(),
            Value::Float(f) if f.is_integral() => {
                let v = f.get();
                if v >= 0.0 && v <= Self::MAX as f64 {
                    Some(v as Self)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    #[expect(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(f.get()),
            Value::Int(i) => Some(*i as Self),
            Value::Uint(u) => Some(*u as Self),
            _ => None,
        }
    }
}

impl FieldValue for Vec<String> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_list().map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_text().map(ToString::to_string))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entity {
        Entity::new(
            EntityId::new("1"),
            "users".to_string(),
            Some("Francisca Rasmussen".to_string()),
            vec![
                ("name".to_string(), Value::Text("Francisca Rasmussen".into())),
                ("verified".to_string(), Value::Bool(true)),
                ("rank".to_string(), Value::Uint(7)),
                (
                    "tags".to_string(),
                    Value::from_list(vec!["Ohio", "Pennsylvania"]),
                ),
            ],
        )
    }

    #[test]
    fn attributes_preserve_document_order() {
        let entity = sample();
        let names: Vec<&str> = entity.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "verified", "rank", "tags"]);
    }

    #[test]
    fn typed_access_coerces_present_attributes() {
        let entity = sample();
        assert_eq!(entity.attribute::<String>("name"), "Francisca Rasmussen");
        assert!(entity.attribute::<bool>("verified"));
        assert_eq!(entity.attribute::<i64>("rank"), 7);
        assert_eq!(entity.attribute::<u64>("rank"), 7);
        assert_eq!(
            entity.attribute::<Vec<String>>("tags"),
            vec!["Ohio".to_string(), "Pennsylvania".to_string()]
        );
    }

    #[test]
    fn missing_attributes_resolve_to_zero_values() {
        let entity = sample();
        assert_eq!(entity.attribute::<String>("nope"), "");
        assert!(!entity.attribute::<bool>("nope"));
        assert_eq!(entity.attribute::<i64>("nope"), 0);
        assert_eq!(entity.attribute::<Vec<String>>("nope"), Vec::<String>::new());
    }

    #[test]
    fn mismatched_attribute_types_resolve_to_zero_values() {
        let entity = sample();
        // text attribute read as bool, list read as string
        assert!(!entity.attribute::<bool>("name"));
        assert_eq!(entity.attribute::<String>("tags"), "");
    }

    #[test]
    fn id_coercion_canonicalizes_numbers() {
        assert_eq!(
            EntityId::from_value(&Value::Uint(24)),
            Some(EntityId::new("24"))
        );
        assert_eq!(
            EntityId::from_value(&Value::Text("24".into())),
            Some(EntityId::new("24"))
        );
        assert_eq!(EntityId::from_value(&Value::Bool(true)), None);
        assert_eq!(EntityId::from_value(&Value::Null), None);
    }
}
