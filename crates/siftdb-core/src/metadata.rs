use serde::Deserialize;

///
/// Relationship
///
/// Declared field-equality link between two entity types: an entity of
/// `from_type` whose `from_field` holds a value equal to some `to_type`
/// entity's `to_field` is related to it. Declarations are directional;
/// queries resolve them in both directions.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Relationship {
    pub from_type: String,
    pub from_field: String,
    pub to_type: String,
    pub to_field: String,
}

///
/// Metadata
///
/// Static description of which entity types exist and how they connect.
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Metadata {
    pub entities: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Metadata {
    #[must_use]
    pub fn has_entity(&self, entity_type: &str) -> bool {
        self.entities.iter().any(|entity| entity == entity_type)
    }

    /// First relationship endpoint that names an undeclared entity type.
    pub(crate) fn unknown_relationship_entity(&self) -> Option<&str> {
        self.relationships
            .iter()
            .flat_map(|rel| [rel.from_type.as_str(), rel.to_type.as_str()])
            .find(|entity| !self.has_entity(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(from: &str, to: &str) -> Relationship {
        Relationship {
            from_type: from.to_string(),
            from_field: "assignee_id".to_string(),
            to_type: to.to_string(),
            to_field: "_id".to_string(),
        }
    }

    #[test]
    fn relationships_must_reference_declared_entities() {
        let metadata = Metadata {
            entities: vec!["users".to_string(), "tickets".to_string()],
            relationships: vec![rel("tickets", "users")],
        };
        assert_eq!(metadata.unknown_relationship_entity(), None);

        let metadata = Metadata {
            entities: vec!["users".to_string()],
            relationships: vec![rel("tickets", "users")],
        };
        assert_eq!(metadata.unknown_relationship_entity(), Some("tickets"));
    }
}
