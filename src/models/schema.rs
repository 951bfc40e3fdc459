use std::collections::btree_map;
use std::collections::BTreeMap;

use serde_json::Value as JsonValue;

use super::property_type::PropertyType;

/// One property of a collection schema.
///
/// `kind` keeps the raw wire type tag rather than a parsed
/// [`PropertyType`] so a collection carrying an exotic property type can
/// still be bound; parsing happens at each use site and fails there with
/// an unsupported-type error.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    /// Property name, unique within the collection
    pub name: String,
    /// Server-assigned property id
    pub id: String,
    /// Raw wire type tag (e.g. "select")
    pub kind: String,
    /// Full property object as returned by the server
    pub details: JsonValue,
}

impl SchemaEntry {
    /// Build an entry from one `(name, property-object)` pair of the
    /// collection metadata.
    pub fn from_wire(name: &str, details: &JsonValue) -> Self {
        let id = details
            .get("id")
            .and_then(JsonValue::as_str)
            .unwrap_or("")
            .to_string();
        let kind = details
            .get("type")
            .and_then(JsonValue::as_str)
            .unwrap_or("")
            .to_string();
        Self {
            name: name.to_string(),
            id,
            kind,
            details: details.clone(),
        }
    }

    /// Parse the wire tag into a supported [`PropertyType`].
    pub fn property_type(&self) -> Option<PropertyType> {
        PropertyType::parse(&self.kind)
    }
}

/// Property schema of one collection: name to [`SchemaEntry`].
///
/// Fetched once when a logger binds to its collection and never mutated
/// afterwards; a schema change on the server side is not picked up until
/// a new logger is constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    entries: BTreeMap<String, SchemaEntry>,
}

impl Schema {
    /// Build a schema from the `properties` map of collection metadata.
    pub fn from_properties(properties: &serde_json::Map<String, JsonValue>) -> Self {
        let entries = properties
            .iter()
            .map(|(name, details)| (name.clone(), SchemaEntry::from_wire(name, details)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Property names in deterministic (lexicographic) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SchemaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_properties() -> serde_json::Map<String, JsonValue> {
        let value = json!({
            "Name": {"id": "title", "type": "title", "title": {}},
            "Status": {
                "id": "a%40b",
                "type": "select",
                "select": {"options": [{"name": "Done"}, {"name": "Open"}]}
            },
            "Formula": {"id": "x1", "type": "formula", "formula": {"expression": "1+1"}}
        });
        match value {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_from_properties_extracts_id_and_kind() {
        let schema = Schema::from_properties(&sample_properties());
        assert_eq!(schema.len(), 3);

        let status = schema.get("Status").expect("Status should exist");
        assert_eq!(status.id, "a%40b");
        assert_eq!(status.kind, "select");
        assert_eq!(status.property_type(), Some(PropertyType::Select));
        assert!(status.details.get("select").is_some());
    }

    #[test]
    fn test_exotic_kind_is_kept_but_does_not_parse() {
        let schema = Schema::from_properties(&sample_properties());
        let formula = schema.get("Formula").expect("Formula should exist");
        assert_eq!(formula.kind, "formula");
        assert_eq!(formula.property_type(), None);
    }

    #[test]
    fn test_names_are_sorted() {
        let schema = Schema::from_properties(&sample_properties());
        let names: Vec<&str> = schema.names().collect();
        assert_eq!(names, vec!["Formula", "Name", "Status"]);
    }
}
