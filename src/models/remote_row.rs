use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One persisted row as returned by the server.
///
/// Treated as a pass-through artifact: the typed fields cover what the
/// client itself needs (identifier, archive flag, the `properties` map
/// the codec reads), everything else rides along in `extra` so a row can
/// be inspected or re-serialized without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteRow {
    /// Immutable row identifier
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_time: Option<String>,

    /// Soft-delete flag; archived rows no longer appear in queries
    #[serde(default)]
    pub archived: bool,

    /// Property name to wire-shaped property value
    #[serde(default)]
    pub properties: serde_json::Map<String, JsonValue>,

    /// Remaining response fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let row: RemoteRow = serde_json::from_value(json!({
            "id": "row_1",
            "created_time": "2024-05-01T10:00:00.000Z",
            "archived": false,
            "properties": {"Name": {"type": "title", "title": []}},
            "url": "https://notebase.example/row_1",
            "icon": null
        }))
        .unwrap();

        assert_eq!(row.id, "row_1");
        assert!(!row.archived);
        assert!(row.properties.contains_key("Name"));
        assert_eq!(
            row.extra.get("url").and_then(JsonValue::as_str),
            Some("https://notebase.example/row_1")
        );
    }

    #[test]
    fn test_minimal_row_deserializes() {
        let row: RemoteRow = serde_json::from_value(json!({"id": "row_2"})).unwrap();
        assert_eq!(row.id, "row_2");
        assert!(row.properties.is_empty());
        assert_eq!(row.created_time, None);
    }
}
