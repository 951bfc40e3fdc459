use serde::Serialize;
use serde_json::Value as JsonValue;

/// Request payload for row creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRowRequest {
    pub parent: ParentRef,

    /// Encoded properties, shaped per the collection schema
    pub properties: serde_json::Map<String, JsonValue>,
}

/// Parent reference of a new row.
#[derive(Debug, Clone, Serialize)]
pub struct ParentRef {
    pub collection_id: String,
}

/// Request payload for a row update.
///
/// `properties` overwrites only the keys it carries; `archived: true` is
/// the soft-delete path. At least one of the two is set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Map<String, JsonValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl UpdateRowRequest {
    /// Overwrite the given properties.
    pub fn properties(properties: serde_json::Map<String, JsonValue>) -> Self {
        Self {
            properties: Some(properties),
            archived: None,
        }
    }

    /// Archive the row (soft delete).
    pub fn archive() -> Self {
        Self {
            properties: None,
            archived: Some(true),
        }
    }
}

/// Request payload for appending block children to a page.
#[derive(Debug, Clone, Serialize)]
pub struct AppendBlocksRequest {
    pub children: Vec<JsonValue>,
}
