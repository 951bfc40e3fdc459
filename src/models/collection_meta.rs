use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Collection metadata as returned by the retrieve endpoint.
///
/// Only the `properties` map matters to this client (it becomes the
/// cached [`Schema`](super::Schema)); the rest is kept for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMeta {
    pub id: String,

    #[serde(default)]
    pub title: JsonValue,

    #[serde(default)]
    pub properties: serde_json::Map<String, JsonValue>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}
