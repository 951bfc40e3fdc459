use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

/// A query filter in the server's JSON shape.
///
/// Normally produced by
/// [`codec::build_equality_filter`](crate::codec::build_equality_filter);
/// the newtype also accepts hand-written filter JSON for conditions the
/// equality builder does not cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterExpression(JsonValue);

impl FilterExpression {
    /// Wrap raw filter JSON.
    pub fn from_json(value: JsonValue) -> Self {
        Self(value)
    }

    /// Combine conditions with logical AND.
    pub fn and(conditions: Vec<JsonValue>) -> Self {
        Self(json!({ "and": conditions }))
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    pub fn into_json(self) -> JsonValue {
        self.0
    }
}
