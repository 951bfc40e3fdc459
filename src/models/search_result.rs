use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One search hit.
///
/// The title rides along in its raw rich-text form; name resolution
/// compares against the first segment's plain content only, matching the
/// server's own search semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,

    #[serde(default)]
    pub title: JsonValue,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, JsonValue>,
}

impl SearchResult {
    /// Plain text of the first title segment, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title
            .get(0)?
            .get("text")?
            .get("content")?
            .as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_text_reads_first_segment() {
        let result: SearchResult = serde_json::from_value(json!({
            "id": "col_1",
            "title": [
                {"type": "text", "text": {"content": "Experiments"}, "plain_text": "Experiments"},
                {"type": "text", "text": {"content": " (archive)"}}
            ]
        }))
        .unwrap();
        assert_eq!(result.title_text(), Some("Experiments"));
    }

    #[test]
    fn test_empty_title_yields_none() {
        let result: SearchResult =
            serde_json::from_value(json!({"id": "col_2", "title": []})).unwrap();
        assert_eq!(result.title_text(), None);

        let untitled: SearchResult = serde_json::from_value(json!({"id": "col_3"})).unwrap();
        assert_eq!(untitled.title_text(), None);
    }
}
