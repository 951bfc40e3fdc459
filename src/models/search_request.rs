use serde::Serialize;

/// Request payload for the search endpoint.
///
/// The object filter restricts results to collections; row search is not
/// part of this client's surface.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    pub filter: SearchFilter,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

/// Object-kind filter of a search request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub property: String,
    pub value: String,
}

impl SearchRequest {
    /// Search for collections, optionally narrowed by a title query.
    pub fn collections(query: Option<&str>) -> Self {
        Self {
            query: query.map(str::to_string),
            filter: SearchFilter {
                property: "object".to_string(),
                value: "collection".to_string(),
            },
            page_size: None,
            start_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_search_shape() {
        let request = SearchRequest::collections(Some("Experiments"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "Experiments",
                "filter": {"property": "object", "value": "collection"}
            })
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let request = SearchRequest::collections(None);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("query").is_none());
        assert!(value.get("start_cursor").is_none());
    }
}
