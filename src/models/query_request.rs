use serde::Serialize;

use super::filter::FilterExpression;
use super::sort::SortSpec;

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Request payload for one page of a collection query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterExpression>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<SortSpec>>,

    pub page_size: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            filter: None,
            sorts: None,
            page_size: DEFAULT_PAGE_SIZE,
            start_cursor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortDirection;
    use serde_json::json;

    #[test]
    fn test_default_request_shape() {
        let request = QueryRequest::default();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"page_size": 100})
        );
    }

    #[test]
    fn test_full_request_shape() {
        let request = QueryRequest {
            filter: Some(FilterExpression::from_json(
                json!({"property": "Done", "checkbox": {"equals": true}}),
            )),
            sorts: Some(vec![SortSpec::by_created_time(SortDirection::Descending)]),
            page_size: 25,
            start_cursor: Some("c1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "filter": {"property": "Done", "checkbox": {"equals": true}},
                "sorts": [{"timestamp": "created_time", "direction": "descending"}],
                "page_size": 25,
                "start_cursor": "c1"
            })
        );
    }
}
