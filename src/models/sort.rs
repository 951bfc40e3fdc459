use serde::{Deserialize, Serialize};

/// Sort direction for query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One entry of a query's `sorts` array.
///
/// Sorts either by a named property or by one of the two server
/// timestamps; exactly one of `property`/`timestamp` is set.
///
/// # Example JSON
///
/// ```json
/// {"timestamp": "created_time", "direction": "ascending"}
/// {"property": "Score", "direction": "descending"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort by a named property.
    pub fn by_property(name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: Some(name.into()),
            timestamp: None,
            direction,
        }
    }

    /// Sort by creation time.
    pub fn by_created_time(direction: SortDirection) -> Self {
        Self {
            property: None,
            timestamp: Some("created_time".to_string()),
            direction,
        }
    }

    /// Sort by last-edit time.
    pub fn by_last_edited_time(direction: SortDirection) -> Self {
        Self {
            property: None,
            timestamp: Some("last_edited_time".to_string()),
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_time_sort_shape() {
        let sort = SortSpec::by_created_time(SortDirection::Ascending);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!({"timestamp": "created_time", "direction": "ascending"})
        );
    }

    #[test]
    fn test_property_sort_shape() {
        let sort = SortSpec::by_property("Score", SortDirection::Descending);
        assert_eq!(
            serde_json::to_value(&sort).unwrap(),
            json!({"property": "Score", "direction": "descending"})
        );
    }

    #[test]
    fn test_direction_defaults_to_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }
}
