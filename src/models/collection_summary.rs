use serde::{Deserialize, Serialize};

/// One collection as produced by collection discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Collection identifier
    pub id: String,

    /// Plain text of the first title segment; empty when the collection
    /// has no title
    pub title: String,
}
