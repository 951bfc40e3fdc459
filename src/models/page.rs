use serde::{Deserialize, Serialize};

/// One page of a paginated listing (query, search, block children).
///
/// The server hands back a continuation cursor until the listing is
/// exhausted; callers follow `next_cursor` until it is `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,

    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub has_more: bool,
}
