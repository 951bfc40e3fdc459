use super::filter::FilterExpression;
use super::sort::{SortDirection, SortSpec};

/// Caller-facing options for a row query.
///
/// Everything defaults: no filter, sort by creation time in ascending
/// order, page size 100.
///
/// # Examples
///
/// ```rust
/// use notebase_link::{QueryOptions, SortDirection, SortSpec};
///
/// let options = QueryOptions::new()
///     .with_order(SortDirection::Descending)
///     .with_page_size(50);
///
/// let custom = QueryOptions::new()
///     .with_sorts(vec![SortSpec::by_property("Score", SortDirection::Descending)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Filter expression; `None` returns every row
    pub filter: Option<FilterExpression>,

    /// Explicit sort specification; `None` sorts by creation time in
    /// `order`
    pub sorts: Option<Vec<SortSpec>>,

    /// Rows per round trip; `None` uses the default page size
    pub page_size: Option<u32>,

    /// Direction of the default creation-time sort; ignored when `sorts`
    /// is set
    pub order: SortDirection,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterExpression) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sorts(mut self, sorts: Vec<SortSpec>) -> Self {
        self.sorts = Some(sorts);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_order(mut self, order: SortDirection) -> Self {
        self.order = order;
        self
    }
}
