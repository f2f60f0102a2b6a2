use serde::{Deserialize, Serialize};

/// Pagination envelope used by the list endpoints
///
/// Deck lists are page-number paginated and carry a count; card lists use
/// cursor pagination and omit it, so `count` is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items, when the endpoint reports one
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns the number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the items on this page
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.results.iter()
    }
}
