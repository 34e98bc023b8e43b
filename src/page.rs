//! Page requests and the paginated response envelope.
//!
//! A storefront list view asks for one page at a time with `page` and
//! `per_page` query parameters and receives an envelope carrying the page it
//! got, the page size, the total number of matching items and the items
//! themselves:
//!
//! ```json
//! {
//!   "page": 2,
//!   "per_page": 10,
//!   "totalItems": 42,
//!   "nextPageUrl": "http://127.0.0.1:8000/product/product?page=3&per_page=10",
//!   "prevPageUrl": "http://127.0.0.1:8000/product/product?page=1&per_page=10",
//!   "results": []
//! }
//! ```
//!
//! The link fields are carried as opaque strings; navigation is derived from
//! the counts.

use crate::error::{PaginationError, Result};
use crate::window::{PageWindow, PageWindowCalculator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page size used when none is given.
pub const DEFAULT_PER_PAGE: usize = 10;

/// A request for one page of a collection.
///
/// # Examples
///
/// ```rust
/// use storefront_paginator::page::PageRequest;
///
/// let request = PageRequest::new(3, 10).unwrap();
/// assert_eq!(request.offset(), 20);
/// assert_eq!(request.limit(), 10);
/// assert_eq!(request.to_query_string(), "page=3&per_page=10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Validates and builds a request. Pages are 1-based.
    pub fn new(page: usize, per_page: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(PaginationError::ZeroItemsPerPage);
        }
        if page == 0 {
            return Err(PaginationError::InvalidPage {
                page,
                page_count: 0,
            });
        }
        Ok(Self { page, per_page })
    }

    /// The requested 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The requested page size.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of items skipped before this page. Saturates at `usize::MAX`.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> usize {
        self.per_page
    }

    /// The same page size, one page further.
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..*self
        }
    }

    /// The same page size, one page back, or `None` on page 1.
    pub fn previous(&self) -> Option<Self> {
        (self.page > 1).then(|| Self {
            page: self.page - 1,
            ..*self
        })
    }

    /// The same page size at another page.
    pub fn with_page(&self, page: usize) -> Result<Self> {
        Self::new(page, self.per_page)
    }

    /// `[start, end)` bounds of this page within a collection of `len` items.
    ///
    /// Both bounds are clamped to `len`, so a page past the end yields an
    /// empty range.
    ///
    /// ```rust
    /// use storefront_paginator::page::PageRequest;
    ///
    /// let request = PageRequest::new(3, 10).unwrap();
    /// assert_eq!(request.slice_bounds(25), (20, 25));
    /// assert_eq!(request.slice_bounds(15), (15, 15));
    /// ```
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset().min(len);
        let end = start.saturating_add(self.per_page).min(len);
        (start, end)
    }

    /// The request as query parameters.
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }

    /// The request plus an optional `sort` parameter as query parameters.
    ///
    /// ```rust
    /// use storefront_paginator::page::PageRequest;
    /// use storefront_paginator::sorting::ProductSort;
    ///
    /// let sort: ProductSort = "-price".parse().unwrap();
    /// let request = PageRequest::new(2, 10).unwrap();
    /// assert_eq!(
    ///     request.to_query_string_with_sort(Some(&sort)),
    ///     "page=2&per_page=10&sort=-price"
    /// );
    /// ```
    pub fn query_pairs_with_sort<S: fmt::Display>(
        &self,
        sort: Option<&S>,
    ) -> Vec<(&'static str, String)> {
        let mut pairs = self.query_pairs().to_vec();
        if let Some(sort) = sort {
            pairs.push(("sort", sort.to_string()));
        }
        pairs
    }

    /// The request as a `key=value&...` query string.
    pub fn to_query_string(&self) -> String {
        join_query(&self.query_pairs())
    }

    /// The request plus an optional `sort` parameter as a query string.
    pub fn to_query_string_with_sort<S: fmt::Display>(&self, sort: Option<&S>) -> String {
        join_query(&self.query_pairs_with_sort(sort))
    }
}

fn join_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Pagination counters reported alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// The page being displayed.
    pub page: usize,
    /// Number of items on each page.
    pub per_page: usize,
    /// Number of matching items in the whole collection.
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    /// Link to the next page, if the server provided one.
    #[serde(rename = "nextPageUrl", default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    /// Link to the previous page, if the server provided one.
    #[serde(rename = "prevPageUrl", default, skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,
}

impl PageMeta {
    /// Counters for `request` over a collection of `total_items`, without links.
    pub fn for_request(request: PageRequest, total_items: usize) -> Self {
        Self {
            page: request.page(),
            per_page: request.per_page(),
            total_items,
            next_page_url: None,
            prev_page_url: None,
        }
    }

    /// True when items remain beyond this page.
    pub fn has_next(&self) -> bool {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .saturating_add(self.per_page)
            < self.total_items
    }

    /// True when this is not the first page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Total number of pages, or `None` when `per_page` is zero.
    pub fn page_count(&self) -> Option<usize> {
        crate::window::page_count(self.total_items, self.per_page).ok()
    }

    /// The page request that produced these counters.
    pub fn request(&self) -> Result<PageRequest> {
        PageRequest::new(self.page, self.per_page)
    }

    /// The page window for these counters.
    ///
    /// Fails when the server reports a page outside the collection, which
    /// happens when a request overshoots the last page.
    ///
    /// ```rust
    /// use storefront_paginator::page::PageMeta;
    /// use storefront_paginator::page::PageRequest;
    ///
    /// let meta = PageMeta::for_request(PageRequest::new(5, 10).unwrap(), 100);
    /// let window = meta.window(3).unwrap();
    /// assert_eq!(window.to_string(), "1 … 4 [5] 6 … 10");
    /// ```
    pub fn window(&self, max_visible: usize) -> Result<PageWindow> {
        PageWindowCalculator::new()
            .with_max_visible(max_visible)?
            .calculate(self.total_items, self.per_page, self.page)
    }
}

/// One page of results with its counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Counters describing where this page sits in the collection.
    #[serde(flatten)]
    pub meta: PageMeta,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Wraps `results` as the page `request` selected from `total_items`.
    pub fn new(request: PageRequest, total_items: usize, results: Vec<T>) -> Self {
        Self {
            meta: PageMeta::for_request(request, total_items),
            results,
        }
    }

    /// The page counters.
    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    /// True when this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Maps the items, keeping the counters.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            meta: self.meta,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        assert_eq!(
            PageRequest::new(1, 0),
            Err(PaginationError::ZeroItemsPerPage)
        );
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(PaginationError::InvalidPage { page: 0, .. })
        ));
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10).unwrap());
    }

    #[test]
    fn test_request_navigation() {
        let request = PageRequest::new(1, 25).unwrap();
        assert_eq!(request.previous(), None);
        let next = request.next();
        assert_eq!((next.page(), next.per_page()), (2, 25));
        assert_eq!(next.previous(), Some(request));
        assert_eq!(next.offset(), 25);
    }

    #[test]
    fn test_slice_bounds() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(request.slice_bounds(0), (0, 0));
        assert_eq!(request.slice_bounds(4), (0, 4));
        assert_eq!(request.with_page(2).unwrap().slice_bounds(20), (10, 20));
    }

    #[test]
    fn test_meta_has_next_matches_offset_rule() {
        let meta = |page, total| PageMeta::for_request(PageRequest::new(page, 10).unwrap(), total);

        assert!(meta(1, 11).has_next());
        assert!(!meta(1, 10).has_next());
        assert!(!meta(2, 20).has_next());
        assert!(meta(2, 21).has_next());
        assert!(!meta(1, 0).has_next());

        assert!(!meta(1, 50).has_prev());
        assert!(meta(2, 50).has_prev());
        assert_eq!(meta(2, 21).page_count(), Some(3));
    }

    #[test]
    fn test_meta_window_rejects_overshoot() {
        let meta = PageMeta::for_request(PageRequest::new(4, 10).unwrap(), 30);
        assert!(matches!(
            meta.window(3),
            Err(PaginationError::InvalidPage { page: 4, page_count: 3 })
        ));
    }

    #[test]
    fn test_envelope_deserializes() {
        let json = r#"{
            "page": 2,
            "per_page": 2,
            "totalItems": 5,
            "nextPageUrl": "http://127.0.0.1:8000/category?page=3&per_page=2",
            "prevPageUrl": null,
            "results": ["a", "b"]
        }"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.meta().page, 2);
        assert_eq!(page.meta().total_items, 5);
        assert!(page.meta().has_next());
        assert_eq!(page.meta().prev_page_url, None);
        assert_eq!(page.results, vec!["a", "b"]);
    }

    #[test]
    fn test_extreme_pages_saturate() {
        let request = PageRequest::new(usize::MAX, 10).unwrap();
        assert_eq!(request.offset(), usize::MAX);
        assert_eq!(request.slice_bounds(3), (3, 3));
        assert_eq!(request.next().page(), usize::MAX);

        let json = r#"{"page": 18446744073709551615, "per_page": 2, "totalItems": 5, "results": []}"#;
        let page: Page<u8> = serde_json::from_str(json).unwrap();
        assert!(!page.meta().has_next());
        assert!(page.meta().has_prev());
        assert!(page.meta().window(3).is_err());
    }

    #[test]
    fn test_query_string_with_sort() {
        let request = PageRequest::new(1, 5).unwrap();
        assert_eq!(
            request.to_query_string_with_sort(None::<&String>),
            "page=1&per_page=5"
        );
        assert_eq!(
            request.query_pairs_with_sort(Some(&"name")),
            vec![
                ("page", "1".to_string()),
                ("per_page", "5".to_string()),
                ("sort", "name".to_string()),
            ]
        );
    }

    #[test]
    fn test_envelope_serializes_wire_names() {
        let page = Page::new(PageRequest::new(1, 10).unwrap(), 3, vec![1, 2, 3]);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "page": 1,
                "per_page": 10,
                "totalItems": 3,
                "results": [1, 2, 3],
            })
        );
        assert_eq!(page.map(|n| n * 2).results, vec![2, 4, 6]);
    }
}
