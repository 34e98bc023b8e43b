//! Page window calculation.
//!
//! Given a total item count, a page size and the current page, this module
//! works out which page indicators a pagination control should show: the
//! first and last pages are always present, up to `max_visible` pages are
//! centered on the current page, and an ellipsis marks each elided range.
//!
//! The calculation is a pure function of its inputs. Nothing is cached and
//! nothing is clamped: a current page outside `[1, page_count]` is reported as
//! [`PaginationError::InvalidPage`]. Callers that want clamping (such as the
//! [`paginator`](crate::paginator) widget) clamp before calling.
//!
//! # Examples
//!
//! ```rust
//! use storefront_paginator::window::{PageIndicator, PageWindow};
//!
//! let window = PageWindow::calculate(100, 10, 5).unwrap();
//! assert_eq!(window.to_string(), "1 … 4 [5] 6 … 10");
//! assert!(window.can_go_previous());
//! assert!(window.can_go_next());
//! assert_eq!(window.indicators()[0], PageIndicator::page(1, false));
//! ```

use crate::error::{Direction, PaginationError, Result};
use std::fmt;

/// Number of numbered pages shown around the current page unless configured otherwise.
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Returns `ceil(total_items / items_per_page)`.
///
/// An empty collection has zero pages.
///
/// # Examples
///
/// ```rust
/// use storefront_paginator::window::page_count;
///
/// assert_eq!(page_count(95, 10).unwrap(), 10);
/// assert_eq!(page_count(100, 10).unwrap(), 10);
/// assert_eq!(page_count(0, 10).unwrap(), 0);
/// assert!(page_count(10, 0).is_err());
/// ```
pub fn page_count(total_items: usize, items_per_page: usize) -> Result<usize> {
    if items_per_page == 0 {
        return Err(PaginationError::ZeroItemsPerPage);
    }
    Ok(total_items.div_ceil(items_per_page))
}

/// A single entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIndicator {
    /// A clickable page number.
    Page {
        /// 1-based page number.
        number: usize,
        /// Whether this is the page being displayed.
        current: bool,
    },
    /// A non-clickable marker for an elided range of pages.
    Ellipsis,
}

impl PageIndicator {
    /// Shorthand for [`PageIndicator::Page`].
    pub const fn page(number: usize, current: bool) -> Self {
        PageIndicator::Page { number, current }
    }

    /// The page number, or `None` for an ellipsis.
    pub fn number(&self) -> Option<usize> {
        match self {
            PageIndicator::Page { number, .. } => Some(*number),
            PageIndicator::Ellipsis => None,
        }
    }

    /// True only for the page currently displayed.
    pub fn is_current(&self) -> bool {
        matches!(self, PageIndicator::Page { current: true, .. })
    }

    /// True for ellipsis markers.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageIndicator::Ellipsis)
    }
}

/// Computes page windows for a fixed visible-page budget.
///
/// `max_visible` must be odd so the current page can sit in the middle.
///
/// # Examples
///
/// ```rust
/// use storefront_paginator::window::PageWindowCalculator;
///
/// let calculator = PageWindowCalculator::new().with_max_visible(5).unwrap();
/// let window = calculator.calculate(200, 10, 10).unwrap();
/// assert_eq!(window.to_string(), "1 … 8 9 [10] 11 12 … 20");
///
/// assert!(PageWindowCalculator::new().with_max_visible(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowCalculator {
    max_visible: usize,
}

impl Default for PageWindowCalculator {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl PageWindowCalculator {
    /// Creates a calculator showing [`DEFAULT_MAX_VISIBLE`] pages around the current one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visible-page budget. Rejects zero and even values.
    pub fn with_max_visible(mut self, max_visible: usize) -> Result<Self> {
        validate_max_visible(max_visible)?;
        self.max_visible = max_visible;
        Ok(self)
    }

    /// The configured visible-page budget.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Builds the page window for the given inputs.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::ZeroItemsPerPage`] when `items_per_page == 0`
    /// - [`PaginationError::InvalidPage`] when `current_page` is outside
    ///   `[1, page_count]` (or is not 1 for an empty collection)
    pub fn calculate(
        &self,
        total_items: usize,
        items_per_page: usize,
        current_page: usize,
    ) -> Result<PageWindow> {
        let page_count = page_count(total_items, items_per_page)?;
        if current_page == 0 || current_page > page_count.max(1) {
            return Err(PaginationError::InvalidPage {
                page: current_page,
                page_count,
            });
        }

        let indicators = build_indicators(page_count, current_page, self.max_visible / 2);
        tracing::trace!(
            total_items,
            items_per_page,
            current_page,
            page_count,
            "calculated page window"
        );

        Ok(PageWindow {
            indicators,
            current_page,
            page_count,
        })
    }
}

fn validate_max_visible(max_visible: usize) -> Result<()> {
    if max_visible == 0 || max_visible % 2 == 0 {
        return Err(PaginationError::InvalidMaxVisible(max_visible));
    }
    Ok(())
}

fn build_indicators(page_count: usize, current: usize, half: usize) -> Vec<PageIndicator> {
    match page_count {
        0 => return Vec::new(),
        1 => return vec![PageIndicator::page(1, true)],
        _ => {}
    }

    // Pages 1 and page_count are pushed separately, so the inner range is
    // confined to [2, page_count - 1] and may be empty.
    let lo = current.saturating_sub(half).max(2);
    let hi = current.saturating_add(half).min(page_count - 1);

    let mut indicators = Vec::with_capacity(hi.saturating_sub(lo) + 5);
    indicators.push(PageIndicator::page(1, current == 1));
    if lo > 2 {
        indicators.push(PageIndicator::Ellipsis);
    }
    indicators.extend((lo..=hi).map(|n| PageIndicator::page(n, n == current)));
    if hi < page_count - 1 {
        indicators.push(PageIndicator::Ellipsis);
    }
    indicators.push(PageIndicator::page(page_count, current == page_count));
    indicators
}

/// The render-ready page indicators plus navigation guards.
///
/// A `PageWindow` is a snapshot: it never changes after construction and the
/// navigation methods only report where a move would land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    indicators: Vec<PageIndicator>,
    current_page: usize,
    page_count: usize,
}

impl PageWindow {
    /// Builds a window with the default visible-page budget.
    ///
    /// See [`PageWindowCalculator::calculate`] for the error cases.
    pub fn calculate(total_items: usize, items_per_page: usize, current_page: usize) -> Result<Self> {
        PageWindowCalculator::default().calculate(total_items, items_per_page, current_page)
    }

    /// The ordered indicators to render.
    pub fn indicators(&self) -> &[PageIndicator] {
        &self.indicators
    }

    /// Page numbers in the window, skipping ellipses.
    pub fn numbers(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicators.iter().filter_map(PageIndicator::number)
    }

    /// The page the window was built for.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// True when there is nothing to paginate.
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Whether a "previous" control should be enabled.
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a "next" control should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// The page a "next" control leads to.
    ///
    /// # Errors
    ///
    /// [`PaginationError::NavigationOutOfRange`] on the last page or when empty.
    pub fn go_next(&self) -> Result<usize> {
        if !self.can_go_next() {
            return Err(self.out_of_range(Direction::Next));
        }
        Ok(self.current_page + 1)
    }

    /// The page a "previous" control leads to.
    ///
    /// # Errors
    ///
    /// [`PaginationError::NavigationOutOfRange`] on the first page.
    pub fn go_previous(&self) -> Result<usize> {
        if !self.can_go_previous() {
            return Err(self.out_of_range(Direction::Previous));
        }
        Ok(self.current_page - 1)
    }

    /// Validates a jump to `page`, as when an indicator is clicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use storefront_paginator::window::PageWindow;
    ///
    /// let window = PageWindow::calculate(100, 10, 5).unwrap();
    /// assert_eq!(window.go_to(10).unwrap(), 10);
    /// assert!(window.go_to(11).is_err());
    /// ```
    pub fn go_to(&self, page: usize) -> Result<usize> {
        if page == 0 || page > self.page_count {
            return Err(PaginationError::InvalidPage {
                page,
                page_count: self.page_count,
            });
        }
        Ok(page)
    }

    fn out_of_range(&self, direction: Direction) -> PaginationError {
        PaginationError::NavigationOutOfRange {
            direction,
            page: self.current_page,
            page_count: self.page_count,
        }
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageIndicator;
    type IntoIter = std::slice::Iter<'a, PageIndicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.indicators.iter()
    }
}

/// Plain-text rendering: the current page in brackets, ellipses as `…`.
impl fmt::Display for PageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, indicator) in self.indicators.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match indicator {
                PageIndicator::Page {
                    number,
                    current: true,
                } => write!(f, "[{number}]")?,
                PageIndicator::Page { number, .. } => write!(f, "{number}")?,
                PageIndicator::Ellipsis => f.write_str("…")?,
            }
        }
        Ok(())
    }
}
