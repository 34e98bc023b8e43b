//! Error types shared by the pagination and listing components.

use std::fmt;

/// Direction of a relative page move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards page 1.
    Previous,
    /// Towards the last page.
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => f.write_str("previous"),
            Direction::Next => f.write_str("next"),
        }
    }
}

/// Errors reported by the window calculator, page requests and sort parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// The requested page lies outside `[1, page_count]`.
    ///
    /// When the collection is empty, page 1 is the only accepted page.
    #[error("page {page} is out of range (page count {page_count})")]
    InvalidPage {
        /// The rejected page number.
        page: usize,
        /// Number of pages available.
        page_count: usize,
    },

    /// A previous/next move would leave the valid page range.
    #[error("cannot go to {direction} page from page {page} of {page_count}")]
    NavigationOutOfRange {
        /// The attempted direction.
        direction: Direction,
        /// The page the move started from.
        page: usize,
        /// Number of pages available.
        page_count: usize,
    },

    /// Page size of zero.
    #[error("items per page must be at least 1")]
    ZeroItemsPerPage,

    /// The visible page budget must be an odd number of at least 1.
    #[error("max visible pages must be odd and at least 1, got {0}")]
    InvalidMaxVisible(usize),

    /// A sort option string that no sortable field accepts.
    #[error("unknown sort option {0:?}")]
    UnknownSortOption(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PaginationError::InvalidPage {
            page: 12,
            page_count: 10,
        };
        assert_eq!(err.to_string(), "page 12 is out of range (page count 10)");

        let err = PaginationError::NavigationOutOfRange {
            direction: Direction::Next,
            page: 10,
            page_count: 10,
        };
        assert_eq!(err.to_string(), "cannot go to next page from page 10 of 10");

        assert_eq!(
            PaginationError::UnknownSortOption("-stock".into()).to_string(),
            "unknown sort option \"-stock\""
        );
    }
}
