#![warn(missing_docs)]

//! # storefront-paginator
//!
//! Page navigation for storefront product and category browsers built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! A product list shows one page of a larger catalog at a time. This crate
//! provides the pieces around that page:
//!
//! - [`window`]: the page window calculator. From the total item count, the
//!   page size and the current page it derives the indicators to render
//!   (`1 … 4 [5] 6 … 10`) and whether previous/next controls are enabled.
//! - [`paginator`]: a bubbletea-rs component that owns the current page,
//!   handles navigation keys, renders the window with lipgloss styles and
//!   emits [`PageChangedMsg`] when the page changes.
//! - [`page`]: page requests (`page`/`per_page`, offset and limit) and the
//!   paginated response envelope (`page`, `per_page`, `totalItems`, `results`).
//! - [`catalog`] and [`sorting`]: product and category records, the sort
//!   options listings accept (`price`, `-price`, `name`, `-name`) and an
//!   in-memory filter/sort/paginate pipeline.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_paginator::prelude::*;
//!
//! let window = PageWindow::calculate(100, 10, 5).unwrap();
//! assert_eq!(window.to_string(), "1 … 4 [5] 6 … 10");
//! assert_eq!(window.go_next().unwrap(), 6);
//!
//! let mut paginator = Paginator::new().with_per_page(10).with_total_items(100);
//! paginator.go_to_page(5);
//! assert_eq!(paginator.request().offset(), 40);
//! ```
//!
//! ## Logging
//!
//! Components emit [`tracing`] events: `debug` for rejected navigation and
//! `trace` for page changes and window calculations. Install a subscriber in
//! the application to see them.

pub mod catalog;
pub mod error;
pub mod key;
pub mod page;
pub mod paginator;
pub mod sorting;
pub mod window;

pub use catalog::{Category, CategoryFilter, FilterMode, Listing, Product, ProductFilter};
pub use error::{Direction, PaginationError, Result};
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use page::{Page, PageMeta, PageRequest, DEFAULT_PER_PAGE};
pub use paginator::{Model as Paginator, PageChangedMsg, PaginatorKeyMap};
pub use sorting::{CategorySort, ProductSort, Sort, SortDirection, SortField};
pub use window::{
    page_count, PageIndicator, PageWindow, PageWindowCalculator, DEFAULT_MAX_VISIBLE,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use storefront_paginator::prelude::*;
///
/// let sort: ProductSort = "-name".parse().unwrap();
/// assert_eq!(sort.direction(), SortDirection::Descending);
/// ```
pub mod prelude {
    pub use crate::catalog::{
        Category, CategoryFilter, FilterMode, Listing, Product, ProductFilter,
    };
    pub use crate::error::{PaginationError, Result};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::page::{Page, PageMeta, PageRequest};
    pub use crate::paginator::{Model as Paginator, PageChangedMsg, PaginatorKeyMap};
    pub use crate::sorting::{
        CategoryField, CategorySort, ProductField, ProductSort, SortDirection, SortField,
    };
    pub use crate::window::{PageIndicator, PageWindow, PageWindowCalculator};
}
