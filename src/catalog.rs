//! Catalog records and in-memory listings.
//!
//! [`Listing`] runs the same pipeline a storefront list view asks of its
//! backend: keep the records matching a filter, order them by a sort option,
//! then cut out the requested page. The resulting [`Page`] carries the
//! filtered total, so its counters feed straight into the page window.
//!
//! # Examples
//!
//! ```rust
//! use storefront_paginator::catalog::{Listing, Product, ProductFilter};
//! use storefront_paginator::page::PageRequest;
//! use storefront_paginator::sorting::ProductSort;
//!
//! let products: Vec<Product> = (1..=25)
//!     .map(|id| Product::new(id, format!("Item {id}"), id as f64))
//!     .collect();
//!
//! let listing = Listing::new();
//! let page = listing.products(
//!     &products,
//!     &ProductFilter::default(),
//!     Some("-price".parse::<ProductSort>().unwrap()),
//!     PageRequest::new(2, 10).unwrap(),
//! );
//!
//! assert_eq!(page.meta().total_items, 25);
//! assert_eq!(page.results.first().map(|p| p.id), Some(15));
//! assert_eq!(page.meta().window(3).unwrap().to_string(), "1 [2] 3");
//! ```

use crate::page::{Page, PageRequest};
use crate::sorting::{CategorySort, ProductSort};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// A product as listed by the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Owning category.
    pub category_id: u64,
    /// Full-size image location.
    #[serde(default)]
    pub image: Option<String>,
    /// Thumbnail image location.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Product {
    /// A product in category 0 with no description or images.
    pub fn new(id: u64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category_id: 0,
            image: None,
            thumbnail: None,
        }
    }

    /// Sets the owning category (builder pattern).
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = category_id;
        self
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl Category {
    /// Creates a category.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Product filter. Unset fields match every product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Product name. Matched according to the listing's [`FilterMode`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exact category match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
}

impl ProductFilter {
    /// Filters by name (builder pattern). Blank names are ignored.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.trim().is_empty()).then_some(name);
        self
    }

    /// Filters by category (builder pattern).
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Category filter. Names must match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// Exact name match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CategoryFilter {
    /// True when `category` passes the filter.
    pub fn matches(&self, category: &Category) -> bool {
        self.name.as_deref().is_none_or(|name| category.name == name)
    }
}

/// How [`ProductFilter::name`] is compared with product names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// The name must equal the filter value.
    #[default]
    Exact,
    /// Case-insensitive fuzzy match, as typed into a search box.
    Fuzzy,
}

/// Filter, sort and paginate catalog records held in memory.
pub struct Listing {
    matcher: SkimMatcherV2,
    filter_mode: FilterMode,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

impl Listing {
    /// Creates a listing that matches product names exactly.
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
            filter_mode: FilterMode::default(),
        }
    }

    /// Sets how product names are matched (builder pattern).
    ///
    /// ```rust
    /// use storefront_paginator::catalog::{FilterMode, Listing, Product, ProductFilter};
    ///
    /// let chair = Product::new(3, "Office Chair", 120.0);
    /// let filter = ProductFilter::default().with_name("chair");
    ///
    /// assert!(!Listing::new().matches(&filter, &chair));
    /// assert!(Listing::new()
    ///     .with_filter_mode(FilterMode::Fuzzy)
    ///     .matches(&filter, &chair));
    /// ```
    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// The configured name matching mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// True when `product` passes `filter`.
    pub fn matches(&self, filter: &ProductFilter, product: &Product) -> bool {
        let category_ok = filter
            .category_id
            .is_none_or(|category_id| product.category_id == category_id);
        let name_ok = filter.name.as_deref().is_none_or(|pattern| match self.filter_mode {
            FilterMode::Exact => product.name == pattern,
            FilterMode::Fuzzy => self.matcher.fuzzy_match(&product.name, pattern).is_some(),
        });
        category_ok && name_ok
    }

    /// One page of products matching `filter`, ordered by `sort`.
    ///
    /// Without a sort option the input order is kept.
    pub fn products(
        &self,
        products: &[Product],
        filter: &ProductFilter,
        sort: Option<ProductSort>,
        request: PageRequest,
    ) -> Page<Product> {
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|product| self.matches(filter, product))
            .cloned()
            .collect();
        if let Some(sort) = sort {
            sort.apply(&mut matching);
        }
        tracing::trace!(
            total = products.len(),
            matching = matching.len(),
            page = request.page(),
            "listing products"
        );
        paginate(matching, request)
    }

    /// One page of categories matching `filter`, ordered by `sort`.
    pub fn categories(
        &self,
        categories: &[Category],
        filter: &CategoryFilter,
        sort: Option<CategorySort>,
        request: PageRequest,
    ) -> Page<Category> {
        let mut matching: Vec<Category> = categories
            .iter()
            .filter(|category| filter.matches(category))
            .cloned()
            .collect();
        if let Some(sort) = sort {
            sort.apply(&mut matching);
        }
        paginate(matching, request)
    }
}

/// Cuts the page selected by `request` out of `items`.
///
/// The page's `totalItems` is `items.len()`. A page past the end is empty.
pub fn paginate<T>(mut items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_items = items.len();
    let (start, end) = request.slice_bounds(total_items);
    items.truncate(end);
    let results = items.split_off(start);
    Page::new(request, total_items, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::ProductField;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Oak Desk", 250.0).with_category(1),
            Product::new(2, "Desk Lamp", 35.0).with_category(2),
            Product::new(3, "Office Chair", 120.0).with_category(1),
            Product::new(4, "Coffee Mug", 8.0).with_category(3),
            Product::new(5, "Standing Desk", 480.0).with_category(1),
        ]
    }

    fn ids(page: &Page<Product>) -> Vec<u64> {
        page.results.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_unfiltered_pages() {
        let listing = Listing::new();
        let products = catalog();

        let first = listing.products(
            &products,
            &ProductFilter::default(),
            None,
            PageRequest::new(1, 2).unwrap(),
        );
        assert_eq!(ids(&first), [1, 2]);
        assert_eq!(first.meta().total_items, 5);
        assert!(first.meta().has_next());

        let last = listing.products(
            &products,
            &ProductFilter::default(),
            None,
            PageRequest::new(3, 2).unwrap(),
        );
        assert_eq!(ids(&last), [5]);
        assert!(!last.meta().has_next());
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Listing::new().products(
            &catalog(),
            &ProductFilter::default(),
            None,
            PageRequest::new(9, 2).unwrap(),
        );
        assert!(page.is_empty());
        assert_eq!(page.meta().total_items, 5);
    }

    #[test]
    fn test_name_filter_is_exact_by_default() {
        let listing = Listing::new();
        assert_eq!(listing.filter_mode(), FilterMode::Exact);

        let page = listing.products(
            &catalog(),
            &ProductFilter::default().with_name("Desk Lamp"),
            None,
            PageRequest::default(),
        );
        assert_eq!(ids(&page), [2]);
        assert_eq!(page.meta().total_items, 1);

        for near_miss in ["Desk", "desk lamp", "DeskLamp"] {
            let filter = ProductFilter::default().with_name(near_miss);
            assert!(!listing.matches(&filter, &catalog()[1]), "{near_miss}");
        }
    }

    #[test]
    fn test_fuzzy_name_filter_is_case_insensitive() {
        let listing = Listing::new().with_filter_mode(FilterMode::Fuzzy);
        let filter = ProductFilter::default().with_name("DESK");
        let page = listing.products(
            &catalog(),
            &filter,
            Some(ProductSort::ascending(ProductField::Price)),
            PageRequest::default(),
        );
        assert_eq!(ids(&page), [2, 1, 5]);
        assert_eq!(page.meta().total_items, 3);

        let filter = ProductFilter::default().with_name("ofchr");
        assert!(listing.matches(&filter, &catalog()[2]));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let filter = ProductFilter::default().with_name("   ");
        assert_eq!(filter.name, None);
    }

    #[test]
    fn test_category_and_sort() {
        let page = Listing::new().products(
            &catalog(),
            &ProductFilter::default().with_category(1),
            Some("-price".parse().unwrap()),
            PageRequest::default(),
        );
        assert_eq!(ids(&page), [5, 1, 3]);
    }

    #[test]
    fn test_categories_exact_name() {
        let categories = vec![
            Category::new(1, "Furniture"),
            Category::new(2, "Lighting"),
            Category::new(3, "Kitchen"),
        ];
        let listing = Listing::new();

        let filter = CategoryFilter {
            name: Some("Lighting".into()),
        };
        let page = listing.categories(&categories, &filter, None, PageRequest::default());
        assert_eq!(page.results, vec![Category::new(2, "Lighting")]);

        let filter = CategoryFilter {
            name: Some("light".into()),
        };
        assert!(listing
            .categories(&categories, &filter, None, PageRequest::default())
            .is_empty());

        let sorted = listing.categories(
            &categories,
            &CategoryFilter::default(),
            Some("-name".parse().unwrap()),
            PageRequest::default(),
        );
        let names: Vec<&str> = sorted.results.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Lighting", "Kitchen", "Furniture"]);
    }

    #[test]
    fn test_product_deserializes_with_optional_fields() {
        let json = r#"{"id": 7, "name": "Kettle", "price": 19.99, "category_id": 3,
                       "description": "1.7l", "image": null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.image, None);
        assert_eq!(product.thumbnail, None);
    }
}
