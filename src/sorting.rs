//! Sort options accepted by catalog listings.
//!
//! A sort option is a field name, optionally prefixed with `-` for descending
//! order: `price`, `name`, `-price`, `-name` for products and `name`, `-name`
//! for categories. Options round-trip through their string form, which is
//! also how they serialize.
//!
//! ```rust
//! use storefront_paginator::sorting::{ProductField, ProductSort, SortDirection};
//!
//! let sort: ProductSort = "-price".parse().unwrap();
//! assert_eq!(sort.field(), ProductField::Price);
//! assert_eq!(sort.direction(), SortDirection::Descending);
//! assert_eq!(sort.to_string(), "-price");
//! ```

use crate::catalog::{Category, Product};
use crate::error::PaginationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering direction of a sort option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first; written with a leading `-`.
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A field a record type can be sorted by.
pub trait SortField: Copy + Eq + 'static {
    /// The record type this field belongs to.
    type Record;

    /// Every sortable field, in the order options are offered.
    const ALL: &'static [Self];

    /// The field's name in sort options.
    fn name(self) -> &'static str;

    /// Ascending comparison of two records on this field.
    fn compare(self, a: &Self::Record, b: &Self::Record) -> Ordering;

    /// Looks a field up by name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Product fields that listings can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    /// Unit price.
    Price,
    /// Display name.
    Name,
}

impl SortField for ProductField {
    type Record = Product;

    const ALL: &'static [Self] = &[ProductField::Price, ProductField::Name];

    fn name(self) -> &'static str {
        match self {
            ProductField::Price => "price",
            ProductField::Name => "name",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductField::Price => a.price.total_cmp(&b.price),
            ProductField::Name => a.name.cmp(&b.name),
        }
    }
}

/// Category fields that listings can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryField {
    /// Display name.
    Name,
}

impl SortField for CategoryField {
    type Record = Category;

    const ALL: &'static [Self] = &[CategoryField::Name];

    fn name(self) -> &'static str {
        "name"
    }

    fn compare(self, a: &Category, b: &Category) -> Ordering {
        a.name.cmp(&b.name)
    }
}

/// A field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort<F> {
    field: F,
    direction: SortDirection,
}

/// Sort option for product listings.
pub type ProductSort = Sort<ProductField>;

/// Sort option for category listings.
pub type CategorySort = Sort<CategoryField>;

impl<F: SortField> Sort<F> {
    /// Ascending order on `field`.
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending order on `field`.
    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }

    /// The sorted field.
    pub fn field(&self) -> F {
        self.field
    }

    /// The sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Every option for this record type: all fields ascending, then all
    /// fields descending.
    ///
    /// ```rust
    /// use storefront_paginator::sorting::ProductSort;
    ///
    /// let options: Vec<String> = ProductSort::options().iter().map(|s| s.to_string()).collect();
    /// assert_eq!(options, ["price", "name", "-price", "-name"]);
    /// ```
    pub fn options() -> Vec<Self> {
        F::ALL
            .iter()
            .map(|&field| Self::ascending(field))
            .chain(F::ALL.iter().map(|&field| Self::descending(field)))
            .collect()
    }

    /// Compares two records under this option.
    pub fn compare(&self, a: &F::Record, b: &F::Record) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }

    /// Stable in-place sort of `records`.
    pub fn apply(&self, records: &mut [F::Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl<F: SortField> fmt::Display for Sort<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SortDirection::Descending {
            f.write_str("-")?;
        }
        f.write_str(self.field.name())
    }
}

impl<F: SortField> FromStr for Sort<F> {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, direction) = match s.strip_prefix('-') {
            Some(rest) => (rest, SortDirection::Descending),
            None => (s, SortDirection::Ascending),
        };
        let field =
            F::from_name(name).ok_or_else(|| PaginationError::UnknownSortOption(s.to_string()))?;
        Ok(Self { field, direction })
    }
}

impl<F: SortField> Serialize for Sort<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, F: SortField> Deserialize<'de> for Sort<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
