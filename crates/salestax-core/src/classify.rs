//! # Product Classifier
//!
//! Decides category membership and import status from a product name.
//!
//! Both checks are plain case-sensitive substring tests against a fixed,
//! read-only table:
//!
//! ```text
//! ┌──────────────┬──────────────────────────────┐
//! │ Category     │ Keywords                     │
//! ├──────────────┼──────────────────────────────┤
//! │ Food         │ "chocolate", "chocolates"    │
//! │ Medical      │ "pills"                      │
//! │ Book         │ "book"                       │
//! │ Other        │ (none, never matches)        │
//! └──────────────┴──────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! Import detection looks for the substring `"imported "` (note the trailing
//! space). It is not a word match: `"Ximported wine"` counts as imported,
//! while a name ending in `"imported"` does not. Keywords behave the same
//! way, so `"notebook"` is a book.

use crate::types::ProductCategory;

/// Substring that marks a product as imported.
pub const IMPORTED_MARKER: &str = "imported ";

/// Keyword table, keyed by category.
static CATEGORY_KEYWORDS: &[(ProductCategory, &[&str])] = &[
    (ProductCategory::Food, &["chocolate", "chocolates"]),
    (ProductCategory::Medical, &["pills"]),
    (ProductCategory::Book, &["book"]),
];

/// Returns the keywords registered for `category` (empty for `Other`).
pub fn keywords(category: ProductCategory) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// True iff `name` contains [`IMPORTED_MARKER`].
pub fn is_imported(name: &str) -> bool {
    name.contains(IMPORTED_MARKER)
}

/// True iff `category` has keywords and `name` contains any of them.
pub fn is_type_of(name: &str, category: ProductCategory) -> bool {
    keywords(category).iter().any(|kw| name.contains(kw))
}

/// First keyworded category matching `name`, else `Other`.
pub fn category_of(name: &str) -> ProductCategory {
    ProductCategory::KEYWORDED
        .into_iter()
        .find(|c| is_type_of(name, *c))
        .unwrap_or(ProductCategory::Other)
}
