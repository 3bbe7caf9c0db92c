//! # Domain Types
//!
//! Core domain types used throughout salestax.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductCategory │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Food           │   │  bps (u32)      │       │
//! │  │  shelf_price    │   │  Medical        │   │  1000 = 10%     │       │
//! │  │  is_imported()  │   │  Book           │   │   500 = 5%      │       │
//! │  │  is_type_of()   │   │  Other          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart types live in [`crate::cart`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every percentage with up to two
/// decimals is an exact integer: 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from a whole percentage.
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        TaxRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

/// `"10%"`.
impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 / 100)
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// Category a product can be classified into by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Food,
    Medical,
    Book,
    /// Anything not matching a keyword. Has no keywords of its own.
    Other,
}

impl ProductCategory {
    /// Categories that carry keywords, in classification priority order.
    pub const KEYWORDED: [ProductCategory; 3] = [
        ProductCategory::Food,
        ProductCategory::Medical,
        ProductCategory::Book,
    ];
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductCategory::Food => "food",
            ProductCategory::Medical => "medical",
            ProductCategory::Book => "book",
            ProductCategory::Other => "other",
        };
        f.write_str(s)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as described on one input line.
///
/// Immutable once parsed. Category and import status are derived from the
/// name on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    shelf_price: Money,
}

impl Product {
    /// Creates a product. Callers are expected to have validated the name
    /// and a non-negative price (see [`crate::validation`]).
    pub fn new(name: impl Into<String>, shelf_price: Money) -> Self {
        Product {
            name: name.into(),
            shelf_price,
        }
    }

    /// Display name, exactly as it appeared on the input line (trimmed).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pre-tax unit price.
    #[inline]
    pub fn shelf_price(&self) -> Money {
        self.shelf_price
    }

    /// Whether the product is subject to import duty.
    #[inline]
    pub fn is_imported(&self) -> bool {
        classify::is_imported(&self.name)
    }

    /// Whether the product's name carries any keyword of `category`.
    #[inline]
    pub fn is_type_of(&self, category: ProductCategory) -> bool {
        classify::is_type_of(&self.name, category)
    }

    /// The first matching keyworded category, else [`ProductCategory::Other`].
    #[inline]
    pub fn category(&self) -> ProductCategory {
        classify::category_of(&self.name)
    }
}

/// `"music CD at 14.99"`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.name, self.shelf_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percent() {
        assert_eq!(TaxRate::from_percent(10).bps(), 1000);
        assert_eq!(TaxRate::from_percent(5).bps(), 500);
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_percent(10).to_string(), "10%");
        assert_eq!(TaxRate::from_percent(5).to_string(), "5%");
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("music CD", Money::from_cents(1499));
        assert_eq!(product.to_string(), "music CD at 14.99");
    }

    #[test]
    fn test_product_derived_flags() {
        let product = Product::new("imported box of chocolates", Money::from_cents(1000));
        assert!(product.is_imported());
        assert!(product.is_type_of(ProductCategory::Food));
        assert!(!product.is_type_of(ProductCategory::Book));
        assert_eq!(product.category(), ProductCategory::Food);

        let product = Product::new("bottle of perfume", Money::from_cents(1899));
        assert!(!product.is_imported());
        assert_eq!(product.category(), ProductCategory::Other);
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&ProductCategory::Medical).unwrap();
        assert_eq!(json, "\"medical\"");
        assert_eq!(ProductCategory::Other.to_string(), "other");
    }
}
