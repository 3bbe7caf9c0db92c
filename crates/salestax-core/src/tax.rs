//! # Tax Rules & Calculator
//!
//! Two rules stack on every product; each computes its own contribution
//! and rounds it up to the nearest 0.05 before the contributions are summed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tax Rules                                       │
//! │                                                                         │
//! │  Rule            Rate   Applies when                                    │
//! │  ──────────────  ─────  ──────────────────────────────────────────────  │
//! │  BasicSalesTax   10%    NOT Food, NOT Medical, NOT Book                 │
//! │  ImportDuty       5%    name contains "imported " (any category)        │
//! │                                                                         │
//! │  item.tax = round_up_0.05(price × 10%)?  +  round_up_0.05(price × 5%)?  │
//! │                                                                         │
//! │  imported perfume 47.50 → 4.75 + 2.40 = 7.15                            │
//! │  imported vase    10.05 → 1.05 + 0.55 = 1.60  (not 1.55 from 15%)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{Product, ProductCategory, TaxRate};

/// Every rule's contribution is rounded up to a multiple of this.
pub const TAX_ROUNDING_INCREMENT: Money = Money::from_cents(5);

/// Categories exempt from basic sales tax.
pub const BASIC_TAX_EXEMPTIONS: [ProductCategory; 3] = [
    ProductCategory::Food,
    ProductCategory::Medical,
    ProductCategory::Book,
];

// =============================================================================
// Tax Rule
// =============================================================================

/// A stateless tax policy: an applicability test and a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRule {
    /// 10% on everything outside the exempt categories.
    BasicSalesTax,
    /// 5% on imported goods, never exempted.
    ImportDuty,
}

impl TaxRule {
    /// All rules, in the order they are reported.
    pub const ALL: [TaxRule; 2] = [TaxRule::BasicSalesTax, TaxRule::ImportDuty];

    /// Fixed rate of this rule.
    pub const fn rate(self) -> TaxRate {
        match self {
            TaxRule::BasicSalesTax => TaxRate::from_percent(10),
            TaxRule::ImportDuty => TaxRate::from_percent(5),
        }
    }

    /// Whether this rule taxes `product` at all.
    pub fn is_applicable(self, product: &Product) -> bool {
        match self {
            TaxRule::BasicSalesTax => !BASIC_TAX_EXEMPTIONS
                .iter()
                .any(|category| product.is_type_of(*category)),
            TaxRule::ImportDuty => product.is_imported(),
        }
    }

    /// This rule's per-unit contribution, already rounded.
    ///
    /// Zero when the rule does not apply.
    pub fn calculate(self, product: &Product) -> Money {
        if !self.is_applicable(product) {
            return Money::ZERO;
        }
        product
            .shelf_price()
            .tax_rounded_up(self.rate(), TAX_ROUNDING_INCREMENT)
    }
}

impl fmt::Display for TaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxRule::BasicSalesTax => write!(f, "basic sales tax ({})", self.rate()),
            TaxRule::ImportDuty => write!(f, "import duty ({})", self.rate()),
        }
    }
}

// =============================================================================
// Tax Calculator
// =============================================================================

/// Applies a fixed set of rules to every item of a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCalculator {
    rules: Vec<TaxRule>,
}

impl TaxCalculator {
    /// Basic sales tax plus import duty.
    pub fn standard() -> Self {
        TaxCalculator::with_rules(TaxRule::ALL)
    }

    /// A calculator with an explicit rule set.
    pub fn with_rules(rules: impl IntoIterator<Item = TaxRule>) -> Self {
        TaxCalculator {
            rules: rules.into_iter().collect(),
        }
    }

    /// Per-unit tax for `product`: the sum of each rule's rounded contribution.
    pub fn tax_for(&self, product: &Product) -> Money {
        self.rules.iter().map(|rule| rule.calculate(product)).sum()
    }

    /// Assigns tax to every item of `cart`.
    ///
    /// Overwrites any previous assignment, so running it twice leaves the
    /// cart unchanged.
    pub fn calculate(&self, cart: &mut Cart) {
        for item in cart.items_mut() {
            let tax = self.tax_for(item.product());
            debug!(name = item.product().name(), %tax, "assigned tax");
            item.set_tax(tax);
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        TaxCalculator::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_cart;

    fn product(name: &str, cents: i64) -> Product {
        Product::new(name, Money::from_cents(cents))
    }

    #[test]
    fn test_rates() {
        assert_eq!(TaxRule::BasicSalesTax.rate().bps(), 1000);
        assert_eq!(TaxRule::ImportDuty.rate().bps(), 500);
    }

    #[test]
    fn test_basic_tax_exemptions() {
        let rule = TaxRule::BasicSalesTax;
        assert!(!rule.is_applicable(&product("book", 1249)));
        assert!(!rule.is_applicable(&product("chocolate bar", 85)));
        assert!(!rule.is_applicable(&product("packet of headache pills", 975)));
        assert!(rule.is_applicable(&product("music CD", 1499)));
        assert!(rule.is_applicable(&product("imported bottle of perfume", 4750)));
    }

    #[test]
    fn test_import_duty_ignores_category() {
        let rule = TaxRule::ImportDuty;
        assert!(rule.is_applicable(&product("imported book", 1000)));
        assert!(rule.is_applicable(&product("box of imported chocolates", 1125)));
        assert!(!rule.is_applicable(&product("book", 1000)));
    }

    #[test]
    fn test_rule_contributions() {
        assert_eq!(TaxRule::BasicSalesTax.calculate(&product("music CD", 1499)).cents(), 150);
        assert_eq!(TaxRule::BasicSalesTax.calculate(&product("book", 1249)).cents(), 0);
        assert_eq!(
            TaxRule::ImportDuty
                .calculate(&product("imported bottle of perfume", 4750))
                .cents(),
            240
        );
    }

    #[test]
    fn test_imported_book_pays_only_import_duty() {
        let calc = TaxCalculator::standard();
        // 12.49 × 5% = 0.6245 → 0.65
        assert_eq!(calc.tax_for(&product("imported book", 1249)).cents(), 65);
    }

    #[test]
    fn test_exempt_domestic_item_is_untaxed() {
        let calc = TaxCalculator::standard();
        assert!(calc.tax_for(&product("packet of headache pills", 975)).is_zero());
    }

    #[test]
    fn test_rounding_is_per_rule() {
        let calc = TaxCalculator::standard();
        let item = product("imported vase", 1005);

        // 10.05 × 10% = 1.005 → 1.05; 10.05 × 5% = 0.5025 → 0.55
        assert_eq!(calc.tax_for(&item).cents(), 160);

        // Rounding the combined 15% once would have given 1.55
        let combined = item
            .shelf_price()
            .tax_rounded_up(TaxRate::from_percent(15), TAX_ROUNDING_INCREMENT);
        assert_eq!(combined.cents(), 155);
    }

    #[test]
    fn test_custom_rule_set() {
        let calc = TaxCalculator::with_rules([TaxRule::ImportDuty]);
        assert!(calc.tax_for(&product("music CD", 1499)).is_zero());
        assert_eq!(calc.tax_for(&product("imported music CD", 1499)).cents(), 75);

        let none = TaxCalculator::with_rules(Vec::<TaxRule>::new());
        assert!(none.tax_for(&product("imported music CD", 1499)).is_zero());
    }

    #[test]
    fn test_calculate_assigns_every_item() {
        let mut cart = parse_cart([
            "1 imported box of chocolates at 10.00",
            "1 imported bottle of perfume at 47.50",
        ])
        .unwrap();

        TaxCalculator::standard().calculate(&mut cart);

        let taxes: Vec<_> = cart.items().iter().map(|i| i.tax().cents()).collect();
        assert_eq!(taxes, [50, 715]);
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let mut cart = parse_cart(["1 music CD at 14.99"]).unwrap();
        let calc = TaxCalculator::default();

        calc.calculate(&mut cart);
        let first = cart.clone();
        calc.calculate(&mut cart);

        assert_eq!(cart, first);
        assert_eq!(cart.total_tax().cents(), 150);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(TaxRule::BasicSalesTax.to_string(), "basic sales tax (10%)");
        assert_eq!(TaxRule::ImportDuty.to_string(), "import duty (5%)");
    }
}
