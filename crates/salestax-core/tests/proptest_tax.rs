//! Property-based tests for parsing and tax invariants.
//!
//! These tests verify that:
//! - Parsing a well-formed line recovers quantity, name and price exactly
//! - Every tax is a non-negative multiple of 0.05
//! - Exempt domestic goods are untaxed; imported exempt goods pay only duty
//! - Cart total cost equals Σ quantity × (price + tax)

use proptest::prelude::*;
use salestax_core::parser::{parse_cart, parse_item};
use salestax_core::tax::TAX_ROUNDING_INCREMENT;
use salestax_core::{Money, Product, ProductCategory, TaxCalculator, TaxRate, TaxRule};

/// Names made of letters and single spaces, no leading/trailing space.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,4}").unwrap()
}

fn arb_cents() -> impl Strategy<Value = i64> {
    0i64..10_000_000
}

fn arb_quantity() -> impl Strategy<Value = u32> {
    1u32..1_000
}

fn price_literal(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

proptest! {
    /// quantity / name / price survive a parse exactly.
    #[test]
    fn parse_round_trips(qty in arb_quantity(), name in arb_name(), cents in arb_cents()) {
        let line = format!("{qty} {name} at {}", price_literal(cents));
        let item = parse_item(1, &line).unwrap();

        prop_assert_eq!(item.quantity(), qty);
        prop_assert_eq!(item.product().name(), name.as_str());
        prop_assert_eq!(item.product().shelf_price(), Money::from_cents(cents));
        prop_assert_eq!(
            format!("{} {}", item.quantity(), item.product()),
            line
        );
    }

    /// Tax is never negative and always a multiple of 0.05.
    #[test]
    fn tax_is_nonnegative_multiple_of_nickel(name in arb_name(), imported in any::<bool>(), cents in arb_cents()) {
        let name = if imported { format!("imported {name}") } else { name };
        let product = Product::new(name, Money::from_cents(cents));
        let tax = TaxCalculator::standard().tax_for(&product);

        prop_assert!(!tax.is_negative());
        prop_assert!(tax.is_multiple_of(TAX_ROUNDING_INCREMENT));
    }

    /// Rounding never takes more than 0.05 per rule above the raw amount.
    #[test]
    fn rounding_stays_within_one_increment(cents in arb_cents(), pct in 0u32..=100) {
        let tax = Money::from_cents(cents).tax_rounded_up(TaxRate::from_percent(pct), TAX_ROUNDING_INCREMENT);
        // raw tax in 1/100 cent
        let raw = cents as i128 * pct as i128;
        let rounded = tax.cents() as i128 * 100;
        prop_assert!(rounded >= raw);
        prop_assert!(rounded - raw < 500);
    }

    /// Exempt domestic goods pay nothing.
    #[test]
    fn exempt_domestic_goods_are_untaxed(
        keyword in prop::sample::select(vec!["chocolate", "chocolates", "pills", "book"]),
        cents in arb_cents(),
    ) {
        let product = Product::new(format!("a {keyword}"), Money::from_cents(cents));
        prop_assert!(TaxCalculator::standard().tax_for(&product).is_zero());
    }

    /// An imported book pays the rounded 5% duty and nothing else.
    #[test]
    fn imported_book_pays_only_duty(cents in arb_cents()) {
        let product = Product::new("imported book", Money::from_cents(cents));
        prop_assert!(product.is_type_of(ProductCategory::Book));

        let expected = Money::from_cents(cents)
            .tax_rounded_up(TaxRule::ImportDuty.rate(), TAX_ROUNDING_INCREMENT);
        prop_assert_eq!(TaxCalculator::standard().tax_for(&product), expected);
        prop_assert!(TaxRule::BasicSalesTax.calculate(&product).is_zero());
    }

    /// Total cost is Σ quantity × (unit price + unit tax); total tax is Σ unit tax.
    #[test]
    fn total_cost_is_sum_of_item_costs(
        rows in prop::collection::vec((arb_quantity(), arb_name(), any::<bool>(), arb_cents()), 0..8)
    ) {
        let lines: Vec<String> = rows
            .iter()
            .map(|(qty, name, imported, cents)| {
                let prefix = if *imported { "imported " } else { "" };
                format!("{qty} {prefix}{name} at {}", price_literal(*cents))
            })
            .collect();

        let mut cart = parse_cart(&lines).unwrap();
        TaxCalculator::standard().calculate(&mut cart);

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.quantity() as i64 * (i.product().shelf_price().cents() + i.tax().cents()))
            .sum();

        prop_assert_eq!(cart.len(), rows.len());
        prop_assert_eq!(cart.total_cost().cents(), expected);
        let unit_taxes: i64 = cart.items().iter().map(|i| i.tax().cents()).sum();
        prop_assert_eq!(cart.total_tax().cents(), unit_taxes);
    }
}
