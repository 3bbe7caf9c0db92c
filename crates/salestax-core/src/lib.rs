//! # salestax-core: Pure Tax Logic for salestax
//!
//! This crate turns free-text item lines into a taxed cart and a receipt.
//! It contains all business logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        salestax Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    salestax-cli (binary)                        │   │
//! │  │    read files/stdin ──► split carts ──► print / JSON            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &[String]                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ salestax-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │  parser  │─►│   cart   │─►│   tax    │─►│ receipt  │       │   │
//! │  │   │ lines →  │  │ CartItem │  │ rules +  │  │ text /   │       │   │
//! │  │   │ items    │  │ totals   │  │ calc     │  │ JSON     │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │        │             classify · money · validation               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL MUTABLE STATE • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductCategory, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`classify`] - Category / import detection from product names
//! - [`validation`] - Field rules for parsed lines
//! - [`parser`] - `"<qty> <name> at <price>"` → CartItem
//! - [`cart`] - Cart and CartItem with derived totals
//! - [`tax`] - Tax rules and the calculator
//! - [`receipt`] - Printable / serializable receipt
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use salestax_core::{parser, Receipt, TaxCalculator};
//!
//! let mut cart = parser::parse_cart([
//!     "1 imported box of chocolates at 10.00",
//!     "1 imported bottle of perfume at 47.50",
//! ])?;
//! TaxCalculator::standard().calculate(&mut cart);
//!
//! assert_eq!(cart.total_tax().to_string(), "7.65");
//! assert_eq!(cart.total_cost().to_string(), "65.15");
//!
//! let receipt = Receipt::from_cart(&cart);
//! assert!(receipt.to_string().ends_with("Taxes: 7.65\nTotal: 65.15\n"));
//! # Ok::<(), salestax_core::ParseError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod classify;
pub mod error;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{MoneyError, ParseError, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use tax::{TaxCalculator, TaxRule};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity on a single line.
///
/// Keeps `quantity × (price + tax)` well inside `i64` cents.
pub const MAX_ITEM_QUANTITY: u32 = 1_000_000;

/// Maximum shelf price of a single product (10,000,000.00).
pub const MAX_SHELF_PRICE: Money = Money::from_cents(1_000_000_000);

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum number of items in one cart.
///
/// With the per-line bounds above, the largest line costs 1.15e15 cents,
/// so a full cart stays below 1.2e18 cents (`i64::MAX` is about 9.2e18).
pub const MAX_CART_ITEMS: usize = 1_000;

// =============================================================================
// Pipeline
// =============================================================================

/// Parses one cart strictly, taxes it with the standard rules and renders it.
///
/// ```rust
/// let receipt = salestax_core::process_cart(["1 music CD at 14.99"])?;
/// assert_eq!(receipt.taxes.to_string(), "1.50");
/// # Ok::<(), salestax_core::ParseError>(())
/// ```
pub fn process_cart<I, S>(lines: I) -> Result<Receipt, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cart = parser::parse_cart(lines)?;
    TaxCalculator::standard().calculate(&mut cart);
    // Discounts would be applied here, between tax and printing.
    Ok(Receipt::from_cart(&cart))
}
