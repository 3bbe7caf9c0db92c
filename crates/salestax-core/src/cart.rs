//! # Cart
//!
//! The shopping cart built from one batch of input lines.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  parser::parse_cart ─────► items.push(CartItem { tax: 0.00 })          │
//! │                                                                         │
//! │  TaxCalculator::calculate ► items[i].tax = Σ rule contributions        │
//! │                             (the only mutation after parsing)          │
//! │                                                                         │
//! │  Receipt::from_cart ─────► reads cost / total_tax / total_cost         │
//! │                                                                         │
//! │  NOTE: totals are recomputed on every read, never cached.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart: a product, how many, and the per-unit tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
    tax: Money,
}

impl CartItem {
    /// Creates an item with no tax assigned yet.
    pub fn new(product: Product, quantity: u32) -> Self {
        CartItem {
            product,
            quantity,
            tax: Money::ZERO,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Per-unit tax, as assigned by the tax calculator.
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Only the tax calculator assigns tax.
    pub(crate) fn set_tax(&mut self, tax: Money) {
        self.tax = tax;
    }

    /// `quantity × (tax + shelf price)`.
    pub fn cost(&self) -> Money {
        (self.tax + self.product.shelf_price()) * self.quantity
    }

    /// Line total before tax.
    pub fn line_subtotal(&self) -> Money {
        self.product.shelf_price() * self.quantity
    }
}

/// `"1 music CD : 16.49"`.
impl fmt::Display for CartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} : {}", self.quantity, self.product.name(), self.cost())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Ordered cart items. Order is input order and is preserved on the receipt.
///
/// The parser never builds a cart larger than [`crate::MAX_CART_ITEMS`], which
/// keeps every total inside `i64` cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an item at the end of the cart.
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [CartItem] {
        &mut self.items
    }

    /// Returns the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of shelf prices × quantities, before tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_subtotal).sum()
    }

    /// Sum of every item's tax.
    ///
    /// ## Note
    /// An item's tax is its per-unit value, counted once per line whatever
    /// the quantity. `subtotal + total_tax` therefore differs from
    /// `total_cost` on lines with a quantity above 1.
    pub fn total_tax(&self) -> Money {
        self.items.iter().map(CartItem::tax).sum()
    }

    /// Sum of every item's cost.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(CartItem::cost).sum()
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<CartItem> for Cart {
    fn extend<I: IntoIterator<Item = CartItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
