//! # Receipt
//!
//! Snapshot of a taxed cart in the shape it is printed.
//!
//! ```text
//! 1 book : 12.49
//! 1 music CD : 16.49
//! 1 chocolate bar : 0.85
//! Taxes: 1.50
//! Total: 29.83
//! ```
//!
//! The same snapshot serializes to JSON with every amount as a
//! two-decimal string. JSON also carries the pre-tax `subtotal`, which the
//! text form leaves out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cart::{Cart, CartItem};
use crate::money::Money;
use crate::types::ProductCategory;

/// One printed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub category: ProductCategory,
    pub imported: bool,
    pub unit_price: Money,
    pub unit_tax: Money,
    pub cost: Money,
}

impl From<&CartItem> for ReceiptLine {
    fn from(item: &CartItem) -> Self {
        let product = item.product();
        ReceiptLine {
            quantity: item.quantity(),
            name: product.name().to_string(),
            category: product.category(),
            imported: product.is_imported(),
            unit_price: product.shelf_price(),
            unit_tax: item.tax(),
            cost: item.cost(),
        }
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} : {}", self.quantity, self.name, self.cost)
    }
}

/// A rendered cart: item lines in input order, then the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub items: Vec<ReceiptLine>,
    /// Σ quantity × shelf price.
    pub subtotal: Money,
    pub taxes: Money,
    pub total: Money,
}

impl Receipt {
    /// Reads a cart whose tax has already been calculated.
    pub fn from_cart(cart: &Cart) -> Self {
        Receipt {
            items: cart.items().iter().map(ReceiptLine::from).collect(),
            subtotal: cart.subtotal(),
            taxes: cart.total_tax(),
            total: cart.total_cost(),
        }
    }
}

impl From<&Cart> for Receipt {
    fn from(cart: &Cart) -> Self {
        Receipt::from_cart(cart)
    }
}

/// Text form. Every line, including the last, ends with `\n`.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.items {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Taxes: {}", self.taxes)?;
        writeln!(f, "Total: {}", self.total)
    }
}
