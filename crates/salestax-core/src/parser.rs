//! # Item Parser
//!
//! Turns `"<quantity> <name> at <price>"` lines into cart items.
//!
//! ## Parsing Flow
//! ```text
//! "1 imported bottle of perfume at 47.50"
//!      │
//!      ▼
//! ITEM_LINE regex ──── no match ──► ParseError::Malformed
//!      │
//!      ├── quantity "1"  ──► validate_quantity  ──► ParseError::Quantity
//!      ├── name "imported bottle of perfume" (trimmed)
//!      │                 ──► validate_product_name ─► ParseError::Name
//!      └── price "47.50" ──► Money::from_str       ──► ParseError::Price
//!                        ──► validate_shelf_price ──► ParseError::PriceRange
//!      │
//!      ▼
//! CartItem { quantity: 1, product: { name, 47.50 }, tax: 0.00 }
//! ```
//!
//! A malformed line is never replaced by an empty item: either it is
//! reported (strict) or it is left out of the cart and reported (lenient).
//! A cart never holds more than [`MAX_CART_ITEMS`] items; lines past that
//! are reported as [`ParseError::TooManyItems`].

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::cart::{Cart, CartItem};
use crate::error::ParseError;
use crate::money::Money;
use crate::types::Product;
use crate::validation::{
    quantity_out_of_range, validate_product_name, validate_quantity, validate_shelf_price,
};
use crate::MAX_CART_ITEMS;

/// Item line shape: quantity, free-text name, literal `at`, two-decimal price.
pub const ITEM_LINE_PATTERN: &str = r"^([0-9]+) ([\w\s]*) at ([0-9]+\.[0-9]{2})$";

static ITEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ITEM_LINE_PATTERN).expect("item line pattern is valid"));

/// Parses a single item line.
///
/// `line_no` is the 1-based position of the line within its cart and is
/// only used for error reporting. Surrounding whitespace (including a
/// trailing `\r`) is ignored.
///
/// ## Example
/// ```rust
/// use salestax_core::parser::parse_item;
///
/// let item = parse_item(1, "1 music CD at 14.99").unwrap();
/// assert_eq!(item.quantity(), 1);
/// assert_eq!(item.product().name(), "music CD");
/// assert_eq!(item.product().shelf_price().cents(), 1499);
///
/// assert!(parse_item(2, "music CD for 14.99").is_err());
/// ```
pub fn parse_item(line_no: usize, line: &str) -> Result<CartItem, ParseError> {
    let input = line.trim();

    let caps = ITEM_LINE
        .captures(input)
        .ok_or_else(|| ParseError::Malformed {
            line: line_no,
            input: input.to_string(),
        })?;

    let quantity = caps[1]
        .parse::<u64>()
        .map_err(|_| quantity_out_of_range())
        .and_then(validate_quantity)
        .map_err(|source| ParseError::Quantity {
            line: line_no,
            input: input.to_string(),
            source,
        })?;

    let name = caps[2].trim();
    validate_product_name(name).map_err(|source| ParseError::Name {
        line: line_no,
        input: input.to_string(),
        source,
    })?;

    let price: Money = caps[3].parse().map_err(|source| ParseError::Price {
        line: line_no,
        input: input.to_string(),
        source,
    })?;
    validate_shelf_price(price).map_err(|source| ParseError::PriceRange {
        line: line_no,
        input: input.to_string(),
        source,
    })?;

    debug!(line = line_no, quantity, name, %price, "parsed item");
    Ok(CartItem::new(Product::new(name, price), quantity))
}

fn too_many_items(line_no: usize, line: &str) -> ParseError {
    ParseError::TooManyItems {
        line: line_no,
        input: line.trim().to_string(),
        max: MAX_CART_ITEMS,
    }
}

/// Parses every line into one cart, failing on the first bad line or on
/// the first line past [`MAX_CART_ITEMS`].
///
/// ## Example
/// ```rust
/// use salestax_core::parser::parse_cart;
///
/// let cart = parse_cart(["1 book at 12.49", "1 chocolate bar at 0.85"]).unwrap();
/// assert_eq!(cart.len(), 2);
///
/// let err = parse_cart(["1 book at 12.49", "oops"]).unwrap_err();
/// assert_eq!(err.line(), 2);
/// ```
pub fn parse_cart<I, S>(lines: I) -> Result<Cart, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx >= MAX_CART_ITEMS {
                return Err(too_many_items(idx + 1, line.as_ref()));
            }
            parse_item(idx + 1, line.as_ref())
        })
        .collect()
}

/// Parses every line, leaving malformed ones out of the cart.
///
/// Returns the cart built from the good lines and one error per bad line,
/// in input order. The cart's length is the number of good lines, capped
/// at [`MAX_CART_ITEMS`]; good lines past the cap are reported too.
pub fn parse_cart_lenient<I, S>(lines: I) -> (Cart, Vec<ParseError>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cart = Cart::new();
    let mut errors = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let parsed = parse_item(idx + 1, line.as_ref()).and_then(|item| {
            if cart.len() >= MAX_CART_ITEMS {
                Err(too_many_items(idx + 1, line.as_ref()))
            } else {
                Ok(item)
            }
        });

        match parsed {
            Ok(item) => cart.push(item),
            Err(err) => {
                debug!(line = err.line(), error = %err, "skipping item line");
                errors.push(err);
            }
        }
    }

    (cart, errors)
}

// =============================================================================
// Unit Tests
// =============================================================================
