//! # Validation Module
//!
//! Field validation for parsed item lines.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Line pattern (parser)                                        │
//! │  └── "<digits> <name> at <digits>.<2 digits>"                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── quantity: positive, bounded                                       │
//! │  ├── name: non-empty after trim, bounded                               │
//! │  └── price: non-negative, bounded                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart item: every later computation is infallible                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salestax_core::validation::{validate_product_name, validate_quantity};
//!
//! assert_eq!(validate_quantity(5).unwrap(), 5);
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_product_name("music CD").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_NAME_LEN, MAX_SHELF_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most MAX_NAME_LEN characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value and narrows it to `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: u64) -> ValidationResult<u32> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY as u64 {
        return Err(quantity_out_of_range());
    }

    Ok(qty as u32)
}

/// The error reported for a quantity too large to even read.
pub fn quantity_out_of_range() -> ValidationError {
    ValidationError::OutOfRange {
        field: "quantity".to_string(),
        min: 1,
        max: MAX_ITEM_QUANTITY as i64,
    }
}

/// Validates a shelf price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: free items)
/// - Must not exceed MAX_SHELF_PRICE
///
/// ## Example
/// ```rust
/// use salestax_core::money::Money;
/// use salestax_core::validation::validate_shelf_price;
///
/// assert!(validate_shelf_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_shelf_price(Money::ZERO).is_ok());
/// assert!(validate_shelf_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_shelf_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_SHELF_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price (cents)".to_string(),
            min: 0,
            max: MAX_SHELF_PRICE.cents(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
