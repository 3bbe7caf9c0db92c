//! # Error Types
//!
//! Domain-specific error types for salestax-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salestax-core errors (this file)                                      │
//! │  ├── ParseError       - An item line could not become a CartItem       │
//! │  ├── ValidationError  - A parsed field breaks a business rule          │
//! │  └── MoneyError       - A price literal is not an exact amount         │
//! │                                                                         │
//! │  salestax-cli (binary)                                                 │
//! │  └── anyhow::Error    - I/O and configuration context                  │
//! │                                                                         │
//! │  Flow: MoneyError/ValidationError → ParseError → anyhow                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (line number, offending text)
//! 3. Errors are enum variants, never String
//! 4. Classification and tax calculation have no error variants: they cannot fail

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// A single item line that could not be turned into a cart item.
///
/// ## Policy
/// A malformed line is always reported. The parser never emits an empty
/// or zero-cost placeholder item in its place.
///
/// `line` is 1-based within the cart being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not have the `<quantity> <name> at <price>` shape.
    #[error("line {line}: '{input}' does not match '<quantity> <name> at <price>'")]
    Malformed { line: usize, input: String },

    /// The quantity is zero or too large.
    #[error("line {line}: invalid quantity in '{input}': {source}")]
    Quantity {
        line: usize,
        input: String,
        #[source]
        source: ValidationError,
    },

    /// The product name is empty or too long.
    #[error("line {line}: invalid name in '{input}': {source}")]
    Name {
        line: usize,
        input: String,
        #[source]
        source: ValidationError,
    },

    /// The price literal is not an exact two-decimal amount.
    #[error("line {line}: invalid price in '{input}': {source}")]
    Price {
        line: usize,
        input: String,
        #[source]
        source: MoneyError,
    },

    /// The price reads fine but is outside the accepted shelf price range.
    #[error("line {line}: price out of range in '{input}': {source}")]
    PriceRange {
        line: usize,
        input: String,
        #[source]
        source: ValidationError,
    },

    /// The cart already holds `max` items.
    #[error("line {line}: '{input}' exceeds the limit of {max} items per cart")]
    TooManyItems {
        line: usize,
        input: String,
        max: usize,
    },
}

impl ParseError {
    /// Returns the 1-based line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Malformed { line, .. }
            | ParseError::Quantity { line, .. }
            | ParseError::Name { line, .. }
            | ParseError::Price { line, .. }
            | ParseError::PriceRange { line, .. }
            | ParseError::TooManyItems { line, .. } => *line,
        }
    }

    /// Returns the offending input text.
    pub fn input(&self) -> &str {
        match self {
            ParseError::Malformed { input, .. }
            | ParseError::Quantity { input, .. }
            | ParseError::Name { input, .. }
            | ParseError::Price { input, .. }
            | ParseError::PriceRange { input, .. }
            | ParseError::TooManyItems { input, .. } => input,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a parsed field doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Money Error
// =============================================================================

/// Errors reading a decimal amount such as `"12.49"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Not `<digits>.<two digits>`.
    #[error("'{0}' is not an amount with exactly two decimal places")]
    InvalidFormat(String),

    /// Too large to represent in cents.
    #[error("'{0}' is too large")]
    Overflow(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
