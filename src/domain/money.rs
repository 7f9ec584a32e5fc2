//! Monetary types for offer prices.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Probability weight represented as a Decimal so sums are exact.
pub type Probability = Decimal;
