//! Random source port.

use rust_decimal::Decimal;

/// Source of uniform draws for the outcome selector.
///
/// Implementations must be safe to share between concurrent decisions
/// without handing out correlated sequences.
pub trait Entropy: Send + Sync {
    /// Draw a value uniformly from `[0, 1)`.
    fn unit(&self) -> Decimal;
}
