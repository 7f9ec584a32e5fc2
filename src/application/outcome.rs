//! Outcome selection.
//!
//! Draws a [`Decision`] from an [`OutcomeDistribution`]. The unit interval
//! is split into four contiguous intervals in the fixed order accept,
//! reject, postpone, pool, each as wide as its probability; the decision
//! whose interval contains the draw wins.

use rust_decimal::Decimal;

use crate::domain::error::DomainError;
use crate::domain::{Decision, OutcomeDistribution};
use crate::port::Entropy;

/// Draw one decision from `distribution` using `entropy`.
///
/// # Errors
///
/// Returns the distribution's validation error if its components are
/// negative or do not sum to exactly one. No entropy is consumed in that
/// case.
pub fn choose_outcome(
    distribution: &OutcomeDistribution,
    entropy: &dyn Entropy,
) -> Result<Decision, DomainError> {
    distribution.validate()?;
    Ok(select(distribution, entropy.unit()))
}

/// Map a draw in `[0, 1)` onto the distribution's intervals.
fn select(distribution: &OutcomeDistribution, draw: Decimal) -> Decision {
    let mut upper = Decimal::ZERO;
    for decision in [Decision::Accept, Decision::Reject, Decision::Postpone] {
        upper += distribution.probability(decision);
        if draw < upper {
            return decision;
        }
    }
    Decision::Pool
}
