//! Probability distributions over decisions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::decision::Decision;
use super::error::DomainError;
use super::money::Probability;

/// Weights for the four possible decisions.
///
/// Components are non-negative and add up to exactly one. The values are
/// decimals, so `0.5 + 0.2 + 0.1 + 0.2` is exactly `1` and the sum check
/// needs no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeDistribution {
    accept: Probability,
    reject: Probability,
    postpone: Probability,
    pool: Probability,
}

impl OutcomeDistribution {
    /// Build a validated distribution.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeProbability`] for a negative component
    /// and [`DomainError::DistributionSum`] if the components do not add up
    /// to exactly one.
    pub fn try_new(
        accept: Probability,
        reject: Probability,
        postpone: Probability,
        pool: Probability,
    ) -> Result<Self, DomainError> {
        let distribution = Self {
            accept,
            reject,
            postpone,
            pool,
        };
        distribution.validate()?;
        Ok(distribution)
    }

    /// Build a distribution for pool offers, which can only be accepted or
    /// rejected.
    pub fn pool_only(accept: Probability, reject: Probability) -> Result<Self, DomainError> {
        Self::try_new(accept, reject, Decimal::ZERO, Decimal::ZERO)
    }

    /// Default weights for direct offers: mostly accept, some pooling.
    #[must_use]
    pub fn direct_default() -> Self {
        Self {
            accept: dec!(0.5),
            reject: dec!(0.2),
            postpone: dec!(0.1),
            pool: dec!(0.2),
        }
    }

    /// Default weights for offers picked up from the pool.
    #[must_use]
    pub fn pool_default() -> Self {
        Self {
            accept: dec!(0.5),
            reject: dec!(0.5),
            postpone: Decimal::ZERO,
            pool: Decimal::ZERO,
        }
    }

    /// A distribution that always yields `decision`.
    #[must_use]
    pub fn certain(decision: Decision) -> Self {
        let weight = |d: Decision| if d == decision { Decimal::ONE } else { Decimal::ZERO };
        Self {
            accept: weight(Decision::Accept),
            reject: weight(Decision::Reject),
            postpone: weight(Decision::Postpone),
            pool: weight(Decision::Pool),
        }
    }

    /// Re-check the invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        for decision in Decision::ALL {
            let value = self.probability(decision);
            if value < Decimal::ZERO {
                return Err(DomainError::NegativeProbability {
                    outcome: decision.as_str(),
                    value,
                });
            }
        }
        let sum = self.sum();
        if sum != Decimal::ONE {
            return Err(DomainError::DistributionSum { sum });
        }
        Ok(())
    }

    /// Return `true` if the distribution never postpones or pools.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.postpone.is_zero() && self.pool.is_zero()
    }

    /// Weight assigned to `decision`.
    #[must_use]
    pub const fn probability(&self, decision: Decision) -> Probability {
        match decision {
            Decision::Accept => self.accept,
            Decision::Reject => self.reject,
            Decision::Postpone => self.postpone,
            Decision::Pool => self.pool,
        }
    }

    fn sum(&self) -> Probability {
        self.accept + self.reject + self.postpone + self.pool
    }
}

impl Default for OutcomeDistribution {
    fn default() -> Self {
        Self::direct_default()
    }
}
