//! Decision policy configuration.
//!
//! Probabilities are read as decimals, so the values written in the file
//! are summed exactly.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::decision::DecisionPolicy;
use crate::domain::error::DomainError;
use crate::domain::OutcomeDistribution;

/// Weights for one offer origin.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DistributionConfig {
    #[serde(default)]
    pub accept: Decimal,
    #[serde(default)]
    pub reject: Decimal,
    #[serde(default)]
    pub postpone: Decimal,
    #[serde(default)]
    pub pool: Decimal,
}

impl DistributionConfig {
    /// Validate into a distribution.
    pub fn to_distribution(&self) -> Result<OutcomeDistribution, DomainError> {
        OutcomeDistribution::try_new(self.accept, self.reject, self.postpone, self.pool)
    }
}

impl From<OutcomeDistribution> for DistributionConfig {
    fn from(d: OutcomeDistribution) -> Self {
        use crate::domain::Decision;
        Self {
            accept: d.probability(Decision::Accept),
            reject: d.probability(Decision::Reject),
            postpone: d.probability(Decision::Postpone),
            pool: d.probability(Decision::Pool),
        }
    }
}

/// Stochastic decision settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionConfig {
    /// Weights for offers sent directly to a provider.
    #[serde(default = "default_direct")]
    pub direct: DistributionConfig,

    /// Weights for offers picked up from the pool. Postpone and pool must
    /// stay at zero.
    #[serde(default = "default_pool")]
    pub pool: DistributionConfig,

    /// Seed for reproducible draws. Unset uses the thread-local generator.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_direct() -> DistributionConfig {
    OutcomeDistribution::direct_default().into()
}

fn default_pool() -> DistributionConfig {
    OutcomeDistribution::pool_default().into()
}

impl DecisionConfig {
    /// Validate into a policy.
    pub fn policy(&self) -> Result<DecisionPolicy, DomainError> {
        DecisionPolicy::new(self.direct.to_distribution()?, self.pool.to_distribution()?)
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            direct: default_direct(),
            pool: default_pool(),
            seed: None,
        }
    }
}
