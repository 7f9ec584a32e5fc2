//! Stochastic decision policy.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::outcome::choose_outcome;
use crate::domain::error::DomainError;
use crate::domain::{has_capacity, Decision, Offer, OutcomeDistribution, Provider};
use crate::error::Result;
use crate::port::{Entropy, ServiceLedger};

/// Where an offer came from when it reached the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Sent straight to the provider.
    Direct,
    /// Picked up from the shared pool.
    Pool,
}

/// Weights used by the stochastic policy for each origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionPolicy {
    direct: OutcomeDistribution,
    pool: OutcomeDistribution,
}

impl DecisionPolicy {
    /// Create a policy.
    ///
    /// # Errors
    ///
    /// Either distribution failing validation, or a pool distribution that
    /// can postpone or re-pool, is rejected.
    pub fn new(
        direct: OutcomeDistribution,
        pool: OutcomeDistribution,
    ) -> std::result::Result<Self, DomainError> {
        direct.validate()?;
        pool.validate()?;
        if !pool.is_terminal() {
            return Err(DomainError::PoolDistributionNotTerminal);
        }
        Ok(Self { direct, pool })
    }

    #[must_use]
    pub const fn direct(&self) -> &OutcomeDistribution {
        &self.direct
    }

    #[must_use]
    pub const fn pool(&self) -> &OutcomeDistribution {
        &self.pool
    }

    const fn for_origin(&self, origin: Origin) -> &OutcomeDistribution {
        match origin {
            Origin::Direct => &self.direct,
            Origin::Pool => &self.pool,
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            direct: OutcomeDistribution::direct_default(),
            pool: OutcomeDistribution::pool_default(),
        }
    }
}

/// Draws a decision at random and vetoes acceptances the provider has no
/// room for.
///
/// The capacity check reads the active-service count at decision time and
/// is not atomic with the acceptance that follows. Two offers decided
/// concurrently for the same provider can both pass it.
pub struct StochasticStrategy {
    policy: DecisionPolicy,
    entropy: Arc<dyn Entropy>,
    services: Arc<dyn ServiceLedger>,
}

impl StochasticStrategy {
    pub fn new(
        policy: DecisionPolicy,
        entropy: Arc<dyn Entropy>,
        services: Arc<dyn ServiceLedger>,
    ) -> Self {
        Self {
            policy,
            entropy,
            services,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// Decide on an offer sent directly to `provider`.
    pub async fn decide_direct(&self, provider: &Provider, offer: &Offer) -> Result<Decision> {
        self.decide(Origin::Direct, provider, offer).await
    }

    /// Decide on an offer `provider` picked up from the pool.
    pub async fn decide_pool(&self, provider: &Provider, offer: &Offer) -> Result<Decision> {
        self.decide(Origin::Pool, provider, offer).await
    }

    /// Draw from the origin's distribution, downgrading accept to reject
    /// when the provider is at capacity.
    pub async fn decide(
        &self,
        origin: Origin,
        provider: &Provider,
        offer: &Offer,
    ) -> Result<Decision> {
        let drawn = choose_outcome(self.policy.for_origin(origin), self.entropy.as_ref())?;
        debug!(
            offer_id = %offer.id(),
            provider_id = %provider.id(),
            ?origin,
            decision = %drawn,
            "Outcome drawn"
        );

        if drawn != Decision::Accept {
            return Ok(drawn);
        }

        let active = self.services.count_active_services(provider.id()).await?;
        if has_capacity(active, provider.services_limit()) {
            return Ok(Decision::Accept);
        }

        warn!(
            offer_id = %offer.id(),
            provider_id = %provider.id(),
            active,
            limit = provider.services_limit(),
            "Provider capacity reached, rejecting"
        );
        Ok(Decision::Reject)
    }
}
