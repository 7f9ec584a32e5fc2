//! Offer desk: the provider-side entry point for incoming offers.
//!
//! The desk validates the offer, resolves the provider, picks a decision
//! strategy and applies the resulting side effect through the outbound
//! ports:
//!
//! | decision | effect                                              |
//! |----------|-----------------------------------------------------|
//! | accept   | offer accepted, then the linked service commenced   |
//! | reject   | offer rejected                                      |
//! | pool     | offer moved to the shared pool (direct path only)   |
//! | postpone | nothing; the offer is re-delivered later            |
//!
//! There is no rollback. Any failure once a store has been asked to move
//! the offer comes back as [`Error::SideEffect`], a dependency error: the
//! caller must re-fetch the offer before retrying.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::application::decision::{
    DecisionPolicy, DecisionStrategy, OracleStrategy, Origin, StochasticStrategy,
};
use crate::domain::error::DomainError;
use crate::domain::{AccountId, Decision, Offer, Provider};
use crate::error::{ConfigError, Error, Result};
use crate::port::{ConsumerOffers, Entropy, Llm, OfferHandler, ProviderDirectory, ServiceLedger};

/// Outbound ports the desk talks to.
#[derive(Clone)]
pub struct DeskPorts {
    pub offers: Arc<dyn ConsumerOffers>,
    pub services: Arc<dyn ServiceLedger>,
    pub providers: Arc<dyn ProviderDirectory>,
}

impl DeskPorts {
    /// Use one backend for all three stores.
    pub fn shared<M>(backend: Arc<M>) -> Self
    where
        M: ConsumerOffers + ServiceLedger + ProviderDirectory + 'static,
    {
        Self {
            offers: backend.clone(),
            services: backend.clone(),
            providers: backend,
        }
    }
}

/// Decides on offers delivered to providers.
///
/// The desk holds no per-offer state and can be shared behind an `Arc`
/// to decide many offers concurrently.
pub struct OfferDesk {
    ports: DeskPorts,
    stochastic: StochasticStrategy,
    oracle: Option<OracleStrategy>,
}

impl OfferDesk {
    /// Create a desk that decides every offer stochastically.
    pub fn new(ports: DeskPorts, policy: DecisionPolicy, entropy: Arc<dyn Entropy>) -> Self {
        let stochastic = StochasticStrategy::new(policy, entropy, Arc::clone(&ports.services));
        Self {
            ports,
            stochastic,
            oracle: None,
        }
    }

    /// Enable the oracle for providers that opted in.
    #[must_use]
    pub fn with_oracle(mut self, llm: Arc<dyn Llm>, max_tokens: usize) -> Self {
        self.oracle = Some(OracleStrategy::new(
            llm,
            Arc::clone(&self.ports.offers),
            max_tokens,
        ));
        self
    }

    /// Register a provider for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProviderExists`] if the account already has a
    /// provider.
    pub async fn register_provider(
        &self,
        account: AccountId,
        services_limit: u32,
        uses_oracle: bool,
    ) -> Result<Provider> {
        if self
            .ports
            .providers
            .find_provider_by_account(&account)
            .await?
            .is_some()
        {
            return Err(DomainError::ProviderExists { account }.into());
        }

        let provider = self
            .ports
            .providers
            .create_provider(Provider::new(account, services_limit).with_oracle(uses_oracle))
            .await?;
        info!(
            provider_id = %provider.id(),
            account = %provider.account(),
            services_limit,
            uses_oracle,
            "Provider registered"
        );
        Ok(provider)
    }

    /// Pick the strategy for this provider and origin.
    fn strategy_for(&self, provider: &Provider, origin: Origin) -> Result<DecisionStrategy<'_>> {
        if origin == Origin::Direct && provider.uses_oracle() {
            return self
                .oracle
                .as_ref()
                .map(DecisionStrategy::Oracle)
                .ok_or_else(|| ConfigError::MissingField { field: "oracle" }.into());
        }
        Ok(DecisionStrategy::Stochastic {
            strategy: &self.stochastic,
            origin,
        })
    }

    async fn direct(&self, offer: Offer) -> Result<Offer> {
        let provider = match self.resolve_direct(&offer).await {
            Ok(provider) => provider,
            Err(e) => {
                error!(
                    offer_id = %offer.id(),
                    buyer = %offer.buyer(),
                    error = %e,
                    "Direct offer refused"
                );
                return Err(e);
            }
        };
        self.decide_and_apply(offer, &provider, Origin::Direct).await
    }

    async fn resolve_direct(&self, offer: &Offer) -> Result<Provider> {
        offer.ensure_on_market()?;
        self.ports
            .providers
            .find_provider_by_account(offer.buyer())
            .await?
            .ok_or_else(|| {
                DomainError::ProviderNotFound {
                    account: offer.buyer().clone(),
                }
                .into()
            })
    }

    async fn from_pool(&self, mut offer: Offer, provider: &Provider) -> Result<Offer> {
        if let Err(e) = offer.ensure_on_market() {
            error!(
                offer_id = %offer.id(),
                provider_id = %provider.id(),
                error = %e,
                "Pool offer refused"
            );
            return Err(e.into());
        }
        offer.reassign_buyer(provider.account().clone());
        self.decide_and_apply(offer, provider, Origin::Pool).await
    }

    async fn decide_and_apply(
        &self,
        offer: Offer,
        provider: &Provider,
        origin: Origin,
    ) -> Result<Offer> {
        let offer_id = offer.id().clone();
        let result: Result<Offer> = async {
            let strategy = self.strategy_for(provider, origin)?;
            debug!(
                offer_id = %offer_id,
                provider_id = %provider.id(),
                strategy = strategy.name(),
                "Deciding offer"
            );
            let decision = strategy.decide(provider, &offer).await?;
            self.apply(offer, provider, decision, origin).await
        }
        .await;

        if let Err(e) = &result {
            error!(
                offer_id = %offer_id,
                provider_id = %provider.id(),
                error = %e,
                "Offer decision failed"
            );
        }
        result
    }

    async fn apply(
        &self,
        offer: Offer,
        provider: &Provider,
        decision: Option<Decision>,
        origin: Origin,
    ) -> Result<Offer> {
        let Some(decision) = decision else {
            info!(
                offer_id = %offer.id(),
                provider_id = %provider.id(),
                "No decision reached, offer left on market"
            );
            return Ok(offer);
        };

        let offer_id = offer.id().clone();
        let touched = |e: Error| Error::side_effect(offer_id.clone(), e);

        match decision {
            Decision::Accept => {
                let offer = self.ports.offers.offer_accepted(offer).await.map_err(touched)?;
                info!(offer_id = %offer.id(), provider_id = %provider.id(), "Offer accepted");

                let service = self
                    .ports
                    .services
                    .find_service(offer.service())
                    .await
                    .map_err(touched)?;
                let service = self.ports.services.commence(service).await.map_err(touched)?;
                info!(
                    offer_id = %offer.id(),
                    service_id = %service.id(),
                    "Service commenced"
                );
                Ok(offer)
            }
            Decision::Reject => {
                let offer = self.ports.offers.offer_rejected(offer).await.map_err(touched)?;
                info!(offer_id = %offer.id(), provider_id = %provider.id(), "Offer rejected");
                Ok(offer)
            }
            Decision::Pool if origin == Origin::Pool => Err(DomainError::PoolOfferRepooled {
                offer_id: offer.id().clone(),
            }
            .into()),
            Decision::Pool => {
                let offer = self.ports.offers.offer_to_pool(offer).await.map_err(touched)?;
                info!(offer_id = %offer.id(), provider_id = %provider.id(), "Offer moved to pool");
                Ok(offer)
            }
            Decision::Postpone => {
                info!(offer_id = %offer.id(), provider_id = %provider.id(), "Offer postponed");
                Ok(offer)
            }
        }
    }
}

#[async_trait]
impl OfferHandler for OfferDesk {
    async fn receive_direct(&self, offer: Offer) -> Result<Offer> {
        debug!(offer_id = %offer.id(), buyer = %offer.buyer(), "Direct offer received");
        self.direct(offer).await
    }

    async fn receive_from_pool(&self, offer: Offer, provider: Provider) -> Result<Offer> {
        debug!(
            offer_id = %offer.id(),
            provider_id = %provider.id(),
            "Pool offer received"
        );
        self.from_pool(offer, &provider).await
    }
}
