//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! They are raised before any collaborator is asked to mutate state.
//!
//! # Examples
//!
//! ```
//! use dealdesk::domain::error::DomainError;
//! use dealdesk::domain::OutcomeDistribution;
//! use rust_decimal_macros::dec;
//!
//! let result = OutcomeDistribution::try_new(dec!(0.5), dec!(0.2), dec!(0.1), dec!(0.1));
//! assert!(matches!(result, Err(DomainError::DistributionSum { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::{AccountId, OfferId, ServiceId};
use super::offer::OfferState;
use super::service::ServiceState;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Outcome probabilities must add up to exactly one.
    #[error("outcome probabilities must sum to 1, got {sum}")]
    DistributionSum {
        /// The actual sum of the four components.
        sum: Decimal,
    },

    /// Outcome probabilities cannot be negative.
    #[error("probability for {outcome} must not be negative, got {value}")]
    NegativeProbability {
        /// Outcome label of the offending component.
        outcome: &'static str,
        /// The invalid value that was provided.
        value: Decimal,
    },

    /// Pool offers may only be accepted or rejected.
    #[error("pool distribution must not postpone or re-pool offers")]
    PoolDistributionNotTerminal,

    /// Decisions are only made on offers that are still on the market.
    #[error("offer is in state {state}, expected MARKET")]
    OfferNotInMarket {
        /// The state the offer was found in.
        state: OfferState,
    },

    /// The consumer side refused a state change.
    #[error("offer {offer_id} cannot move from {from} to {to}")]
    InvalidOfferTransition {
        offer_id: OfferId,
        from: OfferState,
        to: OfferState,
    },

    /// The service ledger refused a state change.
    #[error("service {service_id} cannot move from {from} to {to}")]
    InvalidServiceTransition {
        service_id: ServiceId,
        from: ServiceState,
        to: ServiceState,
    },

    /// No provider is linked to the offer's buyer account.
    #[error("no provider found for account {account}")]
    ProviderNotFound { account: AccountId },

    /// An account can own at most one provider.
    #[error("account {account} already has a provider")]
    ProviderExists { account: AccountId },

    /// The offer references a service the ledger does not know.
    #[error("service {service_id} not found")]
    ServiceNotFound { service_id: ServiceId },

    /// The offer is unknown to the consumer side.
    #[error("offer {offer_id} not found")]
    OfferNotFound { offer_id: OfferId },

    /// A pooled offer was sent back to the pool.
    #[error("offer {offer_id} picked up from the pool cannot be pooled again")]
    PoolOfferRepooled { offer_id: OfferId },
}
