//! Direct offers and their lifecycle.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{AccountId, OfferId, ServiceId};
use super::money::Price;

/// Lifecycle state of an offer.
///
/// Offers are created on the market. A decision moves them to one of the
/// terminal states or into the pool; the pool hands them back to the
/// market when another provider picks them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferState {
    /// Waiting for a provider decision.
    Market,
    /// Accepted by the provider; a service has been started.
    Accepted,
    /// Rejected by the provider.
    Rejected,
    /// Moved to the shared pool for other providers.
    Pooled,
}

impl OfferState {
    /// Return the canonical upper-case label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Pooled => "POOLED",
        }
    }

    /// Return `true` if the lifecycle allows moving from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(&self, next: OfferState) -> bool {
        matches!(
            (self, next),
            (Self::Market, Self::Accepted | Self::Rejected | Self::Pooled)
                | (Self::Pooled, Self::Market)
        )
    }
}

impl fmt::Display for OfferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An offer from a buyer for a specific service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    id: OfferId,
    buyer: AccountId,
    service: ServiceId,
    price: Price,
    state: OfferState,
    created_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new offer on the market with a generated id.
    pub fn new(buyer: AccountId, service: ServiceId, price: Price) -> Self {
        Self::with_id(OfferId::generate(), buyer, service, price)
    }

    /// Create a new offer on the market with an explicit id.
    pub fn with_id(id: OfferId, buyer: AccountId, service: ServiceId, price: Price) -> Self {
        Self {
            id,
            buyer,
            service,
            price,
            state: OfferState::Market,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &OfferId {
        &self.id
    }

    #[must_use]
    pub const fn buyer(&self) -> &AccountId {
        &self.buyer
    }

    #[must_use]
    pub const fn service(&self) -> &ServiceId {
        &self.service
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub const fn state(&self) -> OfferState {
        self.state
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Return `true` if the offer ended up accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.state == OfferState::Accepted
    }

    /// Fail unless the offer is still open for a decision.
    pub fn ensure_on_market(&self) -> Result<(), DomainError> {
        if self.state == OfferState::Market {
            Ok(())
        } else {
            Err(DomainError::OfferNotInMarket { state: self.state })
        }
    }

    /// Hand the offer over to another buyer account.
    ///
    /// Used when a provider picks the offer up from the pool.
    pub fn reassign_buyer(&mut self, buyer: AccountId) {
        self.buyer = buyer;
    }

    /// Consume the offer and return it in state `next`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidOfferTransition`] if the lifecycle does
    /// not allow the move.
    pub fn transition(mut self, next: OfferState) -> Result<Self, DomainError> {
        if !self.state.can_transition_to(next) {
            return Err(DomainError::InvalidOfferTransition {
                offer_id: self.id,
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(self)
    }
}
