//! Consumer-side offer state port.

use async_trait::async_trait;

use crate::domain::{AccountId, Offer};
use crate::error::Result;

/// Store that owns offer state on the consumer side.
///
/// Each transition persists the offer it is given, including a buyer
/// reassigned by a pool pickup, and returns the stored result.
///
/// # Errors
///
/// Transition methods fail with
/// [`DomainError::InvalidOfferTransition`](crate::domain::error::DomainError::InvalidOfferTransition)
/// when the offer is not in a transitionable state, and with a persistence
/// error when the store is unavailable.
#[async_trait]
pub trait ConsumerOffers: Send + Sync {
    /// Mark the offer accepted.
    async fn offer_accepted(&self, offer: Offer) -> Result<Offer>;

    /// Mark the offer rejected.
    async fn offer_rejected(&self, offer: Offer) -> Result<Offer>;

    /// Move the offer into the shared pool.
    async fn offer_to_pool(&self, offer: Offer) -> Result<Offer>;

    /// All offers addressed to `buyer`, oldest first.
    async fn offers_by_buyer(&self, buyer: &AccountId) -> Result<Vec<Offer>>;
}
