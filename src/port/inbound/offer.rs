//! Offer delivery use cases.

use async_trait::async_trait;

use crate::domain::{Offer, Provider};
use crate::error::Result;

/// Entry points invoked when an offer reaches a provider.
///
/// Both return the offer as it stands after the decision: mutated for
/// accept, reject and pool, unchanged for postpone or when the oracle gave
/// no usable answer.
#[async_trait]
pub trait OfferHandler: Send + Sync {
    /// Decide on an offer sent directly to the provider owning its buyer
    /// account.
    async fn receive_direct(&self, offer: Offer) -> Result<Offer>;

    /// Decide on an offer `provider` picked up from the pool.
    async fn receive_from_pool(&self, offer: Offer, provider: Provider) -> Result<Offer>;
}
