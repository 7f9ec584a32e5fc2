//! Builders for domain primitives used across tests.

use crate::adapter::outbound::memory::MemoryMarketplace;
use crate::domain::{AccountId, Offer, Price, Provider, ProviderId, Service, ServiceId};

/// Create a [`Provider`] for `account` with a fixed id `prov-{account}`.
pub fn provider(account: &str, services_limit: u32) -> Provider {
    Provider::new(AccountId::new(account), services_limit)
        .with_id(ProviderId::new(format!("prov-{account}")))
}

/// Create an open offer from `buyer` for `service`.
pub fn offer_for(buyer: &AccountId, service: &str, price: Price) -> Offer {
    Offer::new(buyer.clone(), ServiceId::new(service), price)
}

/// Store `provider`, a pending service and an open offer for it.
///
/// Returns the offer as stored.
pub fn seed_offer(
    market: &MemoryMarketplace,
    provider: &Provider,
    service: &str,
    price: Price,
) -> Offer {
    market.insert_service(Service::new(ServiceId::new(service), provider.id().clone()));
    let offer = offer_for(provider.account(), service, price);
    market.insert_offer(offer.clone());
    offer
}
