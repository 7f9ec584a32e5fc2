//! In-memory marketplace backend.
//!
//! Implements the consumer offer store, service ledger and provider
//! directory over plain collections. Used by the `simulate` command and
//! by tests; nothing is persisted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::error::DomainError;
use crate::domain::{
    AccountId, Offer, OfferId, OfferState, Provider, ProviderId, Service, ServiceId,
};
use crate::error::Result;
use crate::port::{ConsumerOffers, ProviderDirectory, ServiceLedger};

/// Collections behind [`MemoryMarketplace`].
#[derive(Default)]
struct Tables {
    /// Offers in insertion order, which doubles as age order.
    offers: Vec<Offer>,
    services: HashMap<ServiceId, Service>,
    providers: Vec<Provider>,
}

/// Thread-safe in-memory implementation of the marketplace ports.
#[derive(Default)]
pub struct MemoryMarketplace {
    tables: RwLock<Tables>,
    calls: AtomicUsize,
}

impl MemoryMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an offer.
    pub fn insert_offer(&self, offer: Offer) {
        let mut tables = self.tables.write();
        upsert(&mut tables.offers, offer);
    }

    /// Insert or replace a service.
    pub fn insert_service(&self, service: Service) {
        self.tables
            .write()
            .services
            .insert(service.id().clone(), service);
    }

    /// Current stored copy of an offer.
    pub fn offer(&self, id: &OfferId) -> Option<Offer> {
        self.tables
            .read()
            .offers
            .iter()
            .find(|offer| offer.id() == id)
            .cloned()
    }

    /// Current stored copy of a service.
    pub fn service(&self, id: &ServiceId) -> Option<Service> {
        self.tables.read().services.get(id).cloned()
    }

    /// Number of port calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Active services owned by `provider`, without counting as a port call.
    pub fn active_services(&self, provider: &ProviderId) -> u32 {
        let count = self
            .tables
            .read()
            .services
            .values()
            .filter(|s| s.provider() == provider && s.is_active())
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Validate and store an offer transition.
    fn transition(&self, offer: Offer, next: OfferState) -> Result<Offer> {
        self.record_call();
        let mut tables = self.tables.write();
        let stored_state = tables
            .offers
            .iter()
            .find(|stored| stored.id() == offer.id())
            .map_or(offer.state(), Offer::state);
        if stored_state != offer.state() {
            return Err(DomainError::InvalidOfferTransition {
                offer_id: offer.id().clone(),
                from: stored_state,
                to: next,
            }
            .into());
        }
        let moved = offer.transition(next)?;
        upsert(&mut tables.offers, moved.clone());
        Ok(moved)
    }
}

fn upsert(offers: &mut Vec<Offer>, offer: Offer) {
    match offers.iter_mut().find(|stored| stored.id() == offer.id()) {
        Some(stored) => *stored = offer,
        None => offers.push(offer),
    }
}

#[async_trait]
impl ConsumerOffers for MemoryMarketplace {
    async fn offer_accepted(&self, offer: Offer) -> Result<Offer> {
        self.transition(offer, OfferState::Accepted)
    }

    async fn offer_rejected(&self, offer: Offer) -> Result<Offer> {
        self.transition(offer, OfferState::Rejected)
    }

    async fn offer_to_pool(&self, offer: Offer) -> Result<Offer> {
        self.transition(offer, OfferState::Pooled)
    }

    async fn offers_by_buyer(&self, buyer: &AccountId) -> Result<Vec<Offer>> {
        self.record_call();
        Ok(self
            .tables
            .read()
            .offers
            .iter()
            .filter(|offer| offer.buyer() == buyer)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ServiceLedger for MemoryMarketplace {
    async fn find_service(&self, id: &ServiceId) -> Result<Service> {
        self.record_call();
        self.service(id).ok_or_else(|| {
            DomainError::ServiceNotFound {
                service_id: id.clone(),
            }
            .into()
        })
    }

    async fn commence(&self, service: Service) -> Result<Service> {
        self.record_call();
        let started = service.commence()?;
        self.tables
            .write()
            .services
            .insert(started.id().clone(), started.clone());
        Ok(started)
    }

    async fn count_active_services(&self, provider: &ProviderId) -> Result<u32> {
        self.record_call();
        Ok(self.active_services(provider))
    }
}

#[async_trait]
impl ProviderDirectory for MemoryMarketplace {
    async fn find_provider_by_account(&self, account: &AccountId) -> Result<Option<Provider>> {
        self.record_call();
        Ok(self
            .tables
            .read()
            .providers
            .iter()
            .find(|p| p.account() == account)
            .cloned())
    }

    async fn create_provider(&self, provider: Provider) -> Result<Provider> {
        self.record_call();
        let mut tables = self.tables.write();
        if tables
            .providers
            .iter()
            .any(|p| p.account() == provider.account())
        {
            return Err(DomainError::ProviderExists {
                account: provider.account().clone(),
            }
            .into());
        }
        tables.providers.push(provider.clone());
        Ok(provider)
    }
}
