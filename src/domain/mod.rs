//! Marketplace domain: offers, providers, services and decisions.
//!
//! Everything here is pure. State transitions are validated on the value
//! types themselves; persisting them is left to the outbound ports.

pub mod capacity;
pub mod decision;
pub mod distribution;
pub mod error;
pub mod id;
pub mod money;
pub mod offer;
pub mod provider;
pub mod service;

pub use capacity::has_capacity;
pub use decision::Decision;
pub use distribution::OutcomeDistribution;
pub use id::{AccountId, OfferId, ProviderId, ServiceId};
pub use money::{Price, Probability};
pub use offer::{Offer, OfferState};
pub use provider::Provider;
pub use service::{Service, ServiceState};
