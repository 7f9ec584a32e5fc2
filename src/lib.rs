//! Dealdesk - provider-side decisions for direct service offers.
//!
//! A consumer sends an offer for a service directly to a provider. The desk
//! decides whether to accept it, reject it, postpone it, or move it to a
//! shared pool where other providers can pick it up. Decisions come either
//! from a weighted random draw or from a text-completion oracle that looks
//! at the buyer's past offers.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Offers, services, providers, decisions and distributions
//! - [`port`] - Inbound and outbound trait boundaries
//! - [`application`] - Outcome selection, decision strategies and the offer desk
//! - [`adapter`] - OpenAI client, in-memory marketplace, random sources
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`cli`] - Command handlers for the `dealdesk` binary
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dealdesk::adapter::outbound::memory::MemoryMarketplace;
//! use dealdesk::application::DeskPorts;
//! use dealdesk::infrastructure::bootstrap::build_desk;
//! use dealdesk::infrastructure::config::settings::Config;
//!
//! # fn main() -> dealdesk::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let market = Arc::new(MemoryMarketplace::new());
//! let desk = build_desk(&config, DeskPorts::shared(market), None)?;
//! # let _ = desk;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
