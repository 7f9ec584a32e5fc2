//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for offers, providers and seeded marketplaces.
//! - [`entropy`] - [`ScriptedEntropy`](entropy::ScriptedEntropy), a random
//!   source that replays fixed draws.
//! - [`ledger`] - [`FailingLedger`](ledger::FailingLedger), a service
//!   ledger that breaks on one chosen call.
//! - [`llm`] - [`ScriptedLlm`](llm::ScriptedLlm), an oracle with canned
//!   replies that records its prompts.

pub mod domain;
pub mod entropy;
pub mod ledger;
pub mod llm;
