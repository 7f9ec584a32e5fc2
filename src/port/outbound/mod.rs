//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the consumer-side offer store, the service
//! ledger, the provider directory, the decision oracle and the random
//! source.

pub mod consumer;
pub mod directory;
pub mod entropy;
pub mod ledger;
pub mod llm;
