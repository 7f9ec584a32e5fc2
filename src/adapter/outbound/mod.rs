//! Outbound adapters (driven side).

pub mod entropy;
pub mod llm;
pub mod memory;
