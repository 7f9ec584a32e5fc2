//! LLM adapter modules.
//!
//! Provides implementations of the [`Llm`](crate::port::outbound::llm::Llm) trait
//! backing the decision oracle.

pub mod openai;

pub use openai::OpenAi;
