//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic: configuration loading and runtime wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
