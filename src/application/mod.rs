//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod decision;
pub mod desk;
pub mod outcome;

pub use desk::{DeskPorts, OfferDesk};
pub use outcome::choose_outcome;
