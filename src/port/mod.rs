//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the offer desk and the systems it
//! collaborates with.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!   OfferHandler ───▶│       Offer desk        │
//!                    │  strategies + outcomes  │
//!                    └────────────┬────────────┘
//!        ┌──────────────┬─────────┴────┬──────────────┬──────────┐
//!        ▼              ▼              ▼              ▼          ▼
//! ┌──────────────┐ ┌──────────┐ ┌──────────────┐ ┌─────────┐ ┌─────────┐
//! │ConsumerOffers│ │ Service  │ │  Provider    │ │   Llm   │ │ Entropy │
//! │              │ │  Ledger  │ │  Directory   │ │ (oracle)│ │         │
//! └──────────────┘ └──────────┘ └──────────────┘ └─────────┘ └─────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::offer::OfferHandler;
pub use outbound::consumer::ConsumerOffers;
pub use outbound::directory::ProviderDirectory;
pub use outbound::entropy::Entropy;
pub use outbound::ledger::ServiceLedger;
pub use outbound::llm::Llm;
