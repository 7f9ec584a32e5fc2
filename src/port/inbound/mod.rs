//! Inbound ports (driving side): use cases exposed to request handlers.

pub mod offer;
