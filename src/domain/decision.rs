//! Decision outcomes for an offer.

use std::fmt;

/// The outcome of deciding on an offer.
///
/// Decisions are never persisted; they only drive which side effect the
/// offer desk applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Accept,
    Reject,
    /// Leave the offer untouched for later re-delivery.
    Postpone,
    /// Hand the offer to the shared pool.
    Pool,
}

impl Decision {
    /// All decisions in interval order used by the outcome selector.
    pub const ALL: [Decision; 4] = [
        Decision::Accept,
        Decision::Reject,
        Decision::Postpone,
        Decision::Pool,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
            Self::Postpone => "postpone",
            Self::Pool => "pool",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
