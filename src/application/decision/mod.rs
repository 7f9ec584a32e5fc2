//! Decision strategies.
//!
//! A provider's offers are decided by exactly one of two policies:
//!
//! - [`stochastic`]: weighted random draw with a capacity veto, used for
//!   direct offers and always for pool pickups
//! - [`oracle`]: an LLM judging the provider's offer history, used for
//!   direct offers when the provider opts in

pub mod oracle;
pub mod stochastic;

use crate::domain::{Decision, Offer, Provider};
use crate::error::Result;

pub use oracle::OracleStrategy;
pub use stochastic::{DecisionPolicy, Origin, StochasticStrategy};

/// The policy selected for a single offer.
#[derive(Clone, Copy)]
pub enum DecisionStrategy<'a> {
    Stochastic {
        strategy: &'a StochasticStrategy,
        origin: Origin,
    },
    Oracle(&'a OracleStrategy),
}

impl DecisionStrategy<'_> {
    /// Short label for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Stochastic {
                origin: Origin::Direct,
                ..
            } => "stochastic-direct",
            Self::Stochastic {
                origin: Origin::Pool,
                ..
            } => "stochastic-pool",
            Self::Oracle(_) => "oracle",
        }
    }

    /// Decide on `offer` for `provider`.
    ///
    /// `None` means the oracle gave no usable answer and the offer must be
    /// left as it is. The stochastic policy always decides.
    pub async fn decide(&self, provider: &Provider, offer: &Offer) -> Result<Option<Decision>> {
        match self {
            Self::Stochastic { strategy, origin } => {
                strategy.decide(*origin, provider, offer).await.map(Some)
            }
            Self::Oracle(oracle) => oracle.decide_with_oracle(provider, offer).await,
        }
    }
}
