//! Oracle decision policy.
//!
//! The provider's offer history is condensed into a single line of
//! `price` + `Y`/`N` tokens with the pending price appended last, e.g.
//! `100N,150Y,200`. The oracle answers `Y` to accept or `N` to reject.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{Decision, Offer, Provider};
use crate::error::Result;
use crate::port::{ConsumerOffers, Llm};

/// Oracle reply meaning accept.
pub const ACCEPT_TOKEN: &str = "Y";

/// Oracle reply meaning reject.
pub const REJECT_TOKEN: &str = "N";

/// Default completion budget; the oracle only needs a single token.
pub const DEFAULT_MAX_TOKENS: usize = 60;

/// Build the oracle prompt from past offers and the pending one.
#[must_use]
pub fn build_prompt<'a>(history: impl IntoIterator<Item = &'a Offer>, pending: &Offer) -> String {
    let mut tokens: Vec<String> = history
        .into_iter()
        .map(|offer| {
            let flag = if offer.is_accepted() {
                ACCEPT_TOKEN
            } else {
                REJECT_TOKEN
            };
            format!("{}{flag}", offer.price().normalize())
        })
        .collect();
    tokens.push(pending.price().normalize().to_string());
    tokens.join(",")
}

/// Interpret an oracle reply.
///
/// Surrounding whitespace is ignored; anything other than exactly the
/// accept or reject token yields `None`.
#[must_use]
pub fn parse_reply(reply: &str) -> Option<Decision> {
    match reply.trim() {
        ACCEPT_TOKEN => Some(Decision::Accept),
        REJECT_TOKEN => Some(Decision::Reject),
        _ => None,
    }
}

/// Defers accept/reject to an LLM judging the provider's offer history.
pub struct OracleStrategy {
    llm: Arc<dyn Llm>,
    offers: Arc<dyn ConsumerOffers>,
    max_tokens: usize,
}

impl OracleStrategy {
    pub fn new(llm: Arc<dyn Llm>, offers: Arc<dyn ConsumerOffers>, max_tokens: usize) -> Self {
        Self {
            llm,
            offers,
            max_tokens,
        }
    }

    /// Ask the oracle about `offer`.
    ///
    /// Returns `Ok(None)` when the reply is neither token; that is logged
    /// and the offer should be left alone.
    ///
    /// # Errors
    ///
    /// Failures loading the history or reaching the oracle abort the
    /// decision and are not retried.
    pub async fn decide_with_oracle(
        &self,
        provider: &Provider,
        offer: &Offer,
    ) -> Result<Option<Decision>> {
        let history = self.offers.offers_by_buyer(provider.account()).await?;
        let prompt = build_prompt(
            history.iter().filter(|past| past.id() != offer.id()),
            offer,
        );
        debug!(
            offer_id = %offer.id(),
            provider_id = %provider.id(),
            oracle = self.llm.name(),
            prompt = %prompt,
            "Consulting oracle"
        );

        let reply = self
            .llm
            .complete(&prompt, self.max_tokens)
            .await
            .map_err(|e| {
                error!(
                    offer_id = %offer.id(),
                    provider_id = %provider.id(),
                    oracle = self.llm.name(),
                    error = %e,
                    "Oracle request failed"
                );
                e
            })?;

        let decision = parse_reply(&reply);
        if decision.is_none() {
            warn!(
                offer_id = %offer.id(),
                provider_id = %provider.id(),
                reply = %reply,
                "Oracle reply is not a clear Y/N answer"
            );
        }
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::adapter::outbound::memory::MemoryMarketplace;
    use crate::domain::{AccountId, OfferState};
    use crate::error::OracleError;
    use crate::testkit::domain::{offer_for, provider};
    use crate::testkit::llm::ScriptedLlm;

    #[test]
    fn prompt_lists_history_then_pending_price() {
        let buyer = AccountId::new("acc");
        let rejected = offer_for(&buyer, "s1", dec!(100))
            .transition(OfferState::Rejected)
            .unwrap();
        let accepted = offer_for(&buyer, "s2", dec!(150))
            .transition(OfferState::Accepted)
            .unwrap();
        let pending = offer_for(&buyer, "s3", dec!(200));

        assert_eq!(
            build_prompt([&rejected, &accepted], &pending),
            "100N,150Y,200"
        );
    }

    #[test]
    fn prompt_without_history_is_pending_price() {
        let pending = offer_for(&AccountId::new("acc"), "s", dec!(42.50));
        assert_eq!(build_prompt(std::iter::empty(), &pending), "42.5");
    }

    #[test]
    fn pooled_and_open_offers_count_as_not_accepted() {
        let buyer = AccountId::new("acc");
        let pooled = offer_for(&buyer, "s1", dec!(80))
            .transition(OfferState::Pooled)
            .unwrap();
        let open = offer_for(&buyer, "s2", dec!(90));
        let pending = offer_for(&buyer, "s3", dec!(95));
        assert_eq!(build_prompt([&pooled, &open], &pending), "80N,90N,95");
    }

    #[test]
    fn reply_parsing_is_exact() {
        assert_eq!(parse_reply("Y"), Some(Decision::Accept));
        assert_eq!(parse_reply(" N\n"), Some(Decision::Reject));
        assert_eq!(parse_reply("y"), None);
        assert_eq!(parse_reply("Yes"), None);
        assert_eq!(parse_reply("maybe"), None);
        assert_eq!(parse_reply(""), None);
    }

    #[tokio::test]
    async fn oracle_sees_history_without_pending_offer() {
        let market = Arc::new(MemoryMarketplace::new());
        let provider = provider("acc", 1);
        let buyer = provider.account().clone();

        market.insert_offer(
            offer_for(&buyer, "s1", dec!(100))
                .transition(OfferState::Rejected)
                .unwrap(),
        );
        market.insert_offer(
            offer_for(&buyer, "s2", dec!(150))
                .transition(OfferState::Accepted)
                .unwrap(),
        );
        let pending = offer_for(&buyer, "s3", dec!(200));
        market.insert_offer(pending.clone());

        let llm = Arc::new(ScriptedLlm::replying("Y"));
        let strategy = OracleStrategy::new(llm.clone(), market, DEFAULT_MAX_TOKENS);

        let decision = strategy.decide_with_oracle(&provider, &pending).await.unwrap();
        assert_eq!(decision, Some(Decision::Accept));
        assert_eq!(llm.prompts(), vec!["100N,150Y,200".to_string()]);
    }

    #[tokio::test]
    async fn unclear_reply_is_no_decision() {
        let market = Arc::new(MemoryMarketplace::new());
        let provider = provider("acc", 1);
        let pending = offer_for(provider.account(), "s", dec!(200));

        let llm = Arc::new(ScriptedLlm::replying("maybe"));
        let strategy = OracleStrategy::new(llm, market, DEFAULT_MAX_TOKENS);
        assert_eq!(strategy.decide_with_oracle(&provider, &pending).await.unwrap(), None);
    }

    #[tokio::test]
    async fn oracle_failure_propagates() {
        let market = Arc::new(MemoryMarketplace::new());
        let provider = provider("acc", 1);
        let pending = offer_for(provider.account(), "s", dec!(200));

        let llm = Arc::new(ScriptedLlm::failing(OracleError::Unauthorized { status: 401 }));
        let strategy = OracleStrategy::new(llm, market, DEFAULT_MAX_TOKENS);
        let err = strategy.decide_with_oracle(&provider, &pending).await.unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Oracle(OracleError::Unauthorized { status: 401 })
        ));
    }
}
