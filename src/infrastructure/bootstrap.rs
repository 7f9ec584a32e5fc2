//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::entropy::{SeededEntropy, ThreadEntropy};
use crate::adapter::outbound::llm::openai::OpenAi;
use crate::application::desk::{DeskPorts, OfferDesk};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::entropy::Entropy;
use crate::port::outbound::llm::Llm;

/// Build the random source from `[decision].seed`.
pub fn build_entropy(config: &Config) -> Arc<dyn Entropy> {
    match config.decision.seed {
        Some(seed) => {
            info!(seed, "Using seeded entropy");
            Arc::new(SeededEntropy::new(seed))
        }
        None => Arc::new(ThreadEntropy),
    }
}

/// Build the oracle client if `OPENAI_API_KEY` is set.
pub fn build_llm(config: &Config) -> Result<Option<Arc<dyn Llm>>> {
    let Ok(api_key) = std::env::var("OPENAI_API_KEY") else {
        warn!("OPENAI_API_KEY not set, oracle strategy disabled");
        return Ok(None);
    };

    let oracle = &config.oracle;
    let client = OpenAi::new(
        api_key,
        oracle.model.clone(),
        oracle.base_url.clone(),
        oracle.timeout(),
    )?;
    info!(model = %oracle.model, base_url = %oracle.base_url, "Oracle enabled");
    Ok(Some(Arc::new(client)))
}

/// Assemble an [`OfferDesk`] over `ports`.
///
/// `llm` overrides the environment lookup; pass `None` to let the desk run
/// with whatever [`build_llm`] finds.
pub fn build_desk(
    config: &Config,
    ports: DeskPorts,
    llm: Option<Arc<dyn Llm>>,
) -> Result<OfferDesk> {
    let policy = config.decision.policy()?;
    let desk = OfferDesk::new(ports, policy, build_entropy(config));

    let llm = match llm {
        Some(llm) => Some(llm),
        None => build_llm(config)?,
    };

    Ok(match llm {
        Some(llm) => desk.with_oracle(llm, config.oracle.max_tokens),
        None => desk,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::adapter::outbound::memory::MemoryMarketplace;
    use crate::port::inbound::offer::OfferHandler;
    use crate::testkit::domain::seed_offer;
    use crate::testkit::llm::ScriptedLlm;

    #[test]
    fn seeded_entropy_is_reproducible() {
        let config = Config::parse_toml("[decision]\nseed = 7").unwrap();
        let a = build_entropy(&config);
        let b = build_entropy(&config);
        for _ in 0..16 {
            assert_eq!(a.unit(), b.unit());
        }
    }

    #[tokio::test]
    async fn explicit_llm_enables_oracle() {
        let config = Config::default();
        let market = Arc::new(MemoryMarketplace::new());
        let llm: Arc<dyn Llm> = Arc::new(ScriptedLlm::replying("N"));
        let desk = build_desk(&config, DeskPorts::shared(Arc::clone(&market)), Some(llm)).unwrap();

        let provider = desk
            .register_provider("acct-1".into(), 3, true)
            .await
            .unwrap();
        let offer = seed_offer(&market, &provider, "svc-1", dec!(100));

        let decided = desk.receive_direct(offer).await.unwrap();
        assert_eq!(decided.state(), crate::domain::OfferState::Rejected);
    }
}
