//! Handler for the `simulate` command.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::memory::MemoryMarketplace;
use crate::application::desk::DeskPorts;
use crate::cli::{output, SimulateArgs};
use crate::domain::{AccountId, Offer, OfferState, Service, ServiceId};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_desk;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::offer::OfferHandler;

const SIMULATED_ACCOUNT: &str = "simulated-provider";

/// Outcome counts of a simulation run.
#[derive(Debug, Default)]
pub struct Tally {
    pub by_state: BTreeMap<&'static str, u32>,
    pub active_services: u32,
}

impl Tally {
    fn record(&mut self, state: OfferState) {
        let label = match state {
            OfferState::Accepted => "accepted",
            OfferState::Rejected => "rejected",
            OfferState::Pooled => "pooled",
            OfferState::Market => "postponed",
        };
        *self.by_state.entry(label).or_default() += 1;
    }

    /// Count for `label`, zero if never seen.
    pub fn count(&self, label: &str) -> u32 {
        self.by_state.get(label).copied().unwrap_or(0)
    }
}

/// Run the simulation against a fresh in-memory marketplace.
pub async fn run(config: &Config, args: &SimulateArgs) -> Result<Tally> {
    let market = Arc::new(MemoryMarketplace::new());
    let desk = build_desk(config, DeskPorts::shared(Arc::clone(&market)), None)?;

    let provider = desk
        .register_provider(AccountId::new(SIMULATED_ACCOUNT), args.services_limit, false)
        .await?;

    let mut tally = Tally::default();
    for n in 0..args.offers {
        let service = ServiceId::new(format!("sim-service-{n}"));
        market.insert_service(Service::new(service.clone(), provider.id().clone()));
        let offer = Offer::new(provider.account().clone(), service, args.price);
        market.insert_offer(offer.clone());

        let decided = desk.receive_direct(offer).await?;
        tally.record(decided.state());
    }
    tally.active_services = market.active_services(provider.id());

    info!(
        offers = args.offers,
        active_services = tally.active_services,
        "Simulation finished"
    );
    Ok(tally)
}

/// Execute the simulate command.
pub async fn execute(args: &SimulateArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.decision.seed = Some(seed);
    }
    config.init_logging();

    let tally = run(&config, args).await?;

    output::section("Simulation");
    output::key_value("offers", args.offers);
    output::key_value("limit", args.services_limit);
    output::key_value("price", args.price);
    output::section("Outcomes");
    for label in ["accepted", "rejected", "pooled", "postponed"] {
        output::key_value(label, tally.count(label));
    }
    output::key_value("active", tally.active_services);

    Ok(())
}
