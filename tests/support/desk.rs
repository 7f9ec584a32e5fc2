use std::sync::Arc;

use rust_decimal::Decimal;

use dealdesk::adapter::outbound::memory::MemoryMarketplace;
use dealdesk::application::decision::DecisionPolicy;
use dealdesk::application::{DeskPorts, OfferDesk};
use dealdesk::domain::{Decision, OutcomeDistribution};
use dealdesk::testkit::entropy::ScriptedEntropy;
use dealdesk::testkit::ledger::{FailingLedger, LedgerCall};

/// Desk over a fresh marketplace with draws replayed from `draws`.
pub fn scripted_desk(
    policy: DecisionPolicy,
    draws: Vec<Decimal>,
) -> (Arc<MemoryMarketplace>, OfferDesk) {
    let market = Arc::new(MemoryMarketplace::new());
    let desk = OfferDesk::new(
        DeskPorts::shared(Arc::clone(&market)),
        policy,
        Arc::new(ScriptedEntropy::new(draws)),
    );
    (market, desk)
}

/// Like [`scripted_desk`], but the service ledger fails on `fails`.
pub fn desk_with_broken_ledger(
    policy: DecisionPolicy,
    fails: LedgerCall,
) -> (Arc<MemoryMarketplace>, OfferDesk) {
    let market = Arc::new(MemoryMarketplace::new());
    let mut ports = DeskPorts::shared(Arc::clone(&market));
    ports.services = Arc::new(FailingLedger::new(Arc::clone(&ports.services), fails));
    let desk = OfferDesk::new(
        ports,
        policy,
        Arc::new(ScriptedEntropy::new(vec![Decimal::ZERO])),
    );
    (market, desk)
}

/// Policy whose direct path always yields `decision`.
pub fn forced_direct(decision: Decision) -> DecisionPolicy {
    DecisionPolicy::new(
        OutcomeDistribution::certain(decision),
        OutcomeDistribution::pool_default(),
    )
    .expect("valid policy")
}

/// Policy whose pool path always yields `decision`.
pub fn forced_pool(decision: Decision) -> DecisionPolicy {
    DecisionPolicy::new(
        OutcomeDistribution::direct_default(),
        OutcomeDistribution::certain(decision),
    )
    .expect("valid policy")
}
