//! Service ledger that fails on a chosen call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ProviderId, Service, ServiceId};
use crate::error::{Error, Result};
use crate::port::ServiceLedger;

/// Ledger call that [`FailingLedger`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCall {
    Find,
    Commence,
    CountActive,
}

/// Delegates to an inner ledger except for one call, which returns a
/// persistence error without touching the inner ledger.
pub struct FailingLedger {
    inner: Arc<dyn ServiceLedger>,
    fails: LedgerCall,
}

impl FailingLedger {
    pub fn new(inner: Arc<dyn ServiceLedger>, fails: LedgerCall) -> Self {
        Self { inner, fails }
    }

    fn check(&self, call: LedgerCall) -> Result<()> {
        if call == self.fails {
            return Err(Error::Persistence(format!("ledger unavailable during {call:?}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ServiceLedger for FailingLedger {
    async fn find_service(&self, id: &ServiceId) -> Result<Service> {
        self.check(LedgerCall::Find)?;
        self.inner.find_service(id).await
    }

    async fn commence(&self, service: Service) -> Result<Service> {
        self.check(LedgerCall::Commence)?;
        self.inner.commence(service).await
    }

    async fn count_active_services(&self, provider: &ProviderId) -> Result<u32> {
        self.check(LedgerCall::CountActive)?;
        self.inner.count_active_services(provider).await
    }
}
