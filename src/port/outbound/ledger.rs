//! Service lifecycle port.

use async_trait::async_trait;

use crate::domain::{ProviderId, Service, ServiceId};
use crate::error::Result;

/// Ledger of provider services.
#[async_trait]
pub trait ServiceLedger: Send + Sync {
    /// Look up a service by id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ServiceNotFound`](crate::domain::error::DomainError::ServiceNotFound)
    /// if the service does not exist.
    async fn find_service(&self, id: &ServiceId) -> Result<Service>;

    /// Start the service and persist it as active.
    async fn commence(&self, service: Service) -> Result<Service>;

    /// Number of the provider's services currently in the active state.
    async fn count_active_services(&self, provider: &ProviderId) -> Result<u32>;
}
