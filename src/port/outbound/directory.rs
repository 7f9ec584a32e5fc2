//! Provider lookup port.

use async_trait::async_trait;

use crate::domain::{AccountId, Provider};
use crate::error::Result;

/// Directory of providers keyed by their account.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Find the provider linked to `account`, if any.
    async fn find_provider_by_account(&self, account: &AccountId) -> Result<Option<Provider>>;

    /// Persist a newly registered provider.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProviderExists`](crate::domain::error::DomainError::ProviderExists)
    /// if the account already has one.
    async fn create_provider(&self, provider: Provider) -> Result<Provider>;
}
