//! Providers and their capacity settings.

use serde::{Deserialize, Serialize};

use super::id::{AccountId, ProviderId};

/// A seller that receives direct offers.
///
/// Capacity is not stored here; it is derived from the number of the
/// provider's services that are currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    id: ProviderId,
    account: AccountId,
    services_limit: u32,
    uses_oracle: bool,
}

impl Provider {
    /// Create a provider with a generated id.
    pub fn new(account: AccountId, services_limit: u32) -> Self {
        Self {
            id: ProviderId::generate(),
            account,
            services_limit,
            uses_oracle: false,
        }
    }

    /// Replace the generated id.
    #[must_use]
    pub fn with_id(mut self, id: ProviderId) -> Self {
        self.id = id;
        self
    }

    /// Delegate decisions on direct offers to the oracle.
    #[must_use]
    pub fn with_oracle(mut self, uses_oracle: bool) -> Self {
        self.uses_oracle = uses_oracle;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &ProviderId {
        &self.id
    }

    #[must_use]
    pub const fn account(&self) -> &AccountId {
        &self.account
    }

    /// Maximum number of concurrently active services.
    #[must_use]
    pub const fn services_limit(&self) -> u32 {
        self.services_limit
    }

    /// Return `true` if direct offers are decided by the oracle.
    #[must_use]
    pub const fn uses_oracle(&self) -> bool {
        self.uses_oracle
    }
}
