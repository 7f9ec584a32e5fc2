//! Services started for accepted offers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{ProviderId, ServiceId};

/// Lifecycle state of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    Pending,
    /// Running and occupying provider capacity.
    Active,
    Completed,
    Cancelled,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// A unit of work owned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    id: ServiceId,
    provider: ProviderId,
    state: ServiceState,
}

impl Service {
    /// Create a pending service.
    pub const fn new(id: ServiceId, provider: ProviderId) -> Self {
        Self {
            id,
            provider,
            state: ServiceState::Pending,
        }
    }

    /// Override the initial state, mostly for seeding stores.
    #[must_use]
    pub fn with_state(mut self, state: ServiceState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub const fn id(&self) -> &ServiceId {
        &self.id
    }

    #[must_use]
    pub const fn provider(&self) -> &ProviderId {
        &self.provider
    }

    #[must_use]
    pub const fn state(&self) -> ServiceState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == ServiceState::Active
    }

    /// Start the service.
    ///
    /// # Errors
    ///
    /// Only pending services can be commenced.
    pub fn commence(mut self) -> Result<Self, DomainError> {
        if self.state != ServiceState::Pending {
            return Err(DomainError::InvalidServiceTransition {
                service_id: self.id,
                from: self.state,
                to: ServiceState::Active,
            });
        }
        self.state = ServiceState::Active;
        Ok(self)
    }
}
