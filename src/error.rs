use thiserror::Error;

use crate::domain::error::DomainError;
use crate::domain::OfferId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failures talking to the decision oracle.
#[derive(Error, Debug, Clone)]
pub enum OracleError {
    #[error("oracle rejected credentials (status {status})")]
    Unauthorized { status: u16 },

    #[error("oracle request failed with status {status}")]
    Status { status: u16 },

    #[error("oracle prompt is empty")]
    EmptyPrompt,

    #[error("oracle returned no completion")]
    EmptyCompletion,
}

/// Broad classification used by callers to decide how to recover.
///
/// Validation errors are raised before any side effect and can be retried
/// once the input is fixed. Dependency errors may leave the offer partially
/// mutated, so its state must be re-fetched before retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Dependency,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("persistence error: {0}")]
    Persistence(String),

    /// A failure after the offer was already handed to a store. The stored
    /// offer may differ from the caller's copy.
    #[error("offer {offer_id} partially applied: {source}")]
    SideEffect {
        offer_id: OfferId,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Classify the error for retry handling.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) | Error::Domain(_) => ErrorKind::Validation,
            Error::Oracle(_)
            | Error::Json(_)
            | Error::Http(_)
            | Error::Io(_)
            | Error::Persistence(_)
            | Error::SideEffect { .. } => ErrorKind::Dependency,
        }
    }

    /// Return `true` if the error was raised before any mutation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }

    /// Mark an error as raised after the offer was touched.
    pub fn side_effect(offer_id: OfferId, source: impl Into<Error>) -> Self {
        Error::SideEffect {
            offer_id,
            source: Box::new(source.into()),
        }
    }

    /// The underlying error, looking through [`Error::SideEffect`].
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Error::SideEffect { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
