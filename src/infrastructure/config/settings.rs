//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; secrets such as
//! `OPENAI_API_KEY` come from the environment.
//!
//! # Example
//!
//! ```no_run
//! use dealdesk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::decision::DecisionConfig;
use super::logging::LoggingConfig;
use super::oracle::OracleConfig;
use crate::error::{ConfigError, Error, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Stochastic decision weights.
    #[serde(default)]
    pub decision: DecisionConfig,

    /// Oracle strategy settings.
    #[serde(default)]
    pub oracle: OracleConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation
    /// fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Check values that deserialization cannot.
    fn validate(&self) -> Result<()> {
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("unknown format '{}', expected pretty or json", self.logging.format),
            }
            .into());
        }

        self.decision
            .direct
            .to_distribution()
            .map_err(|e| invalid("decision.direct", e))?;
        self.decision
            .pool
            .to_distribution()
            .map_err(|e| invalid("decision.pool", e))?;
        self.decision
            .policy()
            .map_err(|e| invalid("decision.pool", e))?;

        if self.oracle.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "oracle.max_tokens",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.oracle.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "oracle.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        match Url::parse(&self.oracle.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    field: "oracle.base_url",
                    reason: format!("unsupported scheme '{}'", url.scheme()),
                }
                .into());
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    field: "oracle.base_url",
                    reason: e.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl ToString) -> Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::{Decision, OutcomeDistribution};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        let policy = config.decision.policy().unwrap();
        assert_eq!(*policy.direct(), OutcomeDistribution::direct_default());
        assert_eq!(*policy.pool(), OutcomeDistribution::pool_default());
        assert_eq!(config.oracle.max_tokens, 60);
        assert_eq!(config.logging.level, "info");
        assert!(config.decision.seed.is_none());
    }

    #[test]
    fn float_probabilities_are_summed_exactly() {
        let toml = r#"
[decision.direct]
accept = 0.1
reject = 0.2
postpone = 0.3
pool = 0.4
"#;
        let config = Config::parse_toml(toml).unwrap();
        let direct = config.decision.direct.to_distribution().unwrap();
        assert_eq!(direct.probability(Decision::Postpone), dec!(0.3));
    }

    #[test]
    fn distribution_not_summing_to_one_is_rejected() {
        let toml = r#"
[decision.direct]
accept = 0.5
reject = 0.2
postpone = 0.1
pool = 0.1
"#;
        match Config::parse_toml(toml) {
            Err(Error::Config(ConfigError::InvalidValue {
                field: "decision.direct",
                reason,
            })) => assert!(reason.contains("0.9"), "{reason}"),
            other => panic!("expected invalid distribution, got {other:?}"),
        }
    }

    #[test]
    fn pool_distribution_must_be_terminal() {
        let toml = r#"
[decision.pool]
accept = 0.5
reject = 0.3
pool = 0.2
"#;
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "decision.pool",
                ..
            }))
        ));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let toml = r#"
[oracle]
max_tokens = 0
"#;
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "oracle.max_tokens",
                ..
            }))
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let toml = r#"
[oracle]
base_url = "ftp://example.com"
"#;
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "oracle.base_url",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let toml = r#"
[logging]
level = "debug"
format = "xml"
"#;
        assert!(matches!(
            Config::parse_toml(toml),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            Config::parse_toml("[decision"),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }
}
