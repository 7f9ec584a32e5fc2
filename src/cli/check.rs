//! Handler for the `check` command.

use std::path::Path;

use crate::cli::output;
use crate::domain::{Decision, OutcomeDistribution};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file and print the effective settings.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::key_value("Config", path.display());

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    let policy = config.decision.policy()?;
    print_distribution("Direct offers", policy.direct());
    print_distribution("Pool offers", policy.pool());

    output::section("Oracle");
    output::key_value("model", &config.oracle.model);
    output::key_value("base_url", &config.oracle.base_url);
    output::key_value("max_tokens", config.oracle.max_tokens);
    output::key_value("timeout", format!("{}s", config.oracle.timeout_secs));
    println!();
    if std::env::var("OPENAI_API_KEY").is_ok() {
        output::ok("OPENAI_API_KEY found");
    } else {
        output::warn("OPENAI_API_KEY not set; oracle providers will be refused");
    }

    Ok(())
}

fn print_distribution(title: &str, distribution: &OutcomeDistribution) {
    output::section(title);
    for decision in Decision::ALL {
        output::key_value(decision.as_str(), distribution.probability(decision));
    }
}
