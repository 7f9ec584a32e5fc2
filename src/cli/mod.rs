//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Dealdesk - provider-side decisions for direct service offers.
#[derive(Parser, Debug)]
#[command(name = "dealdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a configuration file and print the effective policy
    Check(ConfigPathArg),

    /// Deliver offers to one provider in an in-memory marketplace
    Simulate(SimulateArgs),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `simulate` subcommand.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Number of direct offers to deliver
    #[arg(long, default_value = "100")]
    pub offers: u32,

    /// Maximum concurrently active services for the provider
    #[arg(long, default_value = "10")]
    pub services_limit: u32,

    /// Price of every offer
    #[arg(long, default_value = "100")]
    pub price: Decimal,

    /// Override the configured seed
    #[arg(long)]
    pub seed: Option<u64>,
}
