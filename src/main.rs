use anyhow::Context;
use clap::Parser;
use dealdesk::cli::{check, output, simulate, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = dispatch(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Check(args) => check::execute(&args.config)
            .with_context(|| format!("checking {}", args.config.display())),
        Commands::Simulate(args) => simulate::execute(&args)
            .await
            .context("simulation failed"),
    }
}
