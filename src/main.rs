//! Entry point: load config, import players, serve queries.

use anyhow::Context;
use clap::Parser;
use players_api::{app, cli::Args, logging::init_logging, Config};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = start(args).await {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn start(args: Args) -> anyhow::Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;

    app::run(config).await?;
    Ok(())
}
