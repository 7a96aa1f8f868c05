//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This is the main entry point for the order intake server.
// It loads the configuration, sets up logging, creates the API server and starts listening.
//--------------------------------------------------------------------------------------------------

use anyhow::Context;
use clap::Parser;
use tracing::info;

use order_intake::{telemetry, Api, CliArgs, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = args.apply(Config::try_from_env()?);

    telemetry::init(config.log_format);

    info!(
        addr = %config.addr(),
        id_strategy = ?config.id_strategy,
        "Starting order intake API server"
    );
    info!("CORS origins: {}", config.cors_origins.join(", "));

    Api::from_config(&config)
        .serve()
        .await
        .context("API server failed")?;

    info!("Order intake API server stopped");
    Ok(())
}
