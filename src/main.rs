use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mxswap::application::commands::{Cli, CommandExecutor};
use mxswap::shared::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    // Priority: CLI args > environment > config file > defaults
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    CommandExecutor::execute(cli.command, config).await?;
    Ok(())
}
