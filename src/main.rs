use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use frontpage::app::AppContext;
use frontpage::cli::{commands, Cli, Commands};
use frontpage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(country) = cli.country {
        config.feed.country = country;
        config.feed.validate()?;
    }

    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Fetch => {
            commands::fetch_headlines(&ctx).await?;
        }
        Commands::Tui => {
            frontpage::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
