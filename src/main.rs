#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use anyhow::Result;
use clap::Parser;
use grievance_journal::{Cli, Config, app};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    // Initialize logging
    let level = config.observability.tracing_level().unwrap_or(Level::WARN);
    if let Err(e) = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: Failed to install log subscriber: {e}");
    }

    app::dispatch(cli, config).await
}
