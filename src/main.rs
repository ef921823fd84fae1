use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod model;
mod service;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the --log flag when set
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli.run().await
}
