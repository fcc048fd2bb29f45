use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use reporting::DailyOrderSummaryRepository;
use tracing_subscriber::EnvFilter;

/// A read-only daily order reporting service over flat-file datasets.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment overrides from a .env file, if one exists.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = configuration::load_config(&cli.config)?;

    // Everything is loaded and joined up front: a malformed dataset stops
    // the process here, before the server ever accepts a request.
    let datasets = ingest::load_datasets(&settings.data)?;
    let repository = Arc::new(DailyOrderSummaryRepository::new(&datasets)?);
    tracing::info!("Joined order data ready; starting server.");

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    web_server::run_server(addr, repository).await
}
