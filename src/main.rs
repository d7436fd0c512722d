use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use vitae::{start_web_server, EnvironmentConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Résumé builder API server.
#[derive(Parser)]
#[command(name = "vitae", version)]
struct Args {
    /// Path to the environment configuration file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Port the API server listens on
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vitae=info,rocket=warn")),
        )
        .init();

    let config = EnvironmentConfig::load(&args.config)?;
    config.ensure_directories().await?;

    info!("Starting résumé builder API server");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!("Workspace: {}", config.workspace_path.display());
    info!("Server: http://0.0.0.0:{}", args.port);

    start_web_server(config, args.port).await
}
