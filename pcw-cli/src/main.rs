//! PCW proxy CLI.
//!
//! Runs either the cache-aside proxy itself or the mock upstream provider.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pcw_api::{ApiConfig, ApiServer};
use pcw_mock::MockProvider;

/// PCW - cache-aside address lookup proxy
#[derive(Parser)]
#[command(name = "pcw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the proxy server
    Serve {
        /// Port to listen on (overrides HTTP_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the mock upstream provider
    Mock {
        /// Port to listen on
        #[arg(short, long, default_value = "8081")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "pcw=debug,info"
    } else {
        "pcw=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Mock { port } => cmd_mock(port).await,
    }
}

/// Run the proxy: connect the adapters, then serve.
async fn cmd_serve(port: Option<u16>) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(port) = port {
        config.http_port = port;
    }

    tracing::info!(
        redis = %config.redis.url(),
        upstream = %config.upstream.base_url,
        port = config.http_port,
        "starting proxy"
    );

    let server = ApiServer::connect(&config)
        .await
        .context("failed to connect proxy adapters")?;

    server
        .run(([0, 0, 0, 0], config.http_port))
        .await
        .context("proxy server failed")
}

/// Run the mock upstream provider.
async fn cmd_mock(port: u16) -> Result<()> {
    MockProvider::run(([0, 0, 0, 0], port))
        .await
        .context("mock provider failed")
}
