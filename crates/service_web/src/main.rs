//! Expected Move Calculator Service
//!
//! Web service serving the interactive expected-move form and JSON API.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adapter_market::{FixedSnapshotProvider, MarketDataProvider, YahooProvider};
use service_web::config::{build_config, CliArgs as ConfigCliArgs, DataSource, ServiceConfig};
use service_web::server::Server;

/// Expected Move Calculator - interactive form over listed option prices
#[derive(Parser, Debug)]
#[command(name = "service_web")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "EMOVE_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "EMOVE_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "EMOVE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Market data source (yahoo, synthetic)
    #[arg(long, env = "EMOVE_DATA_SOURCE")]
    data_source: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            data_source: args.data_source,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_provider(config: &ServiceConfig) -> anyhow::Result<Arc<dyn MarketDataProvider>> {
    let provider: Arc<dyn MarketDataProvider> = match config.data_source {
        DataSource::Yahoo => Arc::new(YahooProvider::new(Duration::from_secs(
            config.request_timeout_secs,
        ))?),
        DataSource::Synthetic => Arc::new(FixedSnapshotProvider::earnings_fixture()),
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Expected Move Calculator v{}", service_web::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        data_source = %config.data_source,
        request_timeout_secs = %config.request_timeout_secs,
        "Service configuration loaded"
    );

    let provider = build_provider(&config)?;

    // Create and start the server
    let server = Server::new(config, provider);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
