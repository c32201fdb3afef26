//! pingsum: a minimal JSON service.
//!
//! This is the application entry point. It initializes tracing, loads configuration
//! from an optional TOML file plus environment overrides, builds the Axum router and
//! starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pingsum::config::{AppConfig, LogFormat, CLI_AFTER_HELP, DEFAULT_LOG_FILTER};
use pingsum::create_router;

/// pingsum: answers GET /ping and adds integers on POST /sum
#[derive(Parser, Debug)]
#[command(name = "pingsum", version, about, after_help = CLI_AFTER_HELP)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "pingsum=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen port (overrides config file and PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration: file, then environment, then CLI
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    pingsum::http::start_server(app, &config).await?;

    Ok(())
}
