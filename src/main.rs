//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration and serves the GeoNames tools
//! over stdin/stdout.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use geonames_mcp_server::core::{Config, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first so configuration warnings are visible.
    dotenvy::dotenv().ok();
    let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| Config::default().logging.level);
    init_logging(&level);

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("GeoNames settings: {:?}", config.geonames);

    let server = McpServer::new(config).context("Failed to initialize server")?;

    info!("Server initialized");

    server.serve_stdio().await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs always go to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
