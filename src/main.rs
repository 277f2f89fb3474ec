//! Cedula MCP Server - Main entry point
//!
//! This is the main executable for the cédula MCP server, which exposes the
//! Ecuadorian national ID validator over the Model Context Protocol.

use anyhow::Result;
use cedula_mcp_server::services::{CedulaService, CedulaServiceImpl};
use cedula_mcp_server::{CedulaMcpServer, Config, Metrics};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Cedula MCP Server (locale: {}, max batch size: {})",
        config.locale, config.max_batch_size
    );

    let service = Arc::new(CedulaServiceImpl::from_config(&config, Metrics::new()))
        as Arc<dyn CedulaService>;
    let server = CedulaMcpServer::new(service);

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    cedula_mcp_server::server::run_server(server).await?;

    info!("Cedula MCP Server shutdown complete");
    Ok(())
}
