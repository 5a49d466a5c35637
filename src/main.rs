mod client;
mod config;
mod model;
mod server;
mod tools;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use client::OpenProjectClient;
use server::McpServer;
use tools::ToolRouter;

fn init_logging() {
    // RUST_LOG wins; LOG_LEVEL is the plain level knob.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        EnvFilter::try_new(level.to_lowercase()).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load config (.env included) before logging so LOG_LEVEL from .env applies
    let config = config::load_config()?;
    init_logging();

    info!("Starting OpenProject MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let client = match config.connection() {
        Some(conn) => Some(OpenProjectClient::new(conn)),
        None => {
            error!("OPENPROJECT_URL or OPENPROJECT_API_KEY not set!");
            info!("Please set the required environment variables in .env file");
            None
        }
    };
    let router = ToolRouter::new(client);

    if config.test_connection_on_startup {
        if let Some(client) = router.client() {
            match client.test_connection().await {
                Ok(_) => info!("API connection test successful"),
                Err(e) => error!("API connection test failed: {e}"),
            }
        }
    }

    McpServer::new(router).run_stdio().await
}
