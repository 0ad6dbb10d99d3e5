//! `alertdesk` binary: serves the tools over stdio.

use alertdesk::{AlertDesk, ServerConfig};
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "alertdesk=info,rmcp=warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::default();
    info!(
        weather = %config.weather_base_url,
        notifications = %config.notification_base_url,
        "starting alertdesk MCP server on stdio"
    );

    let server = AlertDesk::new(&config)?;
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    info!("alertdesk MCP server stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("Fatal error in main(): {}", e);
        std::process::exit(1);
    }
}
