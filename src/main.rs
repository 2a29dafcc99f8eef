//! orchestrator-server - local job API for the Content Portal desktop app.
//!
//! Main entry point: parses the optional port argument, initializes tracing
//! on stderr, and runs the HTTP server until interrupted.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orchestrator_server::{AppState, Server, ServerConfig};

/// orchestrator-server CLI.
#[derive(Parser)]
#[command(name = "orchestrator-server")]
#[command(about = "Local job orchestration API for the Content Portal desktop app")]
#[command(version)]
struct Cli {
    /// Port to listen on (loopback only). Defaults to 8000.
    port: Option<String>,
}

/// Initialize tracing with stderr output.
///
/// Stdout is reserved for the port announcement line, so every diagnostic
/// goes to stderr.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();

    let config = ServerConfig::from_arg(cli.port.as_deref())?;

    info!("Starting orchestrator-server v{}", env!("CARGO_PKG_VERSION"));

    let state = Arc::new(AppState::new());
    let server = Server::new(config, state);

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}
