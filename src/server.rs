//! Server lifecycle: bind, announce, serve, shut down.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::announce::announce_port;
use crate::error::ServiceError;
use crate::http::routes::create_router;
use crate::state::AppState;

/// Default port when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8000;

/// Server configuration.
///
/// Only the port is configurable. The host is always the loopback interface:
/// the service has no authentication and must never be reachable from other
/// machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Resolve the configuration from the optional command-line argument.
    ///
    /// An absent argument selects [`DEFAULT_PORT`]. An argument that does
    /// not parse as a port number is a startup error; the listener is never
    /// bound.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ServiceError> {
        match arg {
            None => Ok(Self::default()),
            Some(raw) => raw
                .parse::<u16>()
                .map(Self::new)
                .map_err(|_| ServiceError::InvalidPort(raw.to_string())),
        }
    }

    /// The loopback address the listener binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// The orchestrator HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    pub fn new(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Bind, announce the bound port on stdout, and serve until interrupted.
    ///
    /// A bind failure is fatal and surfaces immediately; there are no
    /// retries. With port 0 the OS picks a free port and the announcement
    /// reports the actual one.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone());

        let listener = TcpListener::bind(self.config.addr()).await?;
        let addr = listener.local_addr()?;

        announce_port(addr.port())?;
        info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve when an interrupt or terminate signal arrives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }
    }

    // Only Ctrl+C is available on non-Unix
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received Ctrl+C");
    }
}
