//! HTTP server bootstrap.
//!
//! [`HttpServer`] owns its router explicitly: nothing is registered on a
//! process-wide default, so several servers can coexist in one process (the
//! integration tests rely on this).

use std::future::Future;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use axum::routing::get;
use axum::Router;
use sanctify_protocol::{GameServer, GAMESERVER_PATH};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::gameserver_source::{GameServerSource, StaticGameServer};
use crate::handlers::{get_gameserver_address, AppState};

/// Default host the server binds to.
pub const DEFAULT_HOST: &str = "localhost";
/// Default port the server binds to.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind, resolved at bind time
    pub host: String,
    /// Port to bind, 0 picks an ephemeral port
    pub port: u16,
    /// Record served by the default static source
    pub game_server: GameServer,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            game_server: GameServer::default(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` string the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject configuration the server could not start with or should not serve.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            bail!("Listen host must not be empty");
        }

        self.game_server
            .validate()
            .context("Invalid gameserver record")?;

        Ok(())
    }
}

/// HTTP server answering gameserver-address lookups.
pub struct HttpServer {
    config: ServerConfig,
    source: Arc<dyn GameServerSource>,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] serving the record from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let source = Arc::new(StaticGameServer::new(config.game_server.clone()));
        Self { config, source }
    }

    /// Creates a server whose record comes from `source` instead of `config`.
    pub fn with_source(config: ServerConfig, source: Arc<dyn GameServerSource>) -> Self {
        Self { config, source }
    }

    /// Access the configuration associated with this server.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router. Unmatched paths get 404 and other methods on a known
    /// path get 405, both from axum's defaults.
    pub fn router(&self) -> Router {
        Router::new()
            .route(GAMESERVER_PATH, get(get_gameserver_address))
            .with_state(AppState::new(self.source.clone()))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address.
    pub async fn bind(&self) -> Result<TcpListener> {
        let address = self.config.address();
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .with_context(|| format!("Failed to bind {}", address))?;

        info!("Listening on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve on `listener` until `shutdown` resolves, then drain in-flight
    /// requests.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server terminated unexpectedly")?;

        info!("HTTP server shutdown complete");
        Ok(())
    }

    /// Validate, bind and serve until Ctrl+C or SIGTERM.
    pub async fn run(&self) -> Result<()> {
        self.config.validate()?;
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
