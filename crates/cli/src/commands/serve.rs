//! Serve command implementation
//!
//! This module implements `sanctify-api serve`, which binds the HTTP server and
//! answers gameserver-address lookups until it receives a shutdown signal.

use anyhow::{Context, Result};
use sanctify_adapters::{HttpServer, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log levels accepted by `--log-level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Build the filter used when `RUST_LOG` is unset.
pub fn default_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!(
        "sanctify_cli={level},sanctify_adapters={level},tower_http={level},warn"
    ))
    .with_context(|| format!("Invalid log level '{}'", level))
}

/// Install the fmt subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(level)?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

/// Execute the serve command
pub async fn execute_serve_command(config: ServerConfig) -> Result<()> {
    config.validate()?;

    info!(
        address = %config.address(),
        hostname = %config.game_server.hostname,
        ws_port = config.game_server.ws_port,
        token = config.game_server.game_token.is_some(),
        "Starting gameserver address service"
    );

    HttpServer::new(config)
        .run()
        .await
        .context("Failed to run HTTP server")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_known_levels() {
        for level in LOG_LEVELS {
            assert!(default_filter(level).is_ok(), "{} should parse", level);
        }
    }

    #[test]
    fn test_default_filter_rejects_unknown_level() {
        let err = default_filter("verbose").unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
