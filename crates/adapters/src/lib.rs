//! HTTP adapter for the Sanctify API
//!
//! This crate exposes the gameserver-address endpoint over HTTP. The record it
//! serves comes from a [`GameServerSource`], so deployments that look the
//! address up somewhere can swap out the static configuration.

pub mod gameserver_source;
pub mod handlers;
pub mod http_server;

pub use gameserver_source::{GameServerSource, StaticGameServer};
pub use handlers::AppState;
pub use http_server::{shutdown_signal, HttpServer, ServerConfig};
