//! Sanctify API payload types
//!
//! This crate defines the records the API hands to game clients, along with
//! the route they are served on. Both the HTTP adapter and the CLI depend on
//! these types so the wire shape lives in exactly one place.

pub mod errors;
pub mod gameserver;

pub use errors::ProtocolError;
pub use gameserver::{GameServer, GetGameServerResponse};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Route serving the gameserver address
pub const GAMESERVER_PATH: &str = "/api/gameserver";
