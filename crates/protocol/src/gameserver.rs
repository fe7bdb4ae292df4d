//! Gameserver address records.
//!
//! A [`GameServer`] tells a client which host and websocket port to dial, and
//! optionally which token to present once connected.

use serde::{Deserialize, Serialize};

use crate::errors::ProtocolError;
use crate::Result;

/// Default hostname handed to clients.
pub const DEFAULT_HOSTNAME: &str = "localhost";
/// Default websocket port handed to clients.
pub const DEFAULT_WS_PORT: u16 = 9001;
/// Default game token handed to clients.
pub const DEFAULT_GAME_TOKEN: &str = "test-token";

/// Where a game client should connect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameServer {
    /// Host running the game server
    pub hostname: String,
    /// Websocket port on that host
    pub ws_port: u16,
    /// Token the client presents to the game server, omitted when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_token: Option<String>,
}

impl Default for GameServer {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            ws_port: DEFAULT_WS_PORT,
            game_token: Some(DEFAULT_GAME_TOKEN.to_string()),
        }
    }
}

impl GameServer {
    /// Create a record without a token
    pub fn new(hostname: impl Into<String>, ws_port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            ws_port,
            game_token: None,
        }
    }

    /// Attach a token to the record
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.game_token = Some(token.into());
        self
    }

    /// Check that the record is something a client could actually dial
    pub fn validate(&self) -> Result<()> {
        if self.hostname.is_empty() {
            return Err(ProtocolError::InvalidField {
                field: "hostname",
                reason: "must not be empty".to_string(),
            });
        }

        if self.hostname.chars().any(char::is_whitespace) {
            return Err(ProtocolError::InvalidField {
                field: "hostname",
                reason: format!("'{}' contains whitespace", self.hostname),
            });
        }

        if self.ws_port == 0 {
            return Err(ProtocolError::InvalidField {
                field: "ws_port",
                reason: "must be non-zero".to_string(),
            });
        }

        if let Some(token) = &self.game_token {
            if token.is_empty() {
                return Err(ProtocolError::InvalidField {
                    field: "game_token",
                    reason: "must not be empty when present".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Body of `GET /api/gameserver`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetGameServerResponse {
    pub game_server: GameServer,
}

impl GetGameServerResponse {
    pub fn new(game_server: GameServer) -> Self {
        Self { game_server }
    }

    /// Serialize to the exact JSON body sent on the wire
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
