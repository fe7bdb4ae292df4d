//! Payload command implementation
//!
//! Prints the body `serve` would return for the same flags, which is handy
//! when wiring up a client without starting the server.

use anyhow::{Context, Result};
use sanctify_protocol::{GameServer, GetGameServerResponse};

/// Render the response body for `game_server`.
pub fn render_payload(game_server: GameServer, pretty: bool) -> Result<String> {
    game_server
        .validate()
        .context("Invalid gameserver record")?;

    let response = GetGameServerResponse::new(game_server);
    let body = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        response.to_json()?
    };

    Ok(body)
}

/// Execute the payload command
pub fn execute_payload_command(game_server: GameServer, pretty: bool) -> Result<()> {
    println!("{}", render_payload(game_server, pretty)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_payload() {
        let body = render_payload(GameServer::default(), false).unwrap();
        assert_eq!(
            body,
            r#"{"game_server":{"hostname":"localhost","ws_port":9001,"game_token":"test-token"}}"#
        );
    }

    #[test]
    fn test_render_rejects_invalid_record() {
        assert!(render_payload(GameServer::new("localhost", 0), false).is_err());
    }

    #[test]
    fn test_render_pretty_parses_back() {
        let body = render_payload(GameServer::new("localhost", 9001), true).unwrap();
        let parsed: GetGameServerResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.game_server, GameServer::new("localhost", 9001));
    }
}
