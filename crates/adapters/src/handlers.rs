//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use sanctify_protocol::GetGameServerResponse;
use tracing::debug;

use crate::gameserver_source::GameServerSource;

/// State shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn GameServerSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn GameServerSource>) -> Self {
        Self { source }
    }
}

/// `GET /api/gameserver`
///
/// Query string, headers and body are never read, so this always answers 200.
pub async fn get_gameserver_address(State(state): State<AppState>) -> Json<GetGameServerResponse> {
    let game_server = state.source.game_server();
    debug!(
        hostname = %game_server.hostname,
        ws_port = game_server.ws_port,
        "Serving gameserver address"
    );

    Json(GetGameServerResponse::new(game_server))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameserver_source::StaticGameServer;
    use sanctify_protocol::GameServer;

    #[tokio::test]
    async fn test_handler_wraps_source_record() {
        let state = AppState::new(Arc::new(StaticGameServer::default()));

        let Json(response) = get_gameserver_address(State(state)).await;
        assert_eq!(response.game_server, GameServer::default());
    }
}
