//! Where the served gameserver record comes from.

use sanctify_protocol::GameServer;

/// Supplies the record returned to clients.
///
/// Implementations are consulted once per request and must not fail; a source
/// backed by something fallible should resolve the record ahead of time.
pub trait GameServerSource: Send + Sync {
    fn game_server(&self) -> GameServer;
}

/// Serves the same record on every request.
#[derive(Debug, Clone, Default)]
pub struct StaticGameServer {
    record: GameServer,
}

impl StaticGameServer {
    pub fn new(record: GameServer) -> Self {
        Self { record }
    }

    /// Access the record this source hands out.
    pub fn record(&self) -> &GameServer {
        &self.record
    }
}

impl GameServerSource for StaticGameServer {
    fn game_server(&self) -> GameServer {
        self.record.clone()
    }
}

impl<F> GameServerSource for F
where
    F: Fn() -> GameServer + Send + Sync,
{
    fn game_server(&self) -> GameServer {
        self()
    }
}
