use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sanctify_adapters::http_server::{DEFAULT_HOST, DEFAULT_PORT};
use sanctify_adapters::ServerConfig;
use sanctify_protocol::gameserver::{DEFAULT_GAME_TOKEN, DEFAULT_HOSTNAME, DEFAULT_WS_PORT};
use sanctify_protocol::GameServer;

mod commands;
use commands::{execute_payload_command, execute_serve_command, init_tracing, LOG_LEVELS};

#[derive(Parser, Debug)]
#[command(name = "sanctify-api")]
#[command(about = "Sanctify API - tells game clients where to connect")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve GET /api/gameserver over HTTP
    Serve(ServeArgs),
    /// Print the JSON body the server would return
    Payload(PayloadArgs),
}

#[derive(Args, Debug)]
pub struct GameServerArgs {
    /// Hostname handed to clients
    #[arg(long, default_value_t = DEFAULT_HOSTNAME.to_string())]
    pub gameserver_host: String,
    /// Websocket port handed to clients
    #[arg(long, default_value_t = DEFAULT_WS_PORT)]
    pub ws_port: u16,
    /// Token handed to clients
    #[arg(long, default_value_t = DEFAULT_GAME_TOKEN.to_string())]
    pub game_token: String,
    /// Leave the token out of the response
    #[arg(long, conflicts_with = "game_token")]
    pub no_game_token: bool,
}

impl GameServerArgs {
    fn into_game_server(self) -> GameServer {
        let game_server = GameServer::new(self.gameserver_host, self.ws_port);
        if self.no_game_token {
            game_server
        } else {
            game_server.with_token(self.game_token)
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to listen on
    #[arg(long, default_value_t = DEFAULT_HOST.to_string())]
    pub host: String,
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info", value_parser = LOG_LEVELS)]
    pub log_level: String,
    #[command(flatten)]
    pub game_server: GameServerArgs,
}

impl ServeArgs {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            game_server: self.game_server.into_game_server(),
        }
    }
}

#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
    #[command(flatten)]
    pub game_server: GameServerArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_tracing(&args.log_level)?;
            execute_serve_command(args.into_config()).await
        }
        Commands::Payload(args) => {
            execute_payload_command(args.game_server.into_game_server(), args.pretty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn serve_args(argv: &[&str]) -> ServeArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Serve(args) => args,
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let config = serve_args(&["sanctify-api", "serve"]).into_config();
        assert_eq!(config.address(), "localhost:8080");
        assert_eq!(config.game_server, GameServer::default());
    }

    #[test]
    fn test_serve_overrides() {
        let config = serve_args(&[
            "sanctify-api",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "3000",
            "--gameserver-host",
            "play.example.net",
            "--ws-port",
            "7000",
            "--game-token",
            "secret",
        ])
        .into_config();

        assert_eq!(config.address(), "0.0.0.0:3000");
        assert_eq!(
            config.game_server,
            GameServer::new("play.example.net", 7000).with_token("secret")
        );
    }

    #[test]
    fn test_no_game_token() {
        let config = serve_args(&["sanctify-api", "serve", "--no-game-token"]).into_config();
        assert_eq!(config.game_server.game_token, None);

        let conflict = Cli::try_parse_from([
            "sanctify-api",
            "serve",
            "--no-game-token",
            "--game-token",
            "x",
        ]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_payload_defaults_match_server_defaults() {
        let args = match Cli::try_parse_from(["sanctify-api", "payload"]).unwrap().command {
            Commands::Payload(args) => args,
            other => panic!("expected payload, got {:?}", other),
        };
        assert_eq!(args.game_server.into_game_server(), GameServer::default());
    }

    #[test]
    fn test_log_level_is_restricted() {
        let args = serve_args(&["sanctify-api", "serve", "--log-level", "debug"]);
        assert_eq!(args.log_level, "debug");

        assert!(
            Cli::try_parse_from(["sanctify-api", "serve", "--log-level", "verbose"]).is_err()
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["sanctify-api", "serve", "--port", "99999"]).is_err());
    }
}
