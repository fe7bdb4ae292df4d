//! CLI command modules

pub mod payload;
pub mod serve;

pub use payload::execute_payload_command;
pub use serve::{execute_serve_command, init_tracing, LOG_LEVELS};
