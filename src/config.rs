//! Server configuration
//!
//! Bind address comes from the first CLI argument or `GOMOKU_ADDR`;
//! board size from `GOMOKU_BOARD_SIZE`. Everything has a default.

use std::env;

use crate::board::{DEFAULT_BOARD_SIZE, WIN_LENGTH};
use crate::error::ConfigError;

/// Default server address
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Largest accepted board side
pub const MAX_BOARD_SIZE: usize = 64;

/// Process-wide server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the listener to
    pub addr: String,
    /// Side length shared by every board
    pub board_size: usize,
}

impl ServerConfig {
    /// Load configuration from command line and environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(
            env::args().nth(1),
            env::var("GOMOKU_ADDR").ok(),
            env::var("GOMOKU_BOARD_SIZE").ok(),
        )
    }

    /// Build configuration from raw values; the CLI address wins over the
    /// environment one.
    pub fn from_sources(
        arg_addr: Option<String>,
        env_addr: Option<String>,
        board_size: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = arg_addr
            .or(env_addr)
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let board_size = match board_size {
            Some(raw) => parse_board_size(&raw)?,
            None => DEFAULT_BOARD_SIZE,
        };

        Ok(Self { addr, board_size })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

fn parse_board_size(raw: &str) -> Result<usize, ConfigError> {
    let size: usize = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBoardSize(raw.to_string()))?;

    if !(WIN_LENGTH..=MAX_BOARD_SIZE).contains(&size) {
        return Err(ConfigError::BoardSizeOutOfRange {
            size,
            min: WIN_LENGTH,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(None, None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.board_size, 15);
    }

    #[test]
    fn test_cli_address_wins() {
        let config = ServerConfig::from_sources(
            Some("0.0.0.0:9000".to_string()),
            Some("127.0.0.1:7000".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:9000");

        let config =
            ServerConfig::from_sources(None, Some("127.0.0.1:7000".to_string()), None).unwrap();
        assert_eq!(config.addr, "127.0.0.1:7000");
    }

    #[test]
    fn test_board_size() {
        let config = ServerConfig::from_sources(None, None, Some(" 19 ".to_string())).unwrap();
        assert_eq!(config.board_size, 19);
    }

    #[test]
    fn test_invalid_board_size() {
        let err = ServerConfig::from_sources(None, None, Some("big".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBoardSize(_)));

        let err = ServerConfig::from_sources(None, None, Some("4".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::BoardSizeOutOfRange { size: 4, .. }));

        let err = ServerConfig::from_sources(None, None, Some("65".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::BoardSizeOutOfRange { size: 65, .. }));
    }
}
