//! Error types for the match server
//!
//! Defines application-level errors, move rule violations and
//! configuration errors. Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Application-level errors
///
/// Covers both fatal errors (connection termination) and
/// business errors (send error message to client).
#[derive(Debug, Error)]
pub enum AppError {
    /// WebSocket protocol error (fatal)
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (fatal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send error (room actor is gone)
    #[error("Channel send error")]
    ChannelSend,

    /// Room not found with the given id
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    /// Move rejected by the match rules
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Move rule violations
///
/// A rejected move never changes the board, turn or outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Caller does not hold the slot whose color is due to move
    #[error("Not your turn")]
    NotYourTurn,

    /// Coordinates outside `[0, size)`
    #[error("Position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i64, y: i64, size: usize },

    /// Target cell already holds a stone
    #[error("Cell ({x}, {y}) is already occupied")]
    CellOccupied { x: usize, y: usize },
}

/// Configuration errors (fatal at start-up)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Board size is not an integer
    #[error("Invalid board size '{0}'")]
    InvalidBoardSize(String),

    /// Board size is outside the supported range
    #[error("Board size {size} must be between {min} and {max}")]
    BoardSizeOutOfRange { size: usize, min: usize, max: usize },
}
