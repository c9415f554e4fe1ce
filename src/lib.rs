//! Gomoku Match Server Library
//!
//! A two-player five-in-a-row server built with tokio-tungstenite.
//! Players create rooms, join them with an opaque player id, and take
//! turns placing stones on a shared 15x15 board.
//!
//! # Features
//! - Room creation with random 8-character ids
//! - Idempotent joining: first player is Black, second White, the rest spectate
//! - Turn, bounds and occupancy enforcement
//! - Five-in-a-row win detection (overlines count) and draw on a full board
//! - Read-only state snapshots
//!
//! # Architecture
//! Uses the Actor pattern with `mpsc` channels, one actor per room:
//! - `RoomStore` maps room ids to `RoomHandle`s behind a lock that only
//!   guards the map
//! - Each `RoomActor` exclusively owns its `Match`, so moves on one room
//!   are serialized while different rooms never contend
//! - Each connection has a `handler` task that forwards requests through
//!   the shared `GameServer`
//!
//! # Example
//! ```ignore
//! use tokio::net::TcpListener;
//! use gomoku_server::{GameServer, handle_connection};
//!
//! #[tokio::main]
//! async fn main() {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     let server = GameServer::default();
//!
//!     while let Ok((stream, _)) = listener.accept().await {
//!         tokio::spawn(handle_connection(stream, server.clone()));
//!     }
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod handler;
pub mod message;
pub mod room;
pub mod server;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use board::{Board, Cell, Color, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use config::ServerConfig;
pub use error::{AppError, ConfigError, MoveError};
pub use game::{Match, MoveResult, Outcome, Role, StateSnapshot, Winner};
pub use handler::handle_connection;
pub use message::{ClientMessage, ErrorClass, ErrorCode, ServerMessage};
pub use room::{RoomActor, RoomCommand, RoomHandle};
pub use server::GameServer;
pub use store::RoomStore;
pub use types::{ConnectionId, PlayerId, RoomId};
