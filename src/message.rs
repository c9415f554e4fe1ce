//! Message protocol definitions
//!
//! JSON-based request/reply protocol using Serde's tagged enum
//! for type-safe serialization/deserialization.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, MoveError};
use crate::game::{MoveResult, Role, StateSnapshot, Winner};
use crate::types::PlayerId;

/// Client → Server message
///
/// All requests from client to server. Uses tagged enum with snake_case naming.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Create a new room
    CreateRoom,
    /// Join a room (idempotent per player id)
    JoinRoom { room_id: String, player_id: PlayerId },
    /// Read a room's state
    GetState { room_id: String },
    /// Place a stone
    Move {
        room_id: String,
        player_id: PlayerId,
        x: i64,
        y: i64,
    },
}

/// Server → Client message
///
/// All replies from server to client. Uses tagged enum with snake_case naming.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection successful, connection ID issued
    Connected { connection_id: String },
    /// Room created successfully
    RoomCreated { room_id: String },
    /// Role granted in a room
    Joined { room_id: String, role: Role },
    /// Room state snapshot
    State {
        room_id: String,
        #[serde(flatten)]
        state: StateSnapshot,
    },
    /// Move outcome
    ///
    /// `ok` is false only when the game was already over, in which case
    /// `winner` carries the existing outcome.
    MoveResult {
        ok: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        winner: Option<Winner>,
    },
    /// Error occurred
    Error {
        code: ErrorCode,
        class: ErrorClass,
        message: String,
    },
}

/// Error codes for ServerMessage::Error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Non-existent room id
    RoomNotFound,
    /// Caller does not own the color due to move
    NotYourTurn,
    /// Coordinates off the board
    OutOfBounds,
    /// Cell already holds a stone
    CellOccupied,
    /// Invalid message format
    InvalidMessage,
    /// Server-side failure
    Internal,
}

/// Response class an error maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    NotFound,
    Forbidden,
    BadRequest,
    Internal,
}

impl ErrorCode {
    pub fn class(self) -> ErrorClass {
        match self {
            ErrorCode::RoomNotFound => ErrorClass::NotFound,
            ErrorCode::NotYourTurn => ErrorClass::Forbidden,
            ErrorCode::OutOfBounds | ErrorCode::CellOccupied | ErrorCode::InvalidMessage => {
                ErrorClass::BadRequest
            }
            ErrorCode::Internal => ErrorClass::Internal,
        }
    }
}

impl From<MoveResult> for ServerMessage {
    fn from(result: MoveResult) -> Self {
        match result {
            MoveResult::Placed { outcome } => ServerMessage::MoveResult {
                ok: true,
                winner: outcome.winner(),
            },
            MoveResult::GameOver { outcome } => ServerMessage::MoveResult {
                ok: false,
                winner: outcome.winner(),
            },
        }
    }
}

/// Convert AppError to ServerMessage for client notification
impl From<AppError> for ServerMessage {
    fn from(err: AppError) -> Self {
        let code = match &err {
            AppError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            AppError::Move(MoveError::NotYourTurn) => ErrorCode::NotYourTurn,
            AppError::Move(MoveError::OutOfBounds { .. }) => ErrorCode::OutOfBounds,
            AppError::Move(MoveError::CellOccupied { .. }) => ErrorCode::CellOccupied,
            AppError::Json(_) => ErrorCode::InvalidMessage,
            // Fatal errors are not typically converted (connection closes)
            _ => ErrorCode::Internal,
        };
        let message = match &err {
            AppError::Json(e) => format!("Invalid message format: {}", e),
            _ if code == ErrorCode::Internal => "Internal error".to_string(),
            _ => err.to_string(),
        };
        ServerMessage::Error {
            code,
            class: code.class(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::game::{Match, Outcome};

    #[test]
    fn test_client_message_deserialize() {
        let json = r#"{"type": "move", "room_id": "abcd1234", "player_id": "p1", "x": 3, "y": -1}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::Move { room_id, player_id, x, y } => {
                assert_eq!(room_id, "abcd1234");
                assert_eq!(player_id, PlayerId::from("p1"));
                assert_eq!((x, y), (3, -1));
            }
            _ => panic!("Wrong variant"),
        }

        let json = r#"{"type": "create_room"}"#;
        assert!(matches!(
            serde_json::from_str::<ClientMessage>(json).unwrap(),
            ClientMessage::CreateRoom
        ));
    }

    #[test]
    fn test_coordinate_overflow_is_invalid_message() {
        let json = r#"{"type": "move", "room_id": "abcd1234", "player_id": "p1", "x": 9223372036854775808, "y": 0}"#;
        let err = serde_json::from_str::<ClientMessage>(json).unwrap_err();
        let value = serde_json::to_value(ServerMessage::from(AppError::Json(err))).unwrap();
        assert_eq!(value["code"], "invalid_message");
        assert_eq!(value["class"], "bad_request");
    }

    #[test]
    fn test_unknown_message_rejected() {
        let json = r#"{"type": "resign", "room_id": "abcd1234"}"#;
        assert!(serde_json::from_str::<ClientMessage>(json).is_err());
    }

    #[test]
    fn test_joined_serialize() {
        let msg = ServerMessage::Joined {
            room_id: "abcd1234".to_string(),
            role: Role::Spectator,
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"joined\""));
        assert!(json.contains("\"role\":\"spectator\""));
    }

    #[test]
    fn test_state_serialize() {
        let msg = ServerMessage::State {
            room_id: "abcd1234".to_string(),
            state: Match::with_size(2).view_state(),
        };
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "state",
                "room_id": "abcd1234",
                "board": [[0, 0], [0, 0]],
                "turn": "black",
                "winner": null,
                "finished": false
            })
        );
    }

    #[test]
    fn test_move_result_serialize() {
        let in_progress = ServerMessage::from(MoveResult::Placed { outcome: Outcome::InProgress });
        assert_eq!(
            serde_json::to_value(&in_progress).unwrap(),
            serde_json::json!({"type": "move_result", "ok": true})
        );

        let won = ServerMessage::from(MoveResult::Placed { outcome: Outcome::Won(Color::White) });
        assert_eq!(
            serde_json::to_value(&won).unwrap(),
            serde_json::json!({"type": "move_result", "ok": true, "winner": "white"})
        );

        let over = ServerMessage::from(MoveResult::GameOver { outcome: Outcome::Draw });
        assert_eq!(
            serde_json::to_value(&over).unwrap(),
            serde_json::json!({"type": "move_result", "ok": false, "winner": "draw"})
        );
    }

    #[test]
    fn test_error_mapping() {
        let cases = [
            (AppError::RoomNotFound("x".to_string()), "room_not_found", "not_found"),
            (MoveError::NotYourTurn.into(), "not_your_turn", "forbidden"),
            (
                MoveError::OutOfBounds { x: 15, y: 0, size: 15 }.into(),
                "out_of_bounds",
                "bad_request",
            ),
            (MoveError::CellOccupied { x: 1, y: 1 }.into(), "cell_occupied", "bad_request"),
            (AppError::ChannelSend, "internal", "internal"),
        ];
        for (err, code, class) in cases {
            let value = serde_json::to_value(ServerMessage::from(err)).unwrap();
            assert_eq!(value["type"], "error");
            assert_eq!(value["code"], code);
            assert_eq!(value["class"], class);
        }
    }
}
