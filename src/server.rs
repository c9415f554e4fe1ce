//! GameServer request dispatch
//!
//! Exposes the four room operations (create, join, state, move) on top of
//! the room store and turns a decoded client message into exactly one reply.
//! Cheap to clone; every connection handler holds its own copy.

use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;
use crate::game::{MoveResult, Role, StateSnapshot};
use crate::message::{ClientMessage, ServerMessage};
use crate::store::RoomStore;
use crate::types::{PlayerId, RoomId};

/// Shared front door to all rooms
#[derive(Clone)]
pub struct GameServer {
    store: Arc<RoomStore>,
}

impl GameServer {
    /// Create a server with an empty store of `board_size` boards
    pub fn new(board_size: usize) -> Self {
        Self::with_store(Arc::new(RoomStore::new(board_size)))
    }

    pub fn with_store(store: Arc<RoomStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    /// Create a room with an empty match
    pub async fn create_room(&self) -> RoomId {
        self.store.create_room().await
    }

    /// Bind `player` to a slot in the room, or make them a spectator
    pub async fn join_room(&self, room_id: &RoomId, player: PlayerId) -> Result<Role, AppError> {
        self.store.get(room_id).await?.join(player).await
    }

    /// Snapshot of the room's match
    pub async fn get_state(&self, room_id: &RoomId) -> Result<StateSnapshot, AppError> {
        self.store.get(room_id).await?.state().await
    }

    /// Attempt a move in the room
    pub async fn make_move(
        &self,
        room_id: &RoomId,
        player: PlayerId,
        x: i64,
        y: i64,
    ) -> Result<MoveResult, AppError> {
        self.store.get(room_id).await?.make_move(player, x, y).await
    }

    /// Process a single client message
    ///
    /// Failures are folded into an error reply; nothing here is fatal to
    /// the connection.
    pub async fn handle(&self, msg: ClientMessage) -> ServerMessage {
        match self.dispatch(msg).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!("Request failed: {}", e);
                e.into()
            }
        }
    }

    async fn dispatch(&self, msg: ClientMessage) -> Result<ServerMessage, AppError> {
        let reply = match msg {
            ClientMessage::CreateRoom => {
                let room_id = self.create_room().await;
                ServerMessage::RoomCreated {
                    room_id: room_id.to_string(),
                }
            }
            ClientMessage::JoinRoom { room_id, player_id } => {
                let room_id = RoomId::from(room_id);
                let role = self.join_room(&room_id, player_id).await?;
                ServerMessage::Joined {
                    room_id: room_id.to_string(),
                    role,
                }
            }
            ClientMessage::GetState { room_id } => {
                let room_id = RoomId::from(room_id);
                let state = self.get_state(&room_id).await?;
                ServerMessage::State {
                    room_id: room_id.to_string(),
                    state,
                }
            }
            ClientMessage::Move {
                room_id,
                player_id,
                x,
                y,
            } => {
                let room_id = RoomId::from(room_id);
                ServerMessage::from(self.make_move(&room_id, player_id, x, y).await?)
            }
        };
        Ok(reply)
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::with_store(Arc::new(RoomStore::default()))
    }
}
