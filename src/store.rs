//! Room store
//!
//! Process-wide registry from room id to room actor handle. The lock here
//! only guards the map itself; gameplay is serialized inside each room actor.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::board::DEFAULT_BOARD_SIZE;
use crate::error::AppError;
use crate::room::{RoomActor, RoomHandle};
use crate::types::RoomId;

/// Registry of live rooms
///
/// Entries are created once and never replaced or removed; rooms live as
/// long as the store.
pub struct RoomStore {
    /// All rooms: RoomId -> RoomHandle
    rooms: RwLock<HashMap<RoomId, RoomHandle>>,
    /// Side length of every board created by this store
    board_size: usize,
}

impl RoomStore {
    /// Create an empty store whose rooms use `board_size`×`board_size` boards
    pub fn new(board_size: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            board_size,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Create a room with an empty match and spawn its actor
    ///
    /// Must be called from within a tokio runtime.
    pub async fn create_room(&self) -> RoomId {
        let mut rooms = self.rooms.write().await;

        // Generate unique room id
        let id = loop {
            let id = RoomId::generate();
            if !rooms.contains_key(&id) {
                break id;
            }
            debug!("Room id {} already taken, drawing again", id);
        };

        let (actor, handle) = RoomActor::new(id, self.board_size());
        tokio::spawn(actor.run());
        let id = handle.id().clone();
        rooms.insert(id.clone(), handle);

        info!(
            "Room {} created with {}x{} board (total rooms: {})",
            id,
            self.board_size(),
            self.board_size(),
            rooms.len()
        );
        id
    }

    /// Look up a room by id
    pub async fn get(&self, id: &RoomId) -> Result<RoomHandle, AppError> {
        self.rooms
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::RoomNotFound(id.to_string()))
    }

    /// Number of rooms
    pub async fn len(&self) -> usize {
        self.rooms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.read().await.is_empty()
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MoveResult, Outcome, Role};
    use crate::types::PlayerId;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = RoomStore::default();
        assert!(store.is_empty().await);

        let id = store.create_room().await;
        assert_eq!(store.len().await, 1);

        let room = store.get(&id).await.unwrap();
        assert_eq!(room.id(), &id);

        let state = room.state().await.unwrap();
        assert_eq!(state.board.len(), DEFAULT_BOARD_SIZE);
        assert!(!state.finished);
    }

    #[tokio::test]
    async fn test_unknown_room() {
        let store = RoomStore::default();
        store.create_room().await;

        let err = store.get(&RoomId::from("missing".to_string())).await.unwrap_err();
        assert!(matches!(err, AppError::RoomNotFound(id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = RoomStore::default();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(ids.insert(store.create_room().await));
        }
        assert_eq!(store.len().await, 100);
    }

    #[tokio::test]
    async fn test_board_size_applies_to_new_rooms() {
        let store = RoomStore::new(9);
        assert_eq!(store.board_size(), 9);
        let id = store.create_room().await;
        let state = store.get(&id).await.unwrap().state().await.unwrap();
        assert_eq!(state.board.len(), 9);
        assert!(state.board.iter().all(|row| row.len() == 9));
    }

    #[tokio::test]
    async fn test_rooms_are_independent() {
        let store = RoomStore::default();
        let first = store.get(&store.create_room().await).await.unwrap();
        let second = store.get(&store.create_room().await).await.unwrap();

        let alice = PlayerId::from("alice");
        assert_eq!(first.join(alice.clone()).await.unwrap(), Role::Black);
        assert_eq!(second.join(alice.clone()).await.unwrap(), Role::Black);
        first.join(PlayerId::from("bob")).await.unwrap();

        let result = first.make_move(alice, 7, 7).await.unwrap();
        assert_eq!(result, MoveResult::Placed { outcome: Outcome::InProgress });

        let untouched = second.state().await.unwrap();
        assert!(untouched.board.iter().flatten().all(|&c| c == 0));
    }
}
