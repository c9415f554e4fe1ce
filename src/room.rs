//! Room actor implementation
//!
//! Each room runs as its own actor task that exclusively owns one `Match`.
//! Commands arrive over an mpsc channel and are processed one at a time,
//! so every join or move on a room is atomic with respect to the others.
//! Rooms never share a lock.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::error::{AppError, MoveError};
use crate::game::{Match, MoveResult, Outcome, Role, StateSnapshot};
use crate::types::{PlayerId, RoomId};

/// Channel buffer size for room commands
const ROOM_CHANNEL_BUFFER_SIZE: usize = 64;

/// Commands sent from request handlers to a room actor
#[derive(Debug)]
pub enum RoomCommand {
    /// Bind a player to a slot
    Join {
        player: PlayerId,
        reply: oneshot::Sender<Role>,
    },
    /// Read the current state
    GetState {
        reply: oneshot::Sender<StateSnapshot>,
    },
    /// Attempt a move
    Move {
        player: PlayerId,
        x: i64,
        y: i64,
        reply: oneshot::Sender<Result<MoveResult, MoveError>>,
    },
}

/// The actor owning one room's match
pub struct RoomActor {
    /// Room id (for logging)
    id: RoomId,
    /// The match state, only touched from `run`
    game: Match,
    /// Command receiver channel
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Create an actor for a fresh match and the handle that talks to it
    pub fn new(id: RoomId, board_size: usize) -> (Self, RoomHandle) {
        let (sender, receiver) = mpsc::channel(ROOM_CHANNEL_BUFFER_SIZE);
        let actor = Self {
            id: id.clone(),
            game: Match::with_size(board_size),
            receiver,
        };
        (actor, RoomHandle { id, sender })
    }

    /// Run the room event loop
    ///
    /// Processes commands until every handle has been dropped.
    pub async fn run(mut self) {
        debug!("Room {} actor started", self.id);

        while let Some(cmd) = self.receiver.recv().await {
            self.handle_command(cmd);
        }

        debug!("Room {} actor shutting down", self.id);
    }

    /// Process a single command
    ///
    /// A dropped reply receiver means the requester went away; the state
    /// change (if any) still stands.
    fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Join { player, reply } => {
                let role = self.handle_join(player);
                let _ = reply.send(role);
            }
            RoomCommand::GetState { reply } => {
                let _ = reply.send(self.game.view_state());
            }
            RoomCommand::Move { player, x, y, reply } => {
                let result = self.handle_move(player, x, y);
                let _ = reply.send(result);
            }
        }
    }

    fn handle_join(&mut self, player: PlayerId) -> Role {
        let role = self.game.join(&player);
        info!("Player '{}' joined room {} as {:?}", player, self.id, role);
        role
    }

    fn handle_move(&mut self, player: PlayerId, x: i64, y: i64) -> Result<MoveResult, MoveError> {
        let turn = self.game.turn();
        let result = self.game.make_move(&player, x, y);

        match &result {
            Ok(MoveResult::Placed { outcome }) => {
                debug!(
                    "Room {}: {} played ({}, {}), {} stones on board",
                    self.id,
                    turn,
                    x,
                    y,
                    self.game.board().stone_count()
                );
                match outcome {
                    Outcome::Won(color) => info!("Room {}: {} wins", self.id, color),
                    Outcome::Draw => info!("Room {}: board full, draw", self.id),
                    Outcome::InProgress => {}
                }
            }
            Ok(MoveResult::GameOver { .. }) => {
                debug!("Room {}: move by '{}' after game over", self.id, player);
            }
            Err(e) => {
                debug!("Room {}: rejected move by '{}': {}", self.id, player, e);
            }
        }

        result
    }
}

/// Cloneable request side of a room actor
#[derive(Debug, Clone)]
pub struct RoomHandle {
    id: RoomId,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    pub(crate) fn id(&self) -> &RoomId {
        &self.id
    }

    /// Join the room, returning the granted role
    pub async fn join(&self, player: PlayerId) -> Result<Role, AppError> {
        let (reply, rx) = oneshot::channel();
        self.request(RoomCommand::Join { player, reply }, rx).await
    }

    /// Get a snapshot of the room's match
    pub async fn state(&self) -> Result<StateSnapshot, AppError> {
        let (reply, rx) = oneshot::channel();
        self.request(RoomCommand::GetState { reply }, rx).await
    }

    /// Attempt a move at (x, y)
    pub async fn make_move(&self, player: PlayerId, x: i64, y: i64) -> Result<MoveResult, AppError> {
        let (reply, rx) = oneshot::channel();
        let result = self
            .request(RoomCommand::Move { player, x, y, reply }, rx)
            .await?;
        Ok(result?)
    }

    /// Send a command and wait for its reply
    async fn request<T>(&self, cmd: RoomCommand, rx: oneshot::Receiver<T>) -> Result<T, AppError> {
        self.sender
            .send(cmd)
            .await
            .map_err(|_| AppError::ChannelSend)?;
        rx.await.map_err(|_| AppError::ChannelSend)
    }
}
