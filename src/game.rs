//! Match state machine
//!
//! One `Match` per room: the board, whose turn it is, the two player
//! slots and the outcome. All rule enforcement lives here; callers only
//! see roles, move results and read-only snapshots.

use serde::Serialize;

use crate::board::{Board, Color, DEFAULT_BOARD_SIZE};
use crate::error::MoveError;
use crate::types::PlayerId;

/// Role granted by joining a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Black,
    White,
    Spectator,
}

/// Match outcome
///
/// Once it leaves `InProgress` it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Color),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Wire form of a terminal outcome (`None` while in progress)
    pub fn winner(self) -> Option<Winner> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(Color::Black) => Some(Winner::Black),
            Outcome::Won(Color::White) => Some(Winner::White),
            Outcome::Draw => Some(Winner::Draw),
        }
    }
}

/// Terminal outcome as reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Result of a move that passed validation, or hit a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Stone placed; outcome after the move
    Placed { outcome: Outcome },
    /// Match was already over; nothing changed
    GameOver { outcome: Outcome },
}

/// Read-only projection of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// `board[y][x]` in {0 = empty, 1 = black, 2 = white}
    pub board: Vec<Vec<u8>>,
    pub turn: Color,
    pub winner: Option<Winner>,
    pub finished: bool,
}

/// One game between a Black slot and a White slot
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    turn: Color,
    black: Option<PlayerId>,
    white: Option<PlayerId>,
    outcome: Outcome,
}

impl Match {
    /// Create an empty match on the default board size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty match on a `size`×`size` board
    pub fn with_size(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: Color::Black,
            black: None,
            white: None,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Identity bound to the slot of `color`, if any
    pub fn player(&self, color: Color) -> Option<&PlayerId> {
        match color {
            Color::Black => self.black.as_ref(),
            Color::White => self.white.as_ref(),
        }
    }

    /// Assign `player` to a slot
    ///
    /// Rejoining returns the slot already held. A newcomer takes Black,
    /// then White; once both are bound everyone else spectates.
    pub fn join(&mut self, player: &PlayerId) -> Role {
        if self.black.as_ref() == Some(player) {
            return Role::Black;
        }
        if self.white.as_ref() == Some(player) {
            return Role::White;
        }
        if self.black.is_none() {
            self.black = Some(player.clone());
            return Role::Black;
        }
        if self.white.is_none() {
            self.white = Some(player.clone());
            return Role::White;
        }
        Role::Spectator
    }

    pub fn view_state(&self) -> StateSnapshot {
        StateSnapshot {
            board: self.board.to_rows(),
            turn: self.turn,
            winner: self.outcome.winner(),
            finished: self.outcome.is_terminal(),
        }
    }

    /// Attempt to place the mover's stone at (x, y)
    ///
    /// Checks run in order: finished match, turn ownership, bounds,
    /// occupancy. Any failure leaves the match untouched.
    pub fn make_move(&mut self, player: &PlayerId, x: i64, y: i64) -> Result<MoveResult, MoveError> {
        if self.outcome.is_terminal() {
            return Ok(MoveResult::GameOver {
                outcome: self.outcome,
            });
        }

        let color = self.turn;
        if self.player(color) != Some(player) {
            return Err(MoveError::NotYourTurn);
        }

        if !self.board.contains(x, y) {
            let size = self.board.size();
            return Err(MoveError::OutOfBounds { x, y, size });
        }
        let (x, y) = (x as usize, y as usize);
        if !self.board.place(x, y, color) {
            return Err(MoveError::CellOccupied { x, y });
        }

        if self.board.completes_line(x, y, color) {
            self.outcome = Outcome::Won(color);
        } else if self.board.is_full() {
            self.outcome = Outcome::Draw;
        } else {
            self.turn = color.opponent();
        }

        Ok(MoveResult::Placed {
            outcome: self.outcome,
        })
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
