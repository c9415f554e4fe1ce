//! Board grid and five-in-a-row detection
//!
//! The board is a square grid stored row-major (`y * size + x`).
//! Cells only ever go from empty to occupied.

use serde::{Deserialize, Serialize};

/// Default side length of the board
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Number of contiguous stones needed to win
pub const WIN_LENGTH: usize = 5;

/// Horizontal, vertical, diagonal, anti-diagonal
const AXES: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stone color, also used for turn and winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Color),
}

impl Cell {
    /// Wire encoding: 0 = empty, 1 = black, 2 = white
    pub fn to_wire(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Stone(Color::Black) => 1,
            Cell::Stone(Color::White) => 2,
        }
    }
}

/// Square N×N grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Number of non-empty cells, so fullness is O(1)
    occupied: usize,
}

impl Board {
    /// Create an empty board of the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            occupied: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether signed coordinates fall inside `[0, size)`
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Get the cell at (x, y), or `None` if out of bounds
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[y as usize * self.size + x as usize])
        } else {
            None
        }
    }

    /// Put a stone on an empty in-bounds cell
    ///
    /// Returns false (and leaves the board untouched) if the cell is out of
    /// bounds or already occupied.
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        let cell = &mut self.cells[y * self.size + x];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = Cell::Stone(color);
        self.occupied += 1;
        true
    }

    /// Check if every cell holds a stone
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.occupied
    }

    /// Check whether the stone at (x, y) is part of a line of at least
    /// `WIN_LENGTH` stones of `color` along any axis.
    ///
    /// Only the four lines through (x, y) are scanned, so the cost is
    /// bounded by the board side, not its area.
    pub fn completes_line(&self, x: usize, y: usize, color: Color) -> bool {
        let (x, y) = (x as i64, y as i64);
        AXES.iter().any(|&(dx, dy)| {
            let count = 1 + self.run(x, y, dx, dy, color) + self.run(x, y, -dx, -dy, color);
            count >= WIN_LENGTH
        })
    }

    /// Count contiguous `color` stones from (x, y) exclusive, stepping by (dx, dy)
    fn run(&self, x: i64, y: i64, dx: i64, dy: i64, color: Color) -> usize {
        let mut count = 0;
        let (mut cx, mut cy) = (x + dx, y + dy);
        while self.get(cx, cy) == Some(Cell::Stone(color)) {
            count += 1;
            cx += dx;
            cy += dy;
        }
        count
    }

    /// Row-major wire projection: `rows[y][x]` in {0, 1, 2}
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|cell| cell.to_wire()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}
