//! # Core Types - Colors, Squares & Player Records
//!
//! ## Coordinates
//!
//! Squares are addressed by `(row, col)` with both components in
//! `0..dimension`. Row 0 is White's baseline, row `dimension - 1` is Black's.
//! Coordinates are stored as `u8`: the largest board is 25×25, so a square
//! costs two bytes and a whole [`crate::moves::Move`] stays register-sized,
//! which matters when the search shuffles hundreds of candidate moves per node.
//!
//! ## Display Notation
//!
//! Squares print as a column letter followed by a 1-based row number
//! (`(0, 4)` prints as `e1`), the same way most Quoridor literature annotates
//! games. Squares whose column has no letter (col >= 26, only reachable
//! through malformed moves) print as raw `(row, col)`. The notation is used
//! for log and error output only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic score, higher is better for the evaluated side
pub type Score = i32;

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Stable array index (White = 0, Black = 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Direction a wall runs along the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs along a row boundary, blocking vertical movement
    Horizontal,
    /// Runs along a column boundary, blocking horizontal movement
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// A pawn square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Apply a signed step, returning `None` when it leaves the `u8` range
    ///
    /// The result still needs a bounds check against the board dimension.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Square { row, col })
    }

    /// Manhattan distance between two squares
    #[inline]
    pub fn manhattan(self, other: Square) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// Whether `other` is exactly one orthogonal step away
    #[inline]
    pub fn is_adjacent(self, other: Square) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns past 'z' have no letter; fall back to raw coordinates
        match self.col {
            col @ 0..=25 => write!(f, "{}{}", (b'a' + col) as char, self.row as u32 + 1),
            col => write!(f, "({}, {})", self.row, col),
        }
    }
}

/// Per-player bookkeeping owned by [`crate::game::GameState`]
///
/// `goal_row` is fixed at construction. `walls_remaining` is unsigned, so it
/// can never go negative; the game rejects wall placements at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub color: Color,
    pub position: Square,
    pub walls_remaining: u8,
    pub goal_row: u8,
}

impl PlayerState {
    /// Player standing on the centre of its baseline
    pub fn at_start(color: Color, dimension: u8, walls: u8) -> Self {
        let centre = dimension / 2;
        let (start_row, goal_row) = match color {
            Color::White => (0, dimension - 1),
            Color::Black => (dimension - 1, 0),
        };
        Self {
            color,
            position: Square::new(start_row, centre),
            walls_remaining: walls,
            goal_row,
        }
    }

    #[inline]
    pub fn has_reached_goal(&self) -> bool {
        self.position.row == self.goal_row
    }
}
