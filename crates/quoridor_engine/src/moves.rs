//! Move representation
//!
//! A [`Move`] is a closed variant of the two things a player can do. Each
//! variant carries everything needed to apply and to reverse it:
//! - a translation stores both origin and destination, so undo restores the
//!   exact prior square without looking anywhere else
//! - a wall placement needs nothing extra, clearing the same wall and giving
//!   the token back is a complete inverse

use crate::board::Wall;
use crate::types::{Color, Orientation, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Pawn step to an orthogonally adjacent square
    Translation {
        from: Square,
        to: Square,
        color: Color,
    },
    /// Two-segment wall anchored at corner `(row, col)`
    WallPlacement {
        row: u8,
        col: u8,
        orientation: Orientation,
        color: Color,
    },
}

impl Move {
    pub fn translation(color: Color, from: Square, to: Square) -> Self {
        Move::Translation { from, to, color }
    }

    pub fn wall(color: Color, row: u8, col: u8, orientation: Orientation) -> Self {
        Move::WallPlacement {
            row,
            col,
            orientation,
            color,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        match *self {
            Move::Translation { color, .. } | Move::WallPlacement { color, .. } => color,
        }
    }

    #[inline]
    pub fn is_translation(&self) -> bool {
        matches!(self, Move::Translation { .. })
    }

    /// The wall this move places, if any
    #[inline]
    pub fn as_wall(&self) -> Option<Wall> {
        match *self {
            Move::WallPlacement {
                row,
                col,
                orientation,
                ..
            } => Some(Wall::new(row, col, orientation)),
            Move::Translation { .. } => None,
        }
    }

    /// Caller-facing description: (color, optional orientation, target row, target column)
    pub fn target(&self) -> (Color, Option<Orientation>, u8, u8) {
        match *self {
            Move::Translation { to, color, .. } => (color, None, to.row, to.col),
            Move::WallPlacement {
                row,
                col,
                orientation,
                color,
            } => (color, Some(orientation), row, col),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Translation { from, to, color } => write!(f, "{color} {from}-{to}"),
            Move::WallPlacement {
                row,
                col,
                orientation,
                color,
            } => {
                let suffix = match orientation {
                    Orientation::Horizontal => 'h',
                    Orientation::Vertical => 'v',
                };
                write!(f, "{color} {}{suffix}", Square::new(row, col))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_describes_move() {
        let step = Move::translation(Color::White, Square::new(0, 4), Square::new(1, 4));
        assert_eq!(step.target(), (Color::White, None, 1, 4));
        assert!(step.is_translation());
        assert_eq!(step.as_wall(), None);

        let wall = Move::wall(Color::Black, 3, 2, Orientation::Vertical);
        assert_eq!(
            wall.target(),
            (Color::Black, Some(Orientation::Vertical), 3, 2)
        );
        assert_eq!(wall.color(), Color::Black);
        assert_eq!(wall.as_wall(), Some(Wall::new(3, 2, Orientation::Vertical)));
    }

    #[test]
    fn test_display() {
        let step = Move::translation(Color::White, Square::new(0, 4), Square::new(1, 4));
        assert_eq!(step.to_string(), "white e1-e2");
        let wall = Move::wall(Color::Black, 3, 2, Orientation::Horizontal);
        assert_eq!(wall.to_string(), "black c4h");
    }
}
