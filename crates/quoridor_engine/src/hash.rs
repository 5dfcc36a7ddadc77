//! Zobrist position hashing
//!
//! Every hashable feature (a pawn of a given color on a given square, a used
//! wall segment, a player's remaining wall count, Black to move) owns a random
//! 64-bit key; a position hashes to
//! the XOR of the keys of its features. XOR is order independent, so equal
//! positions hash equal however they were reached, and a move updates the hash
//! by toggling only the keys it touches.
//!
//! Keys come from a seeded [`StdRng`], so a given board dimension always gets
//! the same table within one build.

use crate::board::{BoardModel, Segment, Wall};
use crate::constants::ZOBRIST_SEED;
use crate::types::{Color, Orientation, PlayerState, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random keys for one board dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    dimension: u8,
    pawns: [Vec<u64>; 2],
    horizontal: Vec<u64>,
    vertical: Vec<u64>,
    wall_counts: [Vec<u64>; 2],
    black_to_move: u64,
}

impl ZobristKeys {
    pub fn new(dimension: u8) -> Self {
        let n = dimension as usize;
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED ^ dimension as u64);
        let mut table = |len: usize| -> Vec<u64> { (0..len).map(|_| rng.random()).collect() };

        let pawns = [table(n * n), table(n * n)];
        let horizontal = table(n.saturating_sub(1) * n);
        let vertical = table(n * n.saturating_sub(1));
        let counts = usize::from(u8::MAX) + 1;
        let wall_counts = [table(counts), table(counts)];
        let black_to_move = rng.random();

        Self {
            dimension,
            pawns,
            horizontal,
            vertical,
            wall_counts,
            black_to_move,
        }
    }

    #[inline]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    #[inline]
    pub fn pawn(&self, color: Color, square: Square) -> u64 {
        let n = self.dimension as usize;
        self.pawns[color.index()][square.row as usize * n + square.col as usize]
    }

    #[inline]
    pub fn segment(&self, segment: Segment) -> u64 {
        let n = self.dimension as usize;
        let (row, col) = (segment.row as usize, segment.col as usize);
        match segment.orientation {
            Orientation::Horizontal => self.horizontal[row * n + col],
            Orientation::Vertical => self.vertical[row * (n - 1) + col],
        }
    }

    /// Combined key of both segments of a wall
    #[inline]
    pub fn wall(&self, wall: Wall) -> u64 {
        let [a, b] = wall.segments();
        self.segment(a) ^ self.segment(b)
    }

    /// Key for `color` holding `count` wall tokens
    #[inline]
    pub fn wall_count(&self, color: Color, count: u8) -> u64 {
        self.wall_counts[color.index()][usize::from(count)]
    }

    #[inline]
    pub fn side_to_move(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }

    /// Hash a position from scratch
    pub fn compute(&self, board: &BoardModel, players: &[PlayerState; 2], side: Color) -> u64 {
        let mut hash = self.side_to_move(side);
        for player in players {
            hash ^= self.pawn(player.color, player.position);
            hash ^= self.wall_count(player.color, player.walls_remaining);
        }
        for orientation in Orientation::ALL {
            for segment in board.segments(orientation) {
                hash ^= self.segment(segment);
            }
        }
        hash
    }
}
