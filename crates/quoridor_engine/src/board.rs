//! Board model: wall-segment bookkeeping and movement-graph reachability
//!
//! Geometry, for a board of dimension `N`:
//! - horizontal segment `(r, c)`, `r < N-1`, `c < N`: separates `(r, c)` from `(r+1, c)`
//! - vertical segment `(r, c)`, `r < N`, `c < N-1`: separates `(r, c)` from `(r, c+1)`
//! - corner `(r, c)`, `r, c < N-1`: the crossing point inside the 2×2 block
//!   whose lower-left square is `(r, c)`
//!
//! A wall is anchored at a corner and always covers two segments plus that
//! corner, so a used segment is adjacent to exactly one used corner and two
//! walls can never cross.
//!
//! Reachability runs over the movement graph only. Pawns are not obstacles:
//! the rules let walls, and nothing else, block a path.

use super::bitset::BitGrid;
use super::constants::*;
use super::error::{EngineError, EngineResult, InvalidMove};
use super::types::*;
use std::collections::VecDeque;

const UNVISITED: u16 = u16::MAX;

/// One unit-length wall segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Segment {
    /// The segment separating two orthogonally adjacent squares
    pub fn between(a: Square, b: Square) -> Option<Segment> {
        if !a.is_adjacent(b) {
            return None;
        }
        let orientation = if a.col == b.col {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        Some(Segment {
            row: a.row.min(b.row),
            col: a.col.min(b.col),
            orientation,
        })
    }
}

/// A two-segment wall anchored at a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub row: u8,
    pub col: u8,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// The two segments this wall occupies
    pub fn segments(&self) -> [Segment; 2] {
        let first = Segment {
            row: self.row,
            col: self.col,
            orientation: self.orientation,
        };
        let second = match self.orientation {
            Orientation::Horizontal => Segment {
                col: self.col + 1,
                ..first
            },
            Orientation::Vertical => Segment {
                row: self.row + 1,
                ..first
            },
        };
        [first, second]
    }

    /// Whether this wall would cut any of the given path segments
    pub fn cuts(&self, path: &[Segment]) -> bool {
        let [a, b] = self.segments();
        path.iter().any(|s| *s == a || *s == b)
    }
}

/// Grid bookkeeping for a square board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    dimension: u8,
    horizontal: BitGrid,
    vertical: BitGrid,
    corners: BitGrid,
}

impl BoardModel {
    /// Check the odd-dimension rule
    pub fn validate_dimension(dimension: u8) -> EngineResult<()> {
        if dimension % 2 == 1 && (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            Ok(())
        } else {
            Err(EngineError::InvalidDimension {
                dimension,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            })
        }
    }

    /// Create an empty board
    pub fn new(dimension: u8) -> EngineResult<Self> {
        Self::validate_dimension(dimension)?;
        let n = dimension as usize;
        Ok(Self {
            dimension,
            horizontal: BitGrid::new(n - 1, n),
            vertical: BitGrid::new(n, n - 1),
            corners: BitGrid::new(n - 1, n - 1),
        })
    }

    #[inline]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    #[inline]
    pub fn is_valid_square(&self, row: u8, col: u8) -> bool {
        row < self.dimension && col < self.dimension
    }

    /// Whether `(row, col)` names a corner a wall can be anchored at
    #[inline]
    pub fn is_wall_anchor(&self, row: u8, col: u8) -> bool {
        row < self.dimension - 1 && col < self.dimension - 1
    }

    #[inline]
    pub fn has_wall_segment(&self, row: u8, col: u8, orientation: Orientation) -> bool {
        let grid = match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        };
        grid.contains(row as usize, col as usize)
    }

    #[inline]
    pub fn has_segment(&self, segment: Segment) -> bool {
        self.has_wall_segment(segment.row, segment.col, segment.orientation)
    }

    #[inline]
    pub fn has_corner(&self, row: u8, col: u8) -> bool {
        self.corners.contains(row as usize, col as usize)
    }

    /// Number of walls on the board
    pub fn wall_count(&self) -> u32 {
        self.corners.count_ones()
    }

    /// Used segments of one orientation, row-major
    pub fn segments(&self, orientation: Orientation) -> impl Iterator<Item = Segment> + '_ {
        let grid = match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        };
        grid.iter_ones().map(move |(row, col)| Segment {
            row: row as u8,
            col: col as u8,
            orientation,
        })
    }

    /// Geometry-only legality: anchor on the board, both segments and the corner free
    pub fn check_wall_geometry(&self, wall: Wall) -> Result<(), InvalidMove> {
        if !self.is_wall_anchor(wall.row, wall.col) {
            return Err(InvalidMove::OutOfBounds {
                row: wall.row,
                col: wall.col,
            });
        }
        for segment in wall.segments() {
            if self.has_segment(segment) {
                return Err(InvalidMove::SegmentOccupied {
                    row: segment.row,
                    col: segment.col,
                });
            }
        }
        if self.has_corner(wall.row, wall.col) {
            return Err(InvalidMove::WallCrossing {
                row: wall.row,
                col: wall.col,
            });
        }
        Ok(())
    }

    /// Mark both segments and the corner of a wall, atomically
    ///
    /// Only geometry is checked here; path connectivity is the game's concern.
    pub fn place_wall(&mut self, wall: Wall) -> Result<(), InvalidMove> {
        self.check_wall_geometry(wall)?;
        for segment in wall.segments() {
            self.grid_mut(segment.orientation)
                .insert(segment.row as usize, segment.col as usize);
        }
        self.corners.insert(wall.row as usize, wall.col as usize);
        Ok(())
    }

    /// Clear a wall previously placed with [`BoardModel::place_wall`]
    pub fn remove_wall(&mut self, wall: Wall) -> EngineResult<()> {
        let present = self.is_wall_anchor(wall.row, wall.col)
            && self.has_corner(wall.row, wall.col)
            && wall.segments().iter().all(|s| self.has_segment(*s));
        if !present {
            return Err(EngineError::invariant(format!(
                "no {:?} wall anchored at ({}, {}) to remove",
                wall.orientation, wall.row, wall.col
            )));
        }
        for segment in wall.segments() {
            self.grid_mut(segment.orientation)
                .remove(segment.row as usize, segment.col as usize);
        }
        self.corners.remove(wall.row as usize, wall.col as usize);
        Ok(())
    }

    /// Remove every wall
    pub fn clear(&mut self) {
        self.horizontal.clear();
        self.vertical.clear();
        self.corners.clear();
    }

    fn grid_mut(&mut self, orientation: Orientation) -> &mut BitGrid {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Whether a wall segment separates two adjacent squares
    pub fn is_blocked(&self, from: Square, to: Square) -> bool {
        Segment::between(from, to).is_some_and(|s| self.has_segment(s))
    }

    fn is_blocked_with(&self, from: Square, to: Square, extra: Option<Wall>) -> bool {
        match Segment::between(from, to) {
            Some(segment) => {
                self.has_segment(segment)
                    || extra.is_some_and(|w| w.segments().contains(&segment))
            }
            None => true,
        }
    }

    /// Up to four orthogonal neighbours not cut off by a wall segment
    pub fn legal_neighbors(&self, square: Square) -> impl Iterator<Item = Square> + '_ {
        self.neighbors_with(square, None)
    }

    fn neighbors_with(
        &self,
        square: Square,
        extra: Option<Wall>,
    ) -> impl Iterator<Item = Square> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(d_row, d_col)| {
            let next = square.offset(d_row, d_col)?;
            (self.is_valid_square(next.row, next.col)
                && !self.is_blocked_with(square, next, extra))
            .then_some(next)
        })
    }

    /// Whether any square on `goal_row` is reachable from `start`
    pub fn reaches_goal(&self, start: Square, goal_row: u8) -> bool {
        self.bfs(start, goal_row, None).is_some()
    }

    /// As [`BoardModel::reaches_goal`], with `wall` treated as already placed
    pub fn reaches_goal_with_wall(&self, start: Square, goal_row: u8, wall: Wall) -> bool {
        self.bfs(start, goal_row, Some(wall)).is_some()
    }

    /// Length in steps of the shortest path to `goal_row`, `None` when cut off
    pub fn distance_to_goal(&self, start: Square, goal_row: u8) -> Option<u32> {
        self.bfs(start, goal_row, None).map(|hit| hit.distance)
    }

    /// Squares of one shortest path to `goal_row`, `start` first
    pub fn shortest_path(&self, start: Square, goal_row: u8) -> Option<Vec<Square>> {
        let hit = self.bfs(start, goal_row, None)?;
        let n = self.dimension as usize;
        let mut path = Vec::with_capacity(hit.distance as usize + 1);
        let mut cursor = hit.goal.row as usize * n + hit.goal.col as usize;
        loop {
            path.push(Square::new((cursor / n) as u8, (cursor % n) as u8));
            let parent = hit.parent[cursor] as usize;
            if parent == cursor {
                break;
            }
            cursor = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Segments crossed by a path, in walking order
    pub fn path_segments(path: &[Square]) -> Vec<Segment> {
        path.windows(2)
            .filter_map(|pair| Segment::between(pair[0], pair[1]))
            .collect()
    }

    fn bfs(&self, start: Square, goal_row: u8, extra: Option<Wall>) -> Option<BfsHit> {
        if !self.is_valid_square(start.row, start.col) {
            return None;
        }
        let n = self.dimension as usize;
        let index = |s: Square| s.row as usize * n + s.col as usize;

        let mut parent = vec![UNVISITED; n * n];
        let mut queue = VecDeque::with_capacity(n * n);
        parent[index(start)] = index(start) as u16;
        queue.push_back((start, 0u32));

        while let Some((square, distance)) = queue.pop_front() {
            if square.row == goal_row {
                return Some(BfsHit {
                    goal: square,
                    distance,
                    parent,
                });
            }
            for next in self.neighbors_with(square, extra) {
                let i = index(next);
                if parent[i] == UNVISITED {
                    parent[i] = index(square) as u16;
                    queue.push_back((next, distance + 1));
                }
            }
        }
        None
    }
}

struct BfsHit {
    goal: Square,
    distance: u32,
    parent: Vec<u16>,
}
