//! # BitGrid - Packed Boolean Grids for Wall Bookkeeping
//!
//! The board keeps three boolean grids: horizontal wall segments, vertical wall
//! segments and corner crossings. On a 9×9 board the segment grids hold 72 cells
//! each, which no longer fits one `u64`, so a grid is a row-major run of 64-bit
//! words.
//!
//! Common operations:
//! - **Insert**: `words[i / 64] |= 1 << (i % 64)` (O(1))
//! - **Remove**: `words[i / 64] &= !(1 << (i % 64))` (O(1))
//! - **Contains**: `words[i / 64] & (1 << (i % 64)) != 0` (O(1))
//! - **Count**: sum of `count_ones` over the words (hardware POPCNT)
//!
//! Out-of-range coordinates read as unset and are never written; callers bounds
//! check before mutating.

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl BitGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = rows * cols;
        BitGrid {
            rows,
            cols,
            words: vec![0; cells.div_ceil(64)],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    #[inline]
    pub fn insert(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.words[i / 64] |= 1u64 << (i % 64);
        }
    }

    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.words[i / 64] &= !(1u64 << (i % 64));
        }
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => self.words[i / 64] & (1u64 << (i % 64)) != 0,
            None => false,
        }
    }

    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Iterate the `(row, col)` of every set cell in row-major order
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.words.iter().enumerate().flat_map(move |(w, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                let i = w * 64 + bit;
                Some((i / cols, i % cols))
            })
        })
    }
}
