//! Transposition table
//!
//! A fixed-capacity, direct-mapped cache from position hash to search result.
//! The slot is `hash % capacity`; a new entry simply overwrites whatever lived
//! in its slot. Entries keep the full key, so a probe for a different position
//! that happens to share the slot is a miss, not a wrong answer. The key
//! covers every input of the evaluation (pawns, walls, wall counts, side to
//! move), so two positions sharing a key score the same.
//!
//! Every entry records the remaining depth it was searched to and whether its
//! score is exact or only a bound. The search reuses an entry only when it
//! was searched at least as deep as needed and the bound agrees with the
//! current window; this is what makes it safe to keep the table across
//! iterative-deepening passes.

use crate::moves::Move;
use crate::types::Score;

/// How a stored score relates to the true value of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact minimax value
    Exact,
    /// Search failed high; true value is at least the score
    Lower,
    /// Search failed low; true value is at most the score
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub key: u64,
    /// Remaining depth the score was computed with
    pub depth: u8,
    pub bound: Bound,
    pub score: Score,
    pub best_move: Option<Move>,
}

impl TtEntry {
    /// Exact leaf evaluation
    pub fn leaf(key: u64, score: Score) -> Self {
        Self {
            key,
            depth: 0,
            bound: Bound::Exact,
            score,
            best_move: None,
        }
    }
}

pub struct TranspositionTable {
    slots: Vec<Option<TtEntry>>,
    occupied: usize,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (at least one)
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
            occupied: 0,
        }
    }

    #[inline]
    fn slot(&self, key: u64) -> usize {
        (key % self.slots.len() as u64) as usize
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Store an entry under `key`, replacing whatever held the slot
    pub fn add(&mut self, key: u64, entry: TtEntry) {
        let index = self.slot(key);
        if self.slots[index].is_none() {
            self.occupied += 1;
        }
        self.slots[index] = Some(TtEntry { key, ..entry });
    }

    pub fn has_key(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// Entry stored for exactly this key
    pub fn get(&self, key: u64) -> Option<TtEntry> {
        self.slots[self.slot(key)].filter(|entry| entry.key == key)
    }

    pub fn clear(&mut self) {
        if self.occupied > 0 {
            self.slots.iter_mut().for_each(|slot| *slot = None);
            self.occupied = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Square};

    #[test]
    fn test_add_then_get() {
        let mut tt = TranspositionTable::new(1024);
        let entry = TtEntry {
            key: 0,
            depth: 3,
            bound: Bound::Lower,
            score: 42,
            best_move: Some(Move::translation(
                Color::White,
                Square::new(0, 4),
                Square::new(1, 4),
            )),
        };
        tt.add(0xDEAD_BEEF, entry);

        assert!(tt.has_key(0xDEAD_BEEF));
        let stored = tt.get(0xDEAD_BEEF).expect("entry should be present");
        assert_eq!(stored.score, 42);
        assert_eq!(stored.depth, 3);
        assert_eq!(stored.bound, Bound::Lower);
        assert_eq!(stored.key, 0xDEAD_BEEF, "key is taken from the add call");
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut tt = TranspositionTable::new(64);
        let keys = [1u64, 2, 3, 1_000_003, u64::MAX];
        for (i, &key) in keys.iter().enumerate() {
            tt.add(key, TtEntry::leaf(key, i as Score));
        }
        tt.clear();

        for key in keys {
            assert!(!tt.has_key(key), "key {key} survived clear");
        }
        assert!(tt.is_empty());
    }

    #[test]
    fn test_collision_overwrites() {
        let mut tt = TranspositionTable::new(16);
        tt.add(5, TtEntry::leaf(5, 1));
        tt.add(21, TtEntry::leaf(21, 2));

        assert!(!tt.has_key(5), "older entry in the same slot is replaced");
        assert_eq!(tt.get(21).map(|e| e.score), Some(2));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_zero_capacity_is_usable() {
        let mut tt = TranspositionTable::new(0);
        assert_eq!(tt.capacity(), 1);
        tt.add(7, TtEntry::leaf(7, -3));
        assert_eq!(tt.get(7).map(|e| e.score), Some(-3));
    }
}
