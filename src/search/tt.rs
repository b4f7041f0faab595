//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by position hash,
//! enabling reuse of previous search results for positions we've seen before.
//!
//! Each entry remembers the `[min_score, max_score]` window it was searched
//! with. A fail-soft score at or below `min_score` is only an upper bound, a
//! score at or above `max_score` only a lower bound; anything in between is
//! exact.
//!
//! # Example
//!
//! ```
//! use penta::search::TranspositionTable;
//!
//! let mut tt = TranspositionTable::new(1024);
//!
//! // Store a search result
//! let hash = 0x123456789ABCDEF0;
//! tt.store(hash, 40, -100, 100, 3);
//!
//! // Probe for the result
//! assert_eq!(tt.probe(hash, -100, 100, 3), Some(40));
//! assert_eq!(tt.probe(hash, -100, 100, 4), None);
//! ```

/// Default number of slots
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// Interpretation of a stored score relative to its window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - strictly inside the window
    Exact,
    /// Lower bound - score >= max_score (beta cutoff)
    LowerBound,
    /// Upper bound - score <= min_score (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub key: u64,
    /// Search result
    pub score: i32,
    /// Lower edge of the window the score was searched with
    pub min_score: i32,
    /// Upper edge of the window the score was searched with
    pub max_score: i32,
    /// `max_score - min_score`
    pub window: i32,
    /// Remaining search depth that produced the score
    pub depth: i32,
}

impl TTEntry {
    #[inline]
    pub fn entry_type(&self) -> EntryType {
        if self.score <= self.min_score {
            EntryType::UpperBound
        } else if self.score >= self.max_score {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table for caching search results.
///
/// Uses a simple direct-mapped approach where each hash maps to exactly
/// one slot. Collisions are resolved by the replacement policy: a slot only
/// takes a result searched at least as deep, and at equal depth only one
/// searched with a strictly narrower window than the stored one.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    capacity: usize,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (at least one).
    ///
    /// # Example
    ///
    /// ```
    /// use penta::search::TranspositionTable;
    ///
    /// let tt = TranspositionTable::new(4096);
    /// assert_eq!(tt.capacity(), 4096);
    /// ```
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            entries: vec![None; capacity],
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot of `key`: `|key mod capacity|` with the key read as signed.
    #[inline]
    fn index(&self, key: u64) -> usize {
        ((key as i64) % (self.capacity as i64)).unsigned_abs() as usize
    }

    /// Raw entry stored in `key`'s slot if it belongs to `key`.
    #[must_use]
    pub fn entry(&self, key: u64) -> Option<&TTEntry> {
        self.entries[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Probe the table for a position.
    ///
    /// Returns the stored score if it is valid for a search of `depth` with
    /// window `[min_score, max_score]`:
    /// - the stored depth must be at least `depth`
    /// - an upper bound is usable only if it was proved against a
    ///   `min_score` no higher than the requested one
    /// - a lower bound is usable only if it was proved against a
    ///   `max_score` no lower than the requested one
    /// - an exact score is always usable
    #[must_use]
    pub fn probe(&self, key: u64, min_score: i32, max_score: i32, depth: i32) -> Option<i32> {
        let entry = self.entry(key)?;

        if entry.depth < depth {
            return None;
        }

        match entry.entry_type() {
            EntryType::UpperBound if entry.min_score <= min_score => Some(entry.score),
            EntryType::LowerBound if entry.max_score >= max_score => Some(entry.score),
            EntryType::Exact => Some(entry.score),
            _ => None,
        }
    }

    /// Store a search result.
    ///
    /// Returns whether the replacement policy accepted the write.
    pub fn store(&mut self, key: u64, score: i32, min_score: i32, max_score: i32, depth: i32) -> bool {
        let idx = self.index(key);
        let window = max_score - min_score;

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => depth > e.depth || (depth == e.depth && window < e.window),
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                key,
                score,
                min_score,
                max_score,
                window,
                depth,
            });
        }
        should_replace
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            capacity: self.capacity,
            used,
            usage_percent: (used as f64 / self.capacity as f64 * 100.0) as u8,
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub capacity: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}
