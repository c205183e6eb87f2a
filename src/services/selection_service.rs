//! Selection Service - no-repeat random pick with a bounded per-category history
//!
//! Pure logic: takes a pool and a history, returns the pick and the new
//! history. Writing the history back is the caller's job.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::DomainError;
use crate::models::BookRecord;

/// Default number of recent picks remembered per category
pub const DEFAULT_MAX_HISTORY: usize = 3;

/// Result of a successful pick
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub selected: BookRecord,
    /// Updated history, oldest first, at most `max_history` long
    pub history: Vec<BookRecord>,
}

/// Pick one book from `pool` that is not in `history`.
///
/// When every book in the pool has been shown recently, the whole pool becomes
/// eligible again, so a non-empty pool always yields a pick. The chosen book is
/// appended to a copy of `history`, which is then trimmed from the front to
/// `max_history` entries.
pub fn pick_next<R: Rng + ?Sized>(
    pool: &[BookRecord],
    history: &[BookRecord],
    max_history: usize,
    rng: &mut R,
) -> Result<Selection, DomainError> {
    if pool.is_empty() {
        return Err(DomainError::EmptyPool);
    }

    let exclude: HashSet<&str> = history.iter().map(|b| b.title.as_str()).collect();

    let mut candidates: Vec<&BookRecord> = pool
        .iter()
        .filter(|b| !exclude.contains(b.title.as_str()))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            "All {} books were shown recently, falling back to full pool",
            pool.len()
        );
        candidates = pool.iter().collect();
    }

    let selected = candidates
        .choose(rng)
        .map(|b| (*b).clone())
        .ok_or(DomainError::EmptyPool)?;

    let mut next_history = Vec::with_capacity(history.len() + 1);
    next_history.extend_from_slice(history);
    next_history.push(selected.clone());
    if next_history.len() > max_history {
        let overflow = next_history.len() - max_history;
        next_history.drain(..overflow);
    }

    Ok(Selection {
        selected,
        history: next_history,
    })
}

/// Owns the random source and the history bound.
pub struct SelectionEngine {
    max_history: usize,
    rng: Mutex<StdRng>,
}

impl SelectionEngine {
    pub fn new(max_history: usize) -> Self {
        Self {
            max_history,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic engine, for tests and reproducible runs
    pub fn seeded(max_history: usize, seed: u64) -> Self {
        Self {
            max_history,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    pub fn pick_next(
        &self,
        pool: &[BookRecord],
        history: &[BookRecord],
    ) -> Result<Selection, DomainError> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        pick_next(pool, history, self.max_history, &mut *rng)
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
