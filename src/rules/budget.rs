//! Undo budget capability.
//!
//! The number of undos a player gets is not the engine's business: it comes
//! from whoever owns the run settings (see `store::RunStore`). The engine
//! only asks for one unit per undo and resets the budget when a run starts.

use serde::{Deserialize, Serialize};

/// A source of undo units.
pub trait UndoBudget {
    /// Take one unit. Returns false if none are left.
    fn consume(&mut self) -> bool;

    /// Refill for a new run.
    fn reset(&mut self);

    /// Units left.
    fn remaining(&self) -> u32;
}

/// Fixed-size undo allowance.
///
/// ```
/// use tile_triplet::rules::{UndoBudget, UndoCounter};
///
/// let mut budget = UndoCounter::new(1);
/// assert!(budget.consume());
/// assert!(!budget.consume());
///
/// budget.reset();
/// assert_eq!(budget.remaining(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoCounter {
    limit: u32,
    remaining: u32,
}

impl UndoCounter {
    /// Create a full counter.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Units granted per run.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for UndoCounter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl UndoBudget for UndoCounter {
    fn consume(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.remaining = self.limit;
    }

    fn remaining(&self) -> u32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_until_empty() {
        let mut budget = UndoCounter::new(2);
        assert!(budget.consume());
        assert!(budget.consume());
        assert!(!budget.consume());
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.limit(), 2);
    }

    #[test]
    fn test_zero_budget() {
        let mut budget = UndoCounter::new(0);
        assert!(!budget.consume());
        budget.reset();
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_default_is_one() {
        assert_eq!(UndoCounter::default().remaining(), 1);
    }
}
