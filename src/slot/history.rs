//! Selection history for undo.
//!
//! Uses an `im` vector so run-state snapshots share history structure
//! instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Every pick of the run, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    picks: Vector<TileId>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if nothing has been picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Record a pick.
    pub fn push(&mut self, id: TileId) {
        self.picks.push_back(id);
    }

    /// Remove and return the most recent pick.
    pub fn pop(&mut self) -> Option<TileId> {
        self.picks.pop_back()
    }

    /// The most recent pick.
    #[must_use]
    pub fn last(&self) -> Option<TileId> {
        self.picks.back().copied()
    }

    /// Iterate over picks, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.picks.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);

        history.push(TileId::new(1));
        history.push(TileId::new(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(TileId::new(2)));

        assert_eq!(history.pop(), Some(TileId::new(2)));
        assert_eq!(history.last(), Some(TileId::new(1)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut history = History::new();
        history.push(TileId::new(1));

        let snapshot = history.clone();
        history.push(TileId::new(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![TileId::new(1), TileId::new(2)]);
    }
}
