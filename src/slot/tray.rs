//! The selection slot.
//!
//! Picked tiles wait here until three of a kind meet. New tiles are inserted
//! right after the last tile of the same kind, so the members of a triplet
//! are always contiguous. Tiles already promised to a pending clear stay in
//! the slot (and count towards its capacity) but no longer count towards a
//! new triplet.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{TileId, TileKind, SLOT_CAPACITY};

/// One occupied position of the slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub id: TileId,
    pub kind: TileKind,
    /// Part of a triplet waiting for its delayed removal.
    pub clearing: bool,
}

/// Ordered, bounded sequence of picked tiles.
///
/// ```
/// use tile_triplet::core::{TileId, TileKind};
/// use tile_triplet::slot::SelectionSlot;
///
/// let mut slot = SelectionSlot::new();
/// slot.insert(TileId::new(0), TileKind::new(1));
/// slot.insert(TileId::new(1), TileKind::new(2));
/// slot.insert(TileId::new(2), TileKind::new(1));
///
/// // The second kind-1 tile lands next to the first
/// let order: Vec<_> = slot.ids().collect();
/// assert_eq!(order, vec![TileId::new(0), TileId::new(2), TileId::new(1)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSlot {
    entries: Vec<SlotEntry>,
}

impl SelectionSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the slot has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= SLOT_CAPACITY
    }

    /// Occupied positions, front first.
    #[must_use]
    pub fn entries(&self) -> &[SlotEntry] {
        &self.entries
    }

    /// Tile ids, front first.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Check if a tile is in the slot.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Insert a tile next to its kind.
    ///
    /// Goes right after the last tile of the same kind, or at the end.
    /// Returns the position it was inserted at.
    pub fn insert(&mut self, id: TileId, kind: TileKind) -> usize {
        let entry = SlotEntry {
            id,
            kind,
            clearing: false,
        };
        let pos = self
            .entries
            .iter()
            .rposition(|e| e.kind == kind)
            .map_or(self.entries.len(), |last| last + 1);
        self.entries.insert(pos, entry);
        pos
    }

    /// Tiles of a kind that are free to form a triplet, front first.
    #[must_use]
    pub fn matching(&self, kind: TileKind) -> SmallVec<[TileId; 3]> {
        self.entries
            .iter()
            .filter(|e| e.kind == kind && !e.clearing)
            .map(|e| e.id)
            .collect()
    }

    /// Flag tiles as promised to a pending clear.
    pub fn mark_clearing(&mut self, ids: &[TileId]) {
        self.set_clearing(ids, true);
    }

    /// Release tiles from a cancelled clear.
    pub fn unmark_clearing(&mut self, ids: &[TileId]) {
        self.set_clearing(ids, false);
    }

    fn set_clearing(&mut self, ids: &[TileId], clearing: bool) {
        for entry in &mut self.entries {
            if ids.contains(&entry.id) {
                entry.clearing = clearing;
            }
        }
    }

    /// Remove a tile.
    ///
    /// Returns true if it was in the slot.
    pub fn remove(&mut self, id: TileId) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Remove up to `count` tiles from the front, in order.
    pub fn drain_front(&mut self, count: usize) -> Vec<SlotEntry> {
        let count = count.min(self.entries.len());
        self.entries.drain(..count).collect()
    }
}
