//! Pending triplet clears.
//!
//! Completing a triplet does not remove it at once: the presentation layer
//! gets a fixed delay to play its effect. Each delayed removal is a
//! `PendingClear` with its own countdown. The queue never reuses a
//! `ClearId`, so a stale id from before a reset can never complete a clear
//! scheduled after it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{TileId, TileKind, MATCH_SIZE};

/// Identifier of a scheduled clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClearId(pub u32);

impl ClearId {
    /// Create a new clear ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClearId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clear({})", self.0)
    }
}

/// A completed triplet waiting for removal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClear {
    pub id: ClearId,
    pub kind: TileKind,
    pub tiles: [TileId; MATCH_SIZE],
    /// Time left before removal.
    pub remaining: Duration,
}

impl PendingClear {
    /// Check if a tile belongs to this triplet.
    #[must_use]
    pub fn contains(&self, tile: TileId) -> bool {
        self.tiles.contains(&tile)
    }
}

/// Scheduled clears in the order they were scheduled.
///
/// ```
/// use std::time::Duration;
/// use tile_triplet::core::{TileId, TileKind};
/// use tile_triplet::schedule::ClearQueue;
///
/// let mut queue = ClearQueue::new();
/// let tiles = [TileId::new(0), TileId::new(1), TileId::new(2)];
/// let id = queue.schedule(TileKind::new(0), tiles, Duration::from_millis(100));
///
/// assert!(queue.advance(Duration::from_millis(60)).is_empty());
/// let due = queue.advance(Duration::from_millis(40));
/// assert_eq!(due[0].id, id);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearQueue {
    pending: Vec<PendingClear>,
    next_id: u32,
}

impl ClearQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending clears.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending clears, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[PendingClear] {
        &self.pending
    }

    /// Get a pending clear.
    #[must_use]
    pub fn get(&self, id: ClearId) -> Option<&PendingClear> {
        self.pending.iter().find(|c| c.id == id)
    }

    /// Schedule a triplet for removal after `delay`.
    pub fn schedule(&mut self, kind: TileKind, tiles: [TileId; MATCH_SIZE], delay: Duration) -> ClearId {
        let id = ClearId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(PendingClear {
            id,
            kind,
            tiles,
            remaining: delay,
        });
        id
    }

    /// Count down every pending clear and return those now due, oldest
    /// first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<PendingClear> {
        for clear in &mut self.pending {
            clear.remaining = clear.remaining.saturating_sub(elapsed);
        }

        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|c| c.remaining.is_zero());
        self.pending = waiting;
        due
    }

    /// Remove a clear regardless of its countdown.
    pub fn take(&mut self, id: ClearId) -> Option<PendingClear> {
        let pos = self.pending.iter().position(|c| c.id == id)?;
        Some(self.pending.remove(pos))
    }

    /// Remove every clear, oldest first.
    pub fn take_all(&mut self) -> Vec<PendingClear> {
        std::mem::take(&mut self.pending)
    }

    /// Cancel the clear a tile belongs to, if any.
    pub fn cancel_containing(&mut self, tile: TileId) -> Option<PendingClear> {
        let pos = self.pending.iter().position(|c| c.contains(tile))?;
        Some(self.pending.remove(pos))
    }

    /// Cancel every pending clear.
    ///
    /// Returns how many were cancelled. Ids keep counting up.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    fn trio(base: u32) -> [TileId; 3] {
        [TileId::new(base), TileId::new(base + 1), TileId::new(base + 2)]
    }

    #[test]
    fn test_clear_id_display() {
        assert_eq!(format!("{}", ClearId::new(4)), "Clear(4)");
        assert_eq!(ClearId::new(4).raw(), 4);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = ClearQueue::new();
        let a = queue.schedule(TileKind::new(0), trio(0), DELAY);
        let b = queue.schedule(TileKind::new(1), trio(3), DELAY);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_advance_releases_in_order() {
        let mut queue = ClearQueue::new();
        let a = queue.schedule(TileKind::new(0), trio(0), DELAY);
        let b = queue.schedule(TileKind::new(1), trio(3), DELAY * 2);

        let due = queue.advance(DELAY);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, a);
        assert_eq!(queue.get(b).map(|c| c.remaining), Some(DELAY));

        let due = queue.advance(Duration::from_secs(5));
        assert_eq!(due[0].id, b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let mut queue = ClearQueue::new();
        queue.schedule(TileKind::new(0), trio(0), Duration::ZERO);
        assert_eq!(queue.advance(Duration::ZERO).len(), 1);
    }

    #[test]
    fn test_take_and_cancel() {
        let mut queue = ClearQueue::new();
        let a = queue.schedule(TileKind::new(0), trio(0), DELAY);
        let b = queue.schedule(TileKind::new(1), trio(3), DELAY);

        assert_eq!(queue.take(a).map(|c| c.kind), Some(TileKind::new(0)));
        assert!(queue.take(a).is_none());

        let cancelled = queue.cancel_containing(TileId::new(4));
        assert_eq!(cancelled.map(|c| c.id), Some(b));
        assert!(queue.cancel_containing(TileId::new(4)).is_none());
    }

    #[test]
    fn test_cancel_all_keeps_counting() {
        let mut queue = ClearQueue::new();
        let old = queue.schedule(TileKind::new(0), trio(0), DELAY);
        assert_eq!(queue.cancel_all(), 1);

        let new = queue.schedule(TileKind::new(0), trio(0), DELAY);
        assert_ne!(old, new);
        assert!(queue.take(old).is_none());
    }

    #[test]
    fn test_take_all() {
        let mut queue = ClearQueue::new();
        queue.schedule(TileKind::new(0), trio(0), DELAY);
        queue.schedule(TileKind::new(1), trio(3), DELAY);

        let all = queue.take_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].kind, TileKind::new(0));
        assert!(queue.is_empty());
    }
}
