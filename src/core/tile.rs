//! Tile identification and per-tile state.
//!
//! Every tile generated for a level lives in a flat arena and is addressed by
//! its `TileId`, which is the arena index. Parent links are stored as ids, so
//! the occlusion graph never holds references into the arena.
//!
//! ## Usage
//!
//! ```
//! use tile_triplet::core::{Tile, TileId, TileKind, TileState};
//!
//! let tile = Tile::new(TileId::new(0), TileKind::new(2), 1, 3);
//! assert_eq!(tile.state, TileState::Locked);
//! assert_eq!(tile.label(), "1-3");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a tile within one generated level.
///
/// Ids are allocated densely from 0 in placement order and double as the
/// tile's index in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena index of this tile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Symbol class of a tile. Three tiles of one kind form a triplet.
///
/// Kinds are numbered `0..symbol_count`; the engine attaches no meaning to
/// them beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileKind(pub u16);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(kind: u16) -> Self {
        Self(kind)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// Clickability state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Covered by at least one unresolved parent.
    #[default]
    Locked,
    /// Every parent is resolved; the tile can be picked.
    Selectable,
    /// Picked: sitting in the slot, the discard pile, or awaiting a clear.
    Selected,
    /// Eliminated as part of a completed triplet.
    Cleared,
}

impl TileState {
    /// A resolved tile no longer covers the tiles beneath it.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Selected | Self::Cleared)
    }
}

/// A single tile of the layout.
///
/// `parents` are the tiles of the next layer up whose footprint overlaps this
/// one. Lower tiles are placed first, so a tile's parents always come from
/// layer `layer + 1`. At most four tiles can overlap one footprint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Arena id.
    pub id: TileId,
    /// Symbol class.
    pub kind: TileKind,
    /// Layer index, 0 = first placed.
    pub layer: u32,
    /// Grid cell within the layer.
    pub slot_index: u32,
    pub row: u32,
    pub column: u32,
    /// Screen offset from the top of the play area.
    pub top: f32,
    /// Screen offset from the left of the play area.
    pub left: f32,
    /// Covering tiles from the next layer.
    pub parents: SmallVec<[TileId; 4]>,
    pub state: TileState,
}

impl Tile {
    /// Create a locked tile with no placement yet.
    #[must_use]
    pub fn new(id: TileId, kind: TileKind, layer: u32, slot_index: u32) -> Self {
        Self {
            id,
            kind,
            layer,
            slot_index,
            row: 0,
            column: 0,
            top: 0.0,
            left: 0.0,
            parents: SmallVec::new(),
            state: TileState::Locked,
        }
    }

    /// Human-readable `"<layer>-<slot>"` label, unique within a level.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.layer, self.slot_index)
    }

    /// Check if this tile can currently be picked from the pool.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.state == TileState::Selectable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(TileId::from(7), id);
        assert_eq!(format!("{}", id), "Tile(7)");
    }

    #[test]
    fn test_tile_kind_display() {
        assert_eq!(format!("{}", TileKind::new(3)), "Kind(3)");
    }

    #[test]
    fn test_resolved_states() {
        assert!(!TileState::Locked.is_resolved());
        assert!(!TileState::Selectable.is_resolved());
        assert!(TileState::Selected.is_resolved());
        assert!(TileState::Cleared.is_resolved());
    }

    #[test]
    fn test_new_tile_is_locked() {
        let tile = Tile::new(TileId::new(4), TileKind::new(1), 2, 5);
        assert_eq!(tile.state, TileState::Locked);
        assert!(!tile.is_selectable());
        assert!(tile.parents.is_empty());
        assert_eq!(tile.label(), "2-5");
    }

    #[test]
    fn test_serialization() {
        let mut tile = Tile::new(TileId::new(1), TileKind::new(0), 0, 0);
        tile.parents.push(TileId::new(2));
        tile.state = TileState::Selectable;

        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}
