//! Discard pile.
//!
//! Tiles moved out of the slot by a discard wait here, in the order they
//! left the slot, until they are picked again.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// Ordered side pile of discarded tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    tiles: Vec<TileId>,
}

impl DiscardPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in the order they were discarded.
    #[must_use]
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Check if a tile is in the pile.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains(&id)
    }

    /// Append tiles to the pile.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = TileId>) {
        self.tiles.extend(ids);
    }

    /// Take a tile out of the pile.
    ///
    /// Returns true if it was there.
    pub fn take(&mut self, id: TileId) -> bool {
        if let Some(pos) = self.tiles.iter().position(|&t| t == id) {
            self.tiles.remove(pos);
            true
        } else {
            false
        }
    }
}
