//! Clickability propagation.
//!
//! A tile can be picked once every tile covering it has been picked or
//! cleared. `Clickability::propagate` recomputes that rule for every
//! unresolved tile in play; resolved tiles are never touched.

use crate::core::{Tile, TileId, TileState};

use super::pool::TilePool;

/// Stateless clickability rules over a `TilePool`.
pub struct Clickability;

impl Clickability {
    /// Check if every parent of `tile` is resolved.
    ///
    /// Parents missing from the arena count as resolved.
    #[must_use]
    pub fn parents_resolved(pool: &TilePool, tile: &Tile) -> bool {
        tile.parents
            .iter()
            .all(|&p| pool.state(p).map_or(true, TileState::is_resolved))
    }

    /// The state an unresolved tile should be in.
    ///
    /// Returns `None` for resolved tiles.
    #[must_use]
    pub fn expected_state(pool: &TilePool, tile: &Tile) -> Option<TileState> {
        if tile.state.is_resolved() {
            return None;
        }
        Some(if Self::parents_resolved(pool, tile) {
            TileState::Selectable
        } else {
            TileState::Locked
        })
    }

    /// Recompute `Locked`/`Selectable` for every tile in play.
    ///
    /// Returns the number of tiles whose state changed.
    pub fn propagate(pool: &mut TilePool) -> usize {
        let changes: Vec<(TileId, TileState)> = pool
            .iter_in_play()
            .filter_map(|tile| {
                Self::expected_state(pool, tile)
                    .filter(|&expected| expected != tile.state)
                    .map(|expected| (tile.id, expected))
            })
            .collect();

        for &(id, state) in &changes {
            pool.set_state(id, state);
        }

        changes.len()
    }

    /// Check that every tile in play satisfies the clickability rule.
    #[must_use]
    pub fn holds(pool: &TilePool) -> bool {
        pool.iter_in_play()
            .all(|tile| Self::expected_state(pool, tile).map_or(true, |s| s == tile.state))
    }
}
