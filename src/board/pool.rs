//! Tile arena and the set of tiles still in play.
//!
//! The `TilePool` owns every tile generated for a level. Tiles are never
//! removed from the arena, so ids stay valid for the whole run and parent
//! links always resolve. What strip mode removes is a tile's membership in
//! the ordered in-play list.

use serde::{Deserialize, Serialize};

use crate::core::{Tile, TileId, TileState};

/// Arena of tiles plus the ordered ids still on the board.
///
/// ## Usage
///
/// ```
/// use tile_triplet::board::TilePool;
/// use tile_triplet::core::{Tile, TileId, TileKind};
///
/// let tiles = vec![
///     Tile::new(TileId::new(0), TileKind::new(0), 0, 0),
///     Tile::new(TileId::new(1), TileKind::new(0), 1, 0),
/// ];
/// let mut pool = TilePool::from_tiles(tiles);
/// assert_eq!(pool.len(), 2);
///
/// assert!(pool.withdraw(TileId::new(0)));
/// assert_eq!(pool.in_play(), &[TileId::new(1)]);
/// assert_eq!(pool.total(), 2); // still in the arena
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TilePool {
    /// All tiles, indexed by `TileId`.
    tiles: Vec<Tile>,

    /// Tiles on the board, in placement order (reinserted tiles go last).
    in_play: Vec<TileId>,
}

impl TilePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool where every tile is in play.
    ///
    /// Tile ids must equal their index in `tiles`.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        debug_assert!(tiles.iter().enumerate().all(|(i, t)| t.id.index() == i));
        let in_play = tiles.iter().map(|t| t.id).collect();
        Self { tiles, in_play }
    }

    /// Number of tiles in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.in_play.len()
    }

    /// Check if no tile is in play.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_play.is_empty()
    }

    /// Number of tiles in the arena.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tiles.len()
    }

    /// Every tile of the level, in id order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Ids of the tiles in play.
    #[must_use]
    pub fn in_play(&self) -> &[TileId] {
        &self.in_play
    }

    /// Iterate over the tiles in play.
    pub fn iter_in_play(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.in_play.iter().filter_map(move |&id| self.get(id))
    }

    /// Get a tile.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Get a mutable tile.
    pub fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Get a tile's state.
    #[must_use]
    pub fn state(&self, id: TileId) -> Option<TileState> {
        self.get(id).map(|t| t.state)
    }

    /// Set a tile's state.
    ///
    /// Returns false if the tile does not exist.
    pub fn set_state(&mut self, id: TileId, state: TileState) -> bool {
        match self.get_mut(id) {
            Some(tile) => {
                tile.state = state;
                true
            }
            None => false,
        }
    }

    /// Check if a tile is in play.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.in_play.contains(&id)
    }

    /// Take a tile off the board (strip mode).
    ///
    /// Returns true if the tile was in play.
    pub fn withdraw(&mut self, id: TileId) -> bool {
        if let Some(pos) = self.in_play.iter().position(|&t| t == id) {
            self.in_play.remove(pos);
            true
        } else {
            false
        }
    }

    /// Put a withdrawn tile back on the board, after every other tile.
    ///
    /// Returns false if the tile is unknown or already in play.
    pub fn restore(&mut self, id: TileId) -> bool {
        if id.index() >= self.tiles.len() || self.contains(id) {
            return false;
        }
        self.in_play.push(id);
        true
    }

    /// Ids of the tiles in play that can be picked.
    pub fn selectable(&self) -> impl Iterator<Item = TileId> + '_ {
        self.iter_in_play().filter(|t| t.is_selectable()).map(|t| t.id)
    }

    /// Check if every tile in play is selected or cleared.
    #[must_use]
    pub fn all_resolved(&self) -> bool {
        self.iter_in_play().all(|t| t.state.is_resolved())
    }
}
