//! Level generation.
//!
//! Generation runs in four steps:
//!
//! 1. **Kinds**: each kind repeated `3 x layer_count` times, minus one copy
//!    of every kind if the trap fires
//! 2. **Shuffle**: two passes
//! 3. **Layers**: layer `k` (1-indexed) takes between `ceil(k^2 / 2)` and
//!    `k^2` tiles until the kinds run out
//! 4. **Placement**: each tile gets a free random cell of its layer, and the
//!    tiles of the layer below that it overlaps gain it as a parent
//!
//! Clickability is propagated once at the end, so only uncovered tiles start
//! `Selectable`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Clickability, TilePool};
use crate::core::{LevelConfig, RunConfig, Tile, TileId, TileKind, TileRng};

use super::geometry::Grid;

/// A freshly generated level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Tiles with placement, parent links and initial clickability.
    pub pool: TilePool,

    /// Tile count of each layer, bottom first.
    pub layer_sizes: Vec<usize>,

    /// Whether the trap removed a group from every kind.
    pub trapped: bool,
}

/// Builds layouts from a `RunConfig`.
///
/// ## Usage
///
/// ```
/// use tile_triplet::core::{LevelConfig, RunConfig, TileRng};
/// use tile_triplet::layout::LayoutGenerator;
///
/// let config = RunConfig::new(LevelConfig::new(1, 1, false));
/// let mut rng = TileRng::new(42);
/// let layout = LayoutGenerator::new(&config).generate(&mut rng);
///
/// assert_eq!(layout.pool.total(), 3);
/// // One tile at the bottom, two on top of it
/// assert_eq!(layout.layer_sizes, vec![1, 2]);
/// assert_eq!(layout.pool.selectable().count(), 2);
/// ```
pub struct LayoutGenerator<'a> {
    config: &'a RunConfig,
}

impl<'a> LayoutGenerator<'a> {
    /// Create a generator for a configuration.
    #[must_use]
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Generate a complete layout.
    pub fn generate(&self, rng: &mut TileRng) -> Layout {
        let level = &self.config.level;
        let trapped = level.trap && rng.gen_bool(self.config.trap_probability);

        let mut kinds = Self::kinds(level, trapped);
        rng.shuffle(&mut kinds);
        rng.shuffle(&mut kinds);

        let layer_sizes = Self::partition(kinds.len(), rng);
        let grid = Grid::new(self.config.viewport, self.config.tile_size);
        let tiles = Self::place(&kinds, &layer_sizes, &grid, rng);

        let mut pool = TilePool::from_tiles(tiles);
        Clickability::propagate(&mut pool);

        log::info!(
            "generated {} tiles in {} layers ({} kinds, trapped: {})",
            pool.total(),
            layer_sizes.len(),
            level.symbol_count,
            trapped
        );

        Layout {
            pool,
            layer_sizes,
            trapped,
        }
    }

    /// The unshuffled kind multiset.
    ///
    /// Kinds cycle `0, 1, .., n-1, 0, 1, ..` so dropping the last
    /// `symbol_count` entries removes exactly one copy of each kind.
    #[must_use]
    pub fn kinds(level: &LevelConfig, trapped: bool) -> Vec<TileKind> {
        let mut kinds: Vec<TileKind> = (0..level.copies_per_kind())
            .flat_map(|_| (0..level.symbol_count).map(|k| TileKind::new(k as u16)))
            .collect();

        if trapped {
            kinds.truncate(kinds.len().saturating_sub(level.symbol_count));
        }

        kinds
    }

    /// Split `total` tiles into pyramid-sized layers.
    ///
    /// Layer `k` (1-indexed) never exceeds `k^2` tiles, which is also the
    /// number of cells in its grid.
    pub fn partition(total: usize, rng: &mut TileRng) -> Vec<usize> {
        let mut sizes = Vec::new();
        let mut remaining = total;
        let mut k = 1usize;

        while remaining > 0 {
            let max = k * k;
            let min = max.div_ceil(2);
            let size = rng.gen_range_inclusive(min..=max).min(remaining);
            sizes.push(size);
            remaining -= size;
            k += 1;
        }

        sizes
    }

    /// Assign cells and parent links, bottom layer first.
    fn place(kinds: &[TileKind], layer_sizes: &[usize], grid: &Grid, rng: &mut TileRng) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = Vec::with_capacity(kinds.len());
        let mut below = 0..0;
        let mut next_kind = kinds.iter().copied();

        for (layer, &count) in layer_sizes.iter().enumerate() {
            let layer = layer as u32;
            let cells = Grid::cells(layer) as usize;
            let mut used = FxHashSet::default();
            let start = tiles.len();

            for kind in next_kind.by_ref().take(count) {
                let mut cell = rng.gen_range_usize(0..cells);
                while !used.insert(cell) {
                    cell = rng.gen_range_usize(0..cells);
                }

                let id = TileId::new(tiles.len() as u32);
                let placement = grid.place(layer, cell as u32);
                let mut tile = Tile::new(id, kind, layer, cell as u32);
                tile.row = placement.row;
                tile.column = placement.column;
                tile.top = placement.top;
                tile.left = placement.left;

                for covered in &mut tiles[below.clone()] {
                    if grid.overlaps(covered.top, covered.left, tile.top, tile.left) {
                        covered.parents.push(id);
                    }
                }

                tiles.push(tile);
            }

            below = start..tiles.len();
        }

        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TileState, Viewport};
    use rustc_hash::FxHashMap;

    fn kind_counts(pool: &TilePool) -> FxHashMap<TileKind, usize> {
        let mut counts = FxHashMap::default();
        for tile in pool.tiles() {
            *counts.entry(tile.kind).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_kinds_untrapped() {
        let kinds = LayoutGenerator::kinds(&LevelConfig::new(4, 2, false), false);
        assert_eq!(kinds.len(), 24);
        for k in 0..4 {
            assert_eq!(kinds.iter().filter(|&&x| x == TileKind::new(k)).count(), 6);
        }
    }

    #[test]
    fn test_kinds_trapped_drops_one_of_each() {
        let kinds = LayoutGenerator::kinds(&LevelConfig::new(4, 2, true), true);
        assert_eq!(kinds.len(), 20);
        for k in 0..4 {
            assert_eq!(kinds.iter().filter(|&&x| x == TileKind::new(k)).count(), 5);
        }
    }

    #[test]
    fn test_partition_sizes() {
        let mut rng = TileRng::new(9);
        for total in [1usize, 3, 24, 90, 270] {
            let sizes = LayoutGenerator::partition(total, &mut rng);
            assert_eq!(sizes.iter().sum::<usize>(), total);
            for (i, &size) in sizes.iter().enumerate() {
                let k = i + 1;
                assert!(size >= 1);
                assert!(size <= k * k);
                // Only the last layer may fall short of half its capacity
                if i + 1 < sizes.len() {
                    assert!(size >= (k * k).div_ceil(2));
                }
            }
        }
    }

    #[test]
    fn test_single_layer_scenario() {
        let config = RunConfig::new(LevelConfig::new(1, 1, false));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(42));

        assert!(!layout.trapped);
        assert_eq!(layout.pool.total(), 3);
        assert!(layout.pool.tiles().iter().all(|t| t.kind == TileKind::new(0)));

        // Layer 1 holds one cell; layer 2 always takes the remaining two,
        // and every cell of layer 2 covers the single tile below.
        assert_eq!(layout.layer_sizes, vec![1, 2]);
        let bottom = layout.pool.get(TileId::new(0)).unwrap();
        assert_eq!(bottom.state, TileState::Locked);
        assert_eq!(bottom.parents.as_slice(), &[TileId::new(1), TileId::new(2)]);
        assert_eq!(layout.pool.state(TileId::new(1)), Some(TileState::Selectable));
        assert_eq!(layout.pool.state(TileId::new(2)), Some(TileState::Selectable));
    }

    #[test]
    fn test_trap_always_fires_at_probability_one() {
        let config = RunConfig::new(LevelConfig::new(3, 2, true)).with_trap_probability(1.0);
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(1));

        assert!(layout.trapped);
        assert_eq!(layout.pool.total(), 15);
        assert!(kind_counts(&layout.pool).values().all(|&c| c == 5));
    }

    #[test]
    fn test_trap_never_fires_at_probability_zero() {
        let config = RunConfig::new(LevelConfig::new(3, 2, true)).with_trap_probability(0.0);
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(1));

        assert!(!layout.trapped);
        assert!(kind_counts(&layout.pool).values().all(|&c| c % 3 == 0));
    }

    #[test]
    fn test_cells_unique_within_layer() {
        let config = RunConfig::new(LevelConfig::new(8, 4, false));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(5));

        let mut seen = FxHashSet::default();
        for tile in layout.pool.tiles() {
            assert!(tile.slot_index < Grid::cells(tile.layer));
            assert!(seen.insert((tile.layer, tile.slot_index)), "duplicate cell {}", tile.label());
        }
    }

    #[test]
    fn test_parents_come_from_next_layer() {
        let config = RunConfig::new(LevelConfig::new(6, 3, false));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(77));
        let pool = &layout.pool;
        let size = config.tile_size;

        for tile in pool.tiles() {
            for &parent in &tile.parents {
                let parent = pool.get(parent).unwrap();
                assert_eq!(parent.layer, tile.layer + 1);
                assert!((parent.top - tile.top).abs() <= size);
                assert!((parent.left - tile.left).abs() <= size);
            }
            assert!(tile.parents.len() <= 4);
        }
    }

    #[test]
    fn test_every_overlap_is_linked() {
        let config = RunConfig::new(LevelConfig::new(6, 3, false));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(3));
        let pool = &layout.pool;
        let grid = Grid::new(config.viewport, config.tile_size);

        for lower in pool.tiles() {
            for upper in pool.tiles().iter().filter(|t| t.layer == lower.layer + 1) {
                let overlapping = grid.overlaps(lower.top, lower.left, upper.top, upper.left);
                assert_eq!(overlapping, lower.parents.contains(&upper.id));
            }
        }
    }

    #[test]
    fn test_initial_clickability() {
        let config = RunConfig::new(LevelConfig::new(6, 3, false));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(11));

        assert!(Clickability::holds(&layout.pool));
        for tile in layout.pool.tiles() {
            assert_eq!(tile.is_selectable(), tile.parents.is_empty());
        }
    }

    #[test]
    fn test_zero_viewport_still_generates() {
        let config = RunConfig::new(LevelConfig::new(4, 2, false)).with_viewport(Viewport::new(0.0, 0.0));
        let layout = LayoutGenerator::new(&config).generate(&mut TileRng::new(2));

        assert_eq!(layout.pool.total(), 24);
        assert!(layout.pool.tiles().iter().all(|t| t.top.is_finite() && t.left.is_finite()));
    }

    #[test]
    fn test_deterministic() {
        let config = RunConfig::new(LevelConfig::new(5, 3, true));
        let a = LayoutGenerator::new(&config).generate(&mut TileRng::new(1234));
        let b = LayoutGenerator::new(&config).generate(&mut TileRng::new(1234));
        assert_eq!(a, b);
    }
}
