//! Per-run state.
//!
//! Everything that changes during a run lives in one `RunState`, owned by
//! the engine and replaced wholesale when a level is (re)generated. It is
//! plain data: cloning it gives a snapshot the presentation layer can keep.

use serde::{Deserialize, Serialize};

use crate::board::TilePool;
use crate::core::TileId;
use crate::layout::Layout;
use crate::rules::Outcome;
use crate::schedule::ClearQueue;
use crate::slot::{DiscardPile, History, SelectionSlot};

/// Mutable state of one run of a level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    // === Board ===
    /// Every tile of the level and which are still in play.
    pub pool: TilePool,

    /// Tile count of each layer, bottom first.
    pub layer_sizes: Vec<usize>,

    /// Whether the trap stranded a group of every kind.
    pub trapped: bool,

    // === Picked tiles ===
    pub slot: SelectionSlot,
    pub discard: DiscardPile,
    pub history: History,

    /// Most recent pick still relevant to the presentation layer.
    pub last_selected: Option<TileId>,

    /// Triplets waiting for their delayed removal.
    pub clears: ClearQueue,

    // === Flags ===
    /// Set once a discard has happened this run.
    pub discard_used: bool,

    /// Terminal result, once reached.
    pub outcome: Option<Outcome>,
}

impl RunState {
    /// Fresh state for a generated layout.
    ///
    /// `clears` is carried over (already emptied) so clear ids keep
    /// increasing across resets.
    #[must_use]
    pub fn from_layout(layout: Layout, clears: ClearQueue) -> Self {
        debug_assert!(clears.is_empty());
        Self {
            pool: layout.pool,
            layer_sizes: layout.layer_sizes,
            trapped: layout.trapped,
            clears,
            ..Self::default()
        }
    }

    /// Check if the run has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
