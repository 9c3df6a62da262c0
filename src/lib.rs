//! # tile-triplet
//!
//! Engine for a layered tile-matching game: tiles of several kinds are
//! stacked in pyramid layers, only uncovered tiles can be picked, and three
//! picks of one kind in the slot clear each other.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine owns no timer and draws nothing.
//!    It exposes state and reports events; the caller renders and drives
//!    delayed clears.
//!
//! 2. **Moves Never Fail**: A pick, undo or discard that is not allowed is a
//!    no-op. Only configuration returns errors.
//!
//! 3. **Reproducible**: Layouts come from a seeded ChaCha RNG whose state is
//!    serializable.
//!
//! ## Modules
//!
//! - `core`: Tile ids and kinds, RNG, configuration, errors
//! - `layout`: Level generation (kind multiset, layers, placement)
//! - `board`: Tile arena and clickability propagation
//! - `slot`: Selection slot, discard pile, pick history
//! - `schedule`: Pending triplet clears
//! - `rules`: Win/lose evaluation and the undo budget capability
//! - `events`: Events and caller callbacks
//! - `game`: `TileGame` and its `RunState`
//! - `store`: Level table and player settings, loadable from TOML

pub mod core;
pub mod layout;
pub mod board;
pub mod slot;
pub mod schedule;
pub mod rules;
pub mod events;
pub mod game;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Tile, TileId, TileKind, TileState,
    TileRng, TileRngState,
    LevelConfig, RunConfig, Viewport, MATCH_SIZE, SLOT_CAPACITY,
    ConfigError,
};

pub use crate::layout::{Layout, LayoutGenerator, Grid, Placement};

pub use crate::board::{TilePool, Clickability};

pub use crate::slot::{SelectionSlot, SlotEntry, DiscardPile, History};

pub use crate::schedule::{ClearId, ClearQueue, PendingClear};

pub use crate::rules::{UndoBudget, UndoCounter, Outcome, LoseReason, OutcomeEvaluator};

pub use crate::events::{GameEvent, EventHandlers};

pub use crate::game::{TileGame, SelectResult, RunState};

pub use crate::store::{RunStore, StoreSettings, LevelTable};
