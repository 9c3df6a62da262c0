//! Core engine types: tiles, RNG, configuration, errors.
//!
//! These are the building blocks shared by the layout generator, the board
//! and the game engine.

pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{Tile, TileId, TileKind, TileState};
pub use rng::{TileRng, TileRngState};
pub use config::{LevelConfig, RunConfig, Viewport, MATCH_SIZE, SLOT_CAPACITY};
pub use error::ConfigError;
