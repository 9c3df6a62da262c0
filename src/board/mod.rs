//! The board: tile arena and clickability.
//!
//! ## Key Types
//!
//! - `TilePool`: every tile of the level, plus which ones are still in play
//! - `Clickability`: derives `Locked`/`Selectable` from the parent links

pub mod pool;
pub mod propagate;

pub use pool::TilePool;
pub use propagate::Clickability;
