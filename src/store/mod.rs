//! Run settings and the level table.
//!
//! The store is the engine's outer collaborator: it knows which level is
//! current, which rules the player runs with, and how many undos are left.
//! It can be built in code or loaded from TOML.

mod levels;
mod run_store;

pub use levels::LevelTable;
pub use run_store::{RunStore, StoreSettings};
