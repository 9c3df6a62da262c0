//! The engine and the state it drives.

pub mod engine;
pub mod state;

pub use engine::{SelectResult, TileGame};
pub use state::RunState;
