//! Delayed triplet removal.
//!
//! The engine never owns a timer. Completed triplets are queued here and the
//! presentation layer drives them, either by reporting elapsed time
//! (`TileGame::advance`) or by completing a specific clear when its own timer
//! fires (`TileGame::complete_clear`).

mod queue;

pub use queue::{ClearId, ClearQueue, PendingClear};
