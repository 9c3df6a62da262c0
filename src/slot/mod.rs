//! Where picked tiles go.
//!
//! ## Key Types
//!
//! - `SelectionSlot`: the bounded hand, clustered by kind
//! - `DiscardPile`: tiles moved out of the slot, re-pickable
//! - `History`: pick order, for single-step undo

pub mod tray;
pub mod discard;
pub mod history;

pub use tray::{SelectionSlot, SlotEntry};
pub use discard::DiscardPile;
pub use history::History;
