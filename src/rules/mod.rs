//! Run rules that sit outside the board.
//!
//! - `OutcomeEvaluator`: when a run is won or lost
//! - `UndoBudget`: the capability the engine draws undo units from

pub mod budget;
pub mod outcome;

pub use budget::{UndoBudget, UndoCounter};
pub use outcome::{LoseReason, Outcome, OutcomeEvaluator};
