//! Win/lose detection.
//!
//! Evaluation only happens once no clear is pending: a full slot with a
//! triplet about to leave is not a loss, and the board is not won while the
//! last triplet is still on screen.

use serde::{Deserialize, Serialize};

use crate::game::RunState;

/// Why a run was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoseReason {
    /// The slot filled up.
    SlotFull,
    /// Every tile is picked but the slot still holds unmatched tiles and
    /// nothing is left to pick (trap levels).
    Stranded,
}

/// Terminal result of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost(LoseReason),
}

impl Outcome {
    /// Check if this is a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }

    /// Check if this is a loss.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Lost(_))
    }
}

/// Decides terminal transitions from a `RunState`.
pub struct OutcomeEvaluator;

impl OutcomeEvaluator {
    /// Check if the board itself is cleared.
    ///
    /// In strip mode picked tiles leave the pool, so an empty pool means
    /// cleared. Otherwise every tile must be picked or eliminated.
    #[must_use]
    pub fn board_cleared(state: &RunState, strip_on_select: bool) -> bool {
        if strip_on_select {
            state.pool.is_empty()
        } else {
            state.pool.all_resolved()
        }
    }

    /// The outcome the run should enter now, if any.
    ///
    /// Returns `None` if the run continues or is already over.
    #[must_use]
    pub fn evaluate(state: &RunState, strip_on_select: bool) -> Option<Outcome> {
        if state.outcome.is_some() || !state.clears.is_empty() {
            return None;
        }

        let hand_empty = state.slot.is_empty() && state.discard.is_empty();
        if hand_empty && Self::board_cleared(state, strip_on_select) {
            return Some(Outcome::Won);
        }

        if state.slot.is_full() {
            return Some(Outcome::Lost(LoseReason::SlotFull));
        }

        let nothing_to_pick = state.pool.selectable().next().is_none() && state.discard.is_empty();
        if nothing_to_pick && !state.slot.is_empty() {
            return Some(Outcome::Lost(LoseReason::Stranded));
        }

        None
    }
}
