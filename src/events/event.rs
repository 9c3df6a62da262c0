//! Events reported to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{TileId, TileKind, MATCH_SIZE};
use crate::rules::LoseReason;
use crate::schedule::ClearId;

/// Something the presentation layer may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile entered the slot without completing a triplet.
    Picked {
        tile: TileId,
        kind: TileKind,
        /// Slot length after the pick.
        slot_len: usize,
    },

    /// A triplet left the slot and the run goes on.
    Cleared {
        clear: ClearId,
        kind: TileKind,
        tiles: [TileId; MATCH_SIZE],
    },

    /// The board is cleared.
    Won,

    /// The run is lost.
    Lost { reason: LoseReason },
}

impl GameEvent {
    /// Check if this event ends the run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(GameEvent::Won.is_terminal());
        assert!(GameEvent::Lost { reason: LoseReason::SlotFull }.is_terminal());
        assert!(!GameEvent::Picked {
            tile: TileId::new(0),
            kind: TileKind::new(0),
            slot_len: 1,
        }
        .is_terminal());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Cleared {
            clear: ClearId::new(2),
            kind: TileKind::new(1),
            tiles: [TileId::new(4), TileId::new(5), TileId::new(6)],
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
