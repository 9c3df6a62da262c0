//! Optional callbacks, one per event kind.

use super::event::GameEvent;

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Caller-supplied callbacks.
///
/// Every callback is optional. `on_pick` runs inside `select`; `on_clear`,
/// `on_win` and `on_lose` run when the triggering clear completes (or inside
/// `select` for a loss that needs no clear).
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tile_triplet::events::{EventHandlers, GameEvent};
///
/// let wins = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&wins);
/// let mut handlers = EventHandlers::new().on_win(move |_| counter.set(counter.get() + 1));
///
/// handlers.dispatch(&GameEvent::Won);
/// assert_eq!(wins.get(), 1);
/// ```
#[derive(Default)]
pub struct EventHandlers {
    pick: Option<Callback>,
    clear: Option<Callback>,
    win: Option<Callback>,
    lose: Option<Callback>,
}

impl EventHandlers {
    /// Create handlers with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after a pick that did not complete a triplet.
    #[must_use]
    pub fn on_pick(mut self, f: impl FnMut(&GameEvent) + 'static) -> Self {
        self.pick = Some(Box::new(f));
        self
    }

    /// Called after a triplet is removed and the run continues.
    #[must_use]
    pub fn on_clear(mut self, f: impl FnMut(&GameEvent) + 'static) -> Self {
        self.clear = Some(Box::new(f));
        self
    }

    /// Called once when the run is won.
    #[must_use]
    pub fn on_win(mut self, f: impl FnMut(&GameEvent) + 'static) -> Self {
        self.win = Some(Box::new(f));
        self
    }

    /// Called once when the run is lost.
    #[must_use]
    pub fn on_lose(mut self, f: impl FnMut(&GameEvent) + 'static) -> Self {
        self.lose = Some(Box::new(f));
        self
    }

    /// Route an event to its callback, if one is set.
    pub fn dispatch(&mut self, event: &GameEvent) {
        let slot = match event {
            GameEvent::Picked { .. } => &mut self.pick,
            GameEvent::Cleared { .. } => &mut self.clear,
            GameEvent::Won => &mut self.win,
            GameEvent::Lost { .. } => &mut self.lose,
        };
        if let Some(callback) = slot {
            callback(event);
        }
    }
}

impl std::fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandlers")
            .field("pick", &self.pick.is_some())
            .field("clear", &self.clear.is_some())
            .field("win", &self.win.is_some())
            .field("lose", &self.lose.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::core::{TileId, TileKind};
    use crate::rules::LoseReason;

    #[test]
    fn test_dispatch_routes_by_kind() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());

        let mut handlers = EventHandlers::new()
            .on_pick(move |_| a.borrow_mut().push("pick"))
            .on_clear(move |_| b.borrow_mut().push("clear"))
            .on_win(move |_| c.borrow_mut().push("win"))
            .on_lose(move |_| d.borrow_mut().push("lose"));

        handlers.dispatch(&GameEvent::Picked {
            tile: TileId::new(0),
            kind: TileKind::new(0),
            slot_len: 1,
        });
        handlers.dispatch(&GameEvent::Lost { reason: LoseReason::SlotFull });
        handlers.dispatch(&GameEvent::Won);

        assert_eq!(*log.borrow(), vec!["pick", "lose", "win"]);
    }

    #[test]
    fn test_missing_callbacks_are_skipped() {
        let mut handlers = EventHandlers::new();
        handlers.dispatch(&GameEvent::Won);
        assert_eq!(
            format!("{:?}", handlers),
            "EventHandlers { pick: false, clear: false, win: false, lose: false }"
        );
    }
}
