//! The game engine.
//!
//! `TileGame` owns the run state and exposes the player's moves:
//!
//! - `select` / `select_from_discard`: pick a tile into the slot
//! - `undo`: reverse the most recent pick, paid for from the undo budget
//! - `discard`: move the front of the slot to the discard pile
//! - `advance` / `complete_clear` / `flush_pending`: finish delayed clears
//!
//! Moves never fail. A move that is not allowed right now leaves the state
//! untouched and reports `Ignored` (or `false`).

use std::time::Duration;

use crate::board::{Clickability, TilePool};
use crate::core::{ConfigError, RunConfig, Tile, TileId, TileRng, TileRngState, TileState, MATCH_SIZE};
use crate::events::{EventHandlers, GameEvent};
use crate::layout::LayoutGenerator;
use crate::rules::{Outcome, OutcomeEvaluator, UndoBudget, UndoCounter};
use crate::schedule::{ClearId, PendingClear};
use crate::slot::{DiscardPile, SelectionSlot};

use super::state::RunState;

/// Result of a pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectResult {
    /// The pick was not allowed; nothing changed.
    Ignored,
    /// The tile entered the slot.
    Picked,
    /// The tile completed a triplet, removed when the clear completes.
    Matched(ClearId),
}

/// Tile-matching engine for one level at a time.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use tile_triplet::core::{LevelConfig, RunConfig};
/// use tile_triplet::game::{SelectResult, TileGame};
/// use tile_triplet::rules::UndoCounter;
///
/// let config = RunConfig::new(LevelConfig::new(1, 1, false));
/// let mut game = TileGame::new(config, UndoCounter::new(1), 42).unwrap();
///
/// // Pick whatever is uncovered until the triplet forms
/// let mut last = SelectResult::Ignored;
/// loop {
///     let Some(id) = game.pool().selectable().next() else { break };
///     last = game.select(id);
/// }
/// assert!(matches!(last, SelectResult::Matched(_)));
///
/// game.advance(Duration::from_millis(100));
/// assert!(game.won());
/// ```
pub struct TileGame<B: UndoBudget = UndoCounter> {
    config: RunConfig,
    state: RunState,
    rng: TileRng,
    budget: B,
    handlers: EventHandlers,
}

impl<B: UndoBudget> TileGame<B> {
    /// Create an engine and generate the first run.
    pub fn new(config: RunConfig, budget: B, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            config,
            state: RunState::default(),
            rng: TileRng::new(seed),
            budget,
            handlers: EventHandlers::new(),
        };
        game.restart();
        Ok(game)
    }

    /// Attach event callbacks (builder pattern).
    #[must_use]
    pub fn with_handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Replace the event callbacks.
    pub fn set_handlers(&mut self, handlers: EventHandlers) {
        self.handlers = handlers;
    }

    // === Lifecycle ===

    /// Start a new run with a new configuration.
    ///
    /// On error the current run is left untouched.
    pub fn initialize(&mut self, config: RunConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.restart();
        Ok(())
    }

    /// Start a new run with the current configuration.
    ///
    /// Cancels pending clears, regenerates the layout and refills the undo
    /// budget.
    pub fn restart(&mut self) {
        let mut clears = std::mem::take(&mut self.state.clears);
        let cancelled = clears.cancel_all();
        if cancelled > 0 {
            log::debug!("cancelled {} pending clears on restart", cancelled);
        }

        let layout = LayoutGenerator::new(&self.config).generate(&mut self.rng);
        self.state = RunState::from_layout(layout, clears);
        self.budget.reset();
    }

    // === Moves ===

    /// Pick a selectable tile from the board.
    pub fn select(&mut self, id: TileId) -> SelectResult {
        if !self.accepts_picks() {
            log::trace!("ignored select of {}: slot closed", id);
            return SelectResult::Ignored;
        }
        if !self.state.pool.get(id).is_some_and(Tile::is_selectable) {
            log::trace!("ignored select of {}: not selectable", id);
            return SelectResult::Ignored;
        }
        self.pick(id)
    }

    /// Pick a tile back out of the discard pile.
    pub fn select_from_discard(&mut self, id: TileId) -> SelectResult {
        if !self.accepts_picks() || !self.state.discard.take(id) {
            log::trace!("ignored discard pick of {}", id);
            return SelectResult::Ignored;
        }
        self.pick(id)
    }

    /// Reverse the most recent pick.
    ///
    /// Costs one unit of undo budget. Returns false, without spending
    /// anything, if the run is over or there is nothing to undo; returns
    /// false if the budget is exhausted.
    pub fn undo(&mut self) -> bool {
        if self.state.is_over() || self.state.history.is_empty() {
            return false;
        }
        if !self.budget.consume() {
            log::trace!("ignored undo: budget exhausted");
            return false;
        }
        let Some(id) = self.state.history.pop() else {
            return false;
        };

        let state = &mut self.state;
        state.pool.set_state(id, TileState::Locked);
        if self.config.strip_on_select {
            state.pool.restore(id);
        }
        state.slot.remove(id);
        state.discard.take(id);
        if let Some(clear) = state.clears.cancel_containing(id) {
            log::debug!("undo of {} cancelled {}", id, clear.id);
            state.slot.unmark_clearing(&clear.tiles);
        }
        state.last_selected = state.history.last();
        Clickability::propagate(&mut state.pool);

        log::debug!("undid {} ({} undos left)", id, self.budget.remaining());
        true
    }

    /// Move the front of the slot to the discard pile.
    ///
    /// Moves exactly `discard_batch` tiles, or nothing if the slot holds
    /// fewer.
    pub fn discard(&mut self) -> bool {
        let batch = self.config.discard_batch;
        if self.state.is_over() || self.state.slot.len() < batch {
            return false;
        }

        let state = &mut self.state;
        let moved = state.slot.drain_front(batch);
        for entry in moved.iter().filter(|e| e.clearing) {
            if let Some(clear) = state.clears.cancel_containing(entry.id) {
                log::debug!("discard cancelled {}", clear.id);
                state.slot.unmark_clearing(&clear.tiles);
            }
        }
        state.discard.extend(moved.iter().map(|e| e.id));
        state.discard_used = true;
        state.last_selected = None;

        log::debug!("discarded {} tiles", moved.len());
        true
    }

    // === Delayed clears ===

    /// Report elapsed time; completes every clear that is now due.
    ///
    /// Returns how many clears completed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.state.clears.advance(elapsed);
        self.finish_clears(due)
    }

    /// Complete one clear now, regardless of its countdown.
    ///
    /// Returns false for unknown, cancelled or already completed clears.
    pub fn complete_clear(&mut self, id: ClearId) -> bool {
        match self.state.clears.take(id) {
            Some(clear) => {
                self.finish_clears(vec![clear]);
                true
            }
            None => false,
        }
    }

    /// Complete every pending clear now.
    pub fn flush_pending(&mut self) -> usize {
        let all = self.state.clears.take_all();
        self.finish_clears(all)
    }

    // === Observation ===

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Full run state.
    #[must_use]
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn pool(&self) -> &TilePool {
        &self.state.pool
    }

    /// Get a tile.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.state.pool.get(id)
    }

    /// The selection slot.
    #[must_use]
    pub fn slot(&self) -> &SelectionSlot {
        &self.state.slot
    }

    /// The discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.state.discard
    }

    /// Terminal result, if reached.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    /// Check if the run was won.
    #[must_use]
    pub fn won(&self) -> bool {
        self.state.outcome.is_some_and(Outcome::is_win)
    }

    /// Check if the run was lost.
    #[must_use]
    pub fn lose_reached(&self) -> bool {
        self.state.outcome.is_some_and(Outcome::is_loss)
    }

    /// Check if undo can no longer do anything this run.
    #[must_use]
    pub fn undo_exhausted(&self) -> bool {
        self.state.is_over() || self.state.history.is_empty() || self.budget.remaining() == 0
    }

    /// Check if a discard has been used this run.
    #[must_use]
    pub fn discard_used(&self) -> bool {
        self.state.discard_used
    }

    /// The undo budget.
    #[must_use]
    pub fn budget(&self) -> &B {
        &self.budget
    }

    /// Mutable access to the undo budget.
    pub fn budget_mut(&mut self) -> &mut B {
        &mut self.budget
    }

    /// RNG position, for reproducing the next layout.
    #[must_use]
    pub fn rng_state(&self) -> TileRngState {
        self.rng.state()
    }

    // === Internals ===

    fn accepts_picks(&self) -> bool {
        !self.state.is_over() && !self.state.slot.is_full()
    }

    /// Common path of both pick entry points. The caller has checked the
    /// tile may be picked.
    fn pick(&mut self, id: TileId) -> SelectResult {
        let Some(kind) = self.state.pool.get(id).map(|t| t.kind) else {
            return SelectResult::Ignored;
        };

        let state = &mut self.state;
        state.pool.set_state(id, TileState::Selected);
        state.history.push(id);
        state.last_selected = Some(id);
        if self.config.strip_on_select {
            state.pool.withdraw(id);
        }
        Clickability::propagate(&mut state.pool);

        state.slot.insert(id, kind);
        let matching = state.slot.matching(kind);
        if matching.len() == MATCH_SIZE {
            let tiles = [matching[0], matching[1], matching[2]];
            state.slot.mark_clearing(&tiles);
            let clear = state.clears.schedule(kind, tiles, self.config.clear_delay);
            log::debug!("{} completed {} of {}", id, clear, kind);

            if self.config.clear_delay.is_zero() {
                self.complete_clear(clear);
            }
            return SelectResult::Matched(clear);
        }

        log::debug!("picked {} ({} in slot)", id, state.slot.len());
        let event = GameEvent::Picked {
            tile: id,
            kind,
            slot_len: state.slot.len(),
        };
        self.handlers.dispatch(&event);

        if let Some(outcome) = OutcomeEvaluator::evaluate(&self.state, self.config.strip_on_select) {
            self.conclude(outcome);
        }
        SelectResult::Picked
    }

    /// Remove every triplet in `batch`, then evaluate once.
    ///
    /// The run is judged only after the whole batch has left the slot.
    /// Earlier clears report `Cleared`; the last one reports the outcome
    /// if the run ended, `Cleared` otherwise.
    fn finish_clears(&mut self, batch: Vec<PendingClear>) -> usize {
        let Some(last) = batch.last().cloned() else {
            return 0;
        };

        for clear in &batch {
            for &id in &clear.tiles {
                self.state.slot.remove(id);
                self.state.pool.set_state(id, TileState::Cleared);
            }
            log::debug!("{} removed {} from the slot", clear.id, clear.kind);
        }
        self.state.last_selected = None;

        for clear in &batch[..batch.len() - 1] {
            self.handlers.dispatch(&Self::cleared_event(clear));
        }
        match OutcomeEvaluator::evaluate(&self.state, self.config.strip_on_select) {
            Some(outcome) => self.conclude(outcome),
            None => self.handlers.dispatch(&Self::cleared_event(&last)),
        }
        batch.len()
    }

    fn cleared_event(clear: &PendingClear) -> GameEvent {
        GameEvent::Cleared {
            clear: clear.id,
            kind: clear.kind,
            tiles: clear.tiles,
        }
    }

    fn conclude(&mut self, outcome: Outcome) {
        self.state.outcome = Some(outcome);
        log::info!("run over: {:?}", outcome);

        let event = match outcome {
            Outcome::Won => GameEvent::Won,
            Outcome::Lost(reason) => GameEvent::Lost { reason },
        };
        self.handlers.dispatch(&event);
    }
}
