//! Level progression and player settings.
//!
//! A store can be loaded from TOML. Every key is optional:
//!
//! ```toml
//! [settings]
//! discard_batch = 3
//! undo_budget = 1
//! strip_on_select = false
//! clear_delay_ms = 100
//!
//! [[levels]]
//! symbol_count = 4
//! layer_count = 2
//!
//! [[levels]]
//! symbol_count = 15
//! layer_count = 6
//! trap = true
//! ```
//!
//! A missing `[[levels]]` list falls back to the default table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, LevelConfig, RunConfig, Viewport, SLOT_CAPACITY};
use crate::rules::UndoBudget;

use super::levels::LevelTable;

/// Rules the player runs with, independent of the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub discard_batch: usize,
    pub undo_budget: u32,
    pub strip_on_select: bool,
    pub clear_delay: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            discard_batch: default_discard_batch(),
            undo_budget: default_undo_budget(),
            strip_on_select: false,
            clear_delay: Duration::from_millis(default_clear_delay_ms()),
        }
    }
}

impl StoreSettings {
    /// Check the settings against the slot size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discard_batch == 0 || self.discard_batch > SLOT_CAPACITY {
            return Err(ConfigError::InvalidDiscardBatch {
                batch: self.discard_batch,
                capacity: SLOT_CAPACITY,
            });
        }
        Ok(())
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlStore {
    #[serde(default)]
    settings: TomlSettings,
    #[serde(default)]
    levels: Vec<TomlLevel>,
}

#[derive(Deserialize, Debug)]
struct TomlSettings {
    #[serde(default = "default_discard_batch")]
    discard_batch: usize,
    #[serde(default = "default_undo_budget")]
    undo_budget: u32,
    #[serde(default)]
    strip_on_select: bool,
    #[serde(default = "default_clear_delay_ms")]
    clear_delay_ms: u64,
}

impl Default for TomlSettings {
    fn default() -> Self {
        Self {
            discard_batch: default_discard_batch(),
            undo_budget: default_undo_budget(),
            strip_on_select: false,
            clear_delay_ms: default_clear_delay_ms(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct TomlLevel {
    symbol_count: usize,
    layer_count: usize,
    #[serde(default)]
    trap: bool,
}

fn default_discard_batch() -> usize {
    3
}
fn default_undo_budget() -> u32 {
    1
}
fn default_clear_delay_ms() -> u64 {
    100
}

/// Level progression, settings and the per-run undo allowance.
///
/// Implements `UndoBudget`, so it can be handed to the engine directly:
///
/// ```
/// use tile_triplet::core::Viewport;
/// use tile_triplet::game::TileGame;
/// use tile_triplet::store::RunStore;
///
/// let store = RunStore::default();
/// let config = store.run_config(Viewport::FALLBACK);
/// let mut game = TileGame::new(config, store, 7).unwrap();
///
/// game.budget_mut().advance_level();
/// let next = game.budget().run_config(Viewport::FALLBACK);
/// game.initialize(next).unwrap();
/// assert_eq!(game.config().level.symbol_count, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunStore {
    settings: StoreSettings,
    levels: LevelTable,
    level_index: usize,
    remaining_undo: u32,
}

impl Default for RunStore {
    fn default() -> Self {
        Self::new(StoreSettings::default(), LevelTable::default())
    }
}

impl RunStore {
    /// Create a store at the first level with a full undo budget.
    #[must_use]
    pub fn new(settings: StoreSettings, levels: LevelTable) -> Self {
        Self {
            remaining_undo: settings.undo_budget,
            settings,
            levels,
            level_index: 0,
        }
    }

    /// Load settings and levels from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let parsed: TomlStore = toml::from_str(text)?;

        let settings = StoreSettings {
            discard_batch: parsed.settings.discard_batch,
            undo_budget: parsed.settings.undo_budget,
            strip_on_select: parsed.settings.strip_on_select,
            clear_delay: Duration::from_millis(parsed.settings.clear_delay_ms),
        };
        settings.validate()?;

        let levels = if parsed.levels.is_empty() {
            LevelTable::default()
        } else {
            LevelTable::new(
                parsed
                    .levels
                    .into_iter()
                    .map(|l| LevelConfig::new(l.symbol_count, l.layer_count, l.trap))
                    .collect(),
            )?
        };

        log::debug!(
            "loaded {} levels (discard batch {}, undo budget {})",
            levels.len(),
            settings.discard_batch,
            settings.undo_budget
        );
        Ok(Self::new(settings, levels))
    }

    // === Levels ===

    /// The current level.
    #[must_use]
    pub fn level(&self) -> LevelConfig {
        // The index is kept in bounds by every mutator
        self.levels.get(self.level_index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    #[must_use]
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// Check if the current level is the last one.
    #[must_use]
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.levels.len()
    }

    /// Move to the next level. Returns false on the last level.
    pub fn advance_level(&mut self) -> bool {
        if self.is_last_level() {
            return false;
        }
        self.level_index += 1;
        log::debug!("advanced to level {}", self.level_index);
        true
    }

    /// Jump to a level. Returns false if out of range.
    pub fn set_level(&mut self, index: usize) -> bool {
        if index >= self.levels.len() {
            return false;
        }
        self.level_index = index;
        true
    }

    /// Append a level to the table.
    pub fn add_level(&mut self, level: LevelConfig) -> Result<(), ConfigError> {
        self.levels.push(level)
    }

    /// Replace the whole table and return to the first level.
    pub fn replace_levels(&mut self, levels: Vec<LevelConfig>) -> Result<(), ConfigError> {
        self.levels = LevelTable::new(levels)?;
        self.level_index = 0;
        Ok(())
    }

    // === Settings ===

    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Replace the settings. A new undo budget applies from the next run.
    pub fn update_settings(&mut self, settings: StoreSettings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Restore default settings.
    pub fn reset_settings(&mut self) {
        self.settings = StoreSettings::default();
    }

    /// Engine configuration for the current level.
    #[must_use]
    pub fn run_config(&self, viewport: Viewport) -> RunConfig {
        RunConfig::new(self.level())
            .with_viewport(viewport)
            .with_discard_batch(self.settings.discard_batch)
            .with_strip_on_select(self.settings.strip_on_select)
            .with_clear_delay(self.settings.clear_delay)
    }

    #[must_use]
    pub fn remaining_undo(&self) -> u32 {
        self.remaining_undo
    }
}

impl UndoBudget for RunStore {
    fn consume(&mut self) -> bool {
        if self.remaining_undo == 0 {
            return false;
        }
        self.remaining_undo -= 1;
        true
    }

    fn reset(&mut self) {
        self.remaining_undo = self.settings.undo_budget;
    }

    fn remaining(&self) -> u32 {
        self.remaining_undo
    }
}
