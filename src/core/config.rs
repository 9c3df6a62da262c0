//! Level and run configuration.
//!
//! - `LevelConfig`: what a level is made of (symbols, layers, trap)
//! - `Viewport`: the play area the layout is centred in
//! - `RunConfig`: a level plus the run rules (strip mode, discard batch,
//!   geometry, clear delay)
//!
//! All types are plain data with builder methods; call `validate` before
//! handing a hand-built config to the engine (the engine does this itself).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of tiles the selection slot can hold. Filling it is a loss.
pub const SLOT_CAPACITY: usize = 7;

/// Tiles of one kind that form a triplet.
pub const MATCH_SIZE: usize = 3;

/// Composition of a single level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Number of distinct tile kinds.
    pub symbol_count: usize,

    /// Controls how many copies of each kind exist (`3 x layer_count`).
    pub layer_count: usize,

    /// May strand one group per kind, making the level unsolvable.
    pub trap: bool,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            symbol_count: 4,
            layer_count: 2,
            trap: true,
        }
    }
}

impl LevelConfig {
    /// Create a level configuration.
    #[must_use]
    pub const fn new(symbol_count: usize, layer_count: usize, trap: bool) -> Self {
        Self {
            symbol_count,
            layer_count,
            trap,
        }
    }

    /// Copies of each kind before any trap removal.
    #[must_use]
    pub const fn copies_per_kind(&self) -> usize {
        MATCH_SIZE * self.layer_count
    }

    /// Total tiles before any trap removal.
    #[must_use]
    pub const fn total_tiles(&self) -> usize {
        self.symbol_count * self.copies_per_kind()
    }

    /// Check the level can be generated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol_count == 0 {
            return Err(ConfigError::NoSymbols);
        }
        if self.symbol_count > usize::from(u16::MAX) {
            return Err(ConfigError::TooManySymbols(self.symbol_count));
        }
        if self.layer_count == 0 {
            return Err(ConfigError::NoLayers);
        }
        Ok(())
    }
}

/// Play area dimensions in screen units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Used whenever the real play area has no size yet.
    pub const FALLBACK: Self = Self {
        width: 400.0,
        height: 640.0,
    };

    /// Create a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// This viewport, or `FALLBACK` if it is empty.
    #[must_use]
    pub fn or_fallback(self) -> Self {
        if self.is_empty() {
            Self::FALLBACK
        } else {
            self
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Complete configuration for one run of a level.
///
/// The undo budget is not part of this struct: it is owned by the run store
/// and reaches the engine through the `UndoBudget` capability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub level: LevelConfig,

    /// Remove picked tiles from the pool instead of only marking them.
    pub strip_on_select: bool,

    /// Tiles moved per discard.
    pub discard_batch: usize,

    pub viewport: Viewport,

    /// Grid pitch; also the overlap threshold between layers.
    pub tile_size: f32,

    /// Presentation delay between completing a triplet and removing it.
    pub clear_delay: Duration,

    /// Chance that a trap level actually strands a group.
    pub trap_probability: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            level: LevelConfig::default(),
            strip_on_select: false,
            discard_batch: 3,
            viewport: Viewport::FALLBACK,
            tile_size: 40.0,
            clear_delay: Duration::from_millis(100),
            trap_probability: 0.99,
        }
    }
}

impl RunConfig {
    /// Create a run configuration for a level with default rules.
    #[must_use]
    pub fn new(level: LevelConfig) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Enable or disable strip mode.
    #[must_use]
    pub fn with_strip_on_select(mut self, strip: bool) -> Self {
        self.strip_on_select = strip;
        self
    }

    /// Set the discard batch size.
    #[must_use]
    pub fn with_discard_batch(mut self, batch: usize) -> Self {
        self.discard_batch = batch;
        self
    }

    /// Set the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the tile size.
    #[must_use]
    pub fn with_tile_size(mut self, size: f32) -> Self {
        self.tile_size = size;
        self
    }

    /// Set the clear delay.
    #[must_use]
    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    /// Set the trap probability.
    #[must_use]
    pub fn with_trap_probability(mut self, probability: f64) -> Self {
        self.trap_probability = probability;
        self
    }

    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level.validate()?;
        if self.discard_batch == 0 || self.discard_batch > SLOT_CAPACITY {
            return Err(ConfigError::InvalidDiscardBatch {
                batch: self.discard_batch,
                capacity: SLOT_CAPACITY,
            });
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        if !(0.0..=1.0).contains(&self.trap_probability) {
            return Err(ConfigError::InvalidTrapProbability(self.trap_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults() {
        let level = LevelConfig::default();
        assert_eq!(level.symbol_count, 4);
        assert_eq!(level.layer_count, 2);
        assert!(level.trap);
        assert_eq!(level.copies_per_kind(), 6);
        assert_eq!(level.total_tiles(), 24);
    }

    #[test]
    fn test_level_validate() {
        assert!(LevelConfig::new(1, 1, false).validate().is_ok());
        assert!(matches!(
            LevelConfig::new(0, 1, false).validate(),
            Err(ConfigError::NoSymbols)
        ));
        assert!(matches!(
            LevelConfig::new(1, 0, false).validate(),
            Err(ConfigError::NoLayers)
        ));
        assert!(matches!(
            LevelConfig::new(70_000, 1, false).validate(),
            Err(ConfigError::TooManySymbols(70_000))
        ));
    }

    #[test]
    fn test_viewport_fallback() {
        assert!(Viewport::new(0.0, 300.0).is_empty());
        assert!(Viewport::new(300.0, 0.0).is_empty());
        assert!(!Viewport::new(300.0, 200.0).is_empty());

        assert_eq!(Viewport::new(0.0, 0.0).or_fallback(), Viewport::FALLBACK);
        let real = Viewport::new(800.0, 600.0);
        assert_eq!(real.or_fallback(), real);
    }

    #[test]
    fn test_run_config_builder() {
        let config = RunConfig::new(LevelConfig::new(6, 3, false))
            .with_strip_on_select(true)
            .with_discard_batch(2)
            .with_viewport(Viewport::new(800.0, 600.0))
            .with_tile_size(32.0)
            .with_clear_delay(Duration::from_millis(250))
            .with_trap_probability(0.5);

        assert_eq!(config.level.symbol_count, 6);
        assert!(config.strip_on_select);
        assert_eq!(config.discard_batch, 2);
        assert_eq!(config.tile_size, 32.0);
        assert_eq!(config.clear_delay, Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_config_validate() {
        assert!(RunConfig::default().validate().is_ok());

        let bad_batch = RunConfig::default().with_discard_batch(0);
        assert!(matches!(
            bad_batch.validate(),
            Err(ConfigError::InvalidDiscardBatch { batch: 0, .. })
        ));

        let big_batch = RunConfig::default().with_discard_batch(SLOT_CAPACITY + 1);
        assert!(big_batch.validate().is_err());

        let bad_size = RunConfig::default().with_tile_size(f32::NAN);
        assert!(matches!(bad_size.validate(), Err(ConfigError::InvalidTileSize(_))));

        let bad_odds = RunConfig::default().with_trap_probability(1.5);
        assert!(matches!(
            bad_odds.validate(),
            Err(ConfigError::InvalidTrapProbability(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = RunConfig::default().with_strip_on_select(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
