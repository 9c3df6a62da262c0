//! Configuration errors.
//!
//! Gameplay calls never fail (an invalid pick is simply ignored), so the only
//! error surface is configuration: values that cannot produce a level, and
//! level tables that fail to parse.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("symbol count must be at least 1")]
    NoSymbols,

    #[error("symbol count {0} exceeds the supported maximum of {max}", max = u16::MAX)]
    TooManySymbols(usize),

    #[error("layer count must be at least 1")]
    NoLayers,

    #[error("discard batch must be between 1 and {capacity}, got {batch}")]
    InvalidDiscardBatch { batch: usize, capacity: usize },

    #[error("tile size must be a positive finite number, got {0}")]
    InvalidTileSize(f32),

    #[error("trap probability must be within [0, 1], got {0}")]
    InvalidTrapProbability(f64),

    #[error("level table is empty")]
    EmptyLevelTable,

    #[error("level {index}: {source}")]
    InvalidLevel {
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("failed to parse level table: {0}")]
    Toml(#[from] toml::de::Error),
}
