//! Ordered list of level configurations.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, LevelConfig};

/// The levels of a game, in play order.
///
/// Never empty, and every entry passes `LevelConfig::validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelConfig>", into = "Vec<LevelConfig>")]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
}

impl Default for LevelTable {
    /// Six levels of growing size; only the last one sets the trap.
    fn default() -> Self {
        Self {
            levels: vec![
                LevelConfig::new(4, 2, false),
                LevelConfig::new(6, 3, false),
                LevelConfig::new(8, 4, false),
                LevelConfig::new(10, 5, false),
                LevelConfig::new(12, 6, false),
                LevelConfig::new(15, 6, true),
            ],
        }
    }
}

impl LevelTable {
    /// Build a table, checking every level.
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::EmptyLevelTable);
        }
        for (index, level) in levels.iter().enumerate() {
            Self::check(index, level)?;
        }
        Ok(Self { levels })
    }

    fn check(index: usize, level: &LevelConfig) -> Result<(), ConfigError> {
        level.validate().map_err(|e| ConfigError::InvalidLevel {
            index,
            source: Box::new(e),
        })
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Append a level.
    pub fn push(&mut self, level: LevelConfig) -> Result<(), ConfigError> {
        Self::check(self.levels.len(), &level)?;
        self.levels.push(level);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelConfig> + '_ {
        self.levels.iter()
    }
}

impl TryFrom<Vec<LevelConfig>> for LevelTable {
    type Error = ConfigError;

    fn try_from(levels: Vec<LevelConfig>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<LevelTable> for Vec<LevelConfig> {
    fn from(table: LevelTable) -> Self {
        table.levels
    }
}
