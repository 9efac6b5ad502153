//! Tree capacity configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of items a leaf holds before it splits.
pub const MAX_ITEMS: usize = 20;
/// Default depth at which leaves stop splitting.
pub const MAX_DEPTH: u32 = 5;

/// Hard ceiling on `max_depth`. Quadrants this deep are already narrower
/// than f32 can resolve for any sensible world size.
pub const DEPTH_LIMIT: u32 = 24;

/// Errors produced while loading or validating a [`TreeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_items must be at least 1")]
    ZeroCapacity,

    #[error("max_depth {max_depth} exceeds the limit of {limit}")]
    DepthTooLarge { max_depth: u32, limit: u32 },

    #[error("Failed to parse tree config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Split thresholds shared by every node of one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Items a leaf may hold before it splits (advisory at `max_depth`).
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    /// Depth at which leaves no longer split.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl TreeConfig {
    pub fn new(max_items: usize, max_depth: u32) -> Result<Self, ConfigError> {
        let config = Self { max_items, max_depth };
        config.validate()?;
        Ok(config)
    }

    /// Parse a `[tree]`-style TOML table.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.max_depth > DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge {
                max_depth: self.max_depth,
                limit: DEPTH_LIMIT,
            });
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_items() -> usize {
    MAX_ITEMS
}
fn default_max_depth() -> u32 {
    MAX_DEPTH
}
