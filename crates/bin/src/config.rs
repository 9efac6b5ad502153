//! Simulation configuration.

use quadtree::TreeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const CONFIG_PATH: &str = "quadsim.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub sprites: SpriteConfig,
    #[serde(default)]
    pub sim: LoopConfig,
}

impl SimConfig {
    /// Load configuration from `quadsim.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(CONFIG_PATH);
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml_str(&contents)?
        } else {
            info!("No {} found, creating default config", CONFIG_PATH);
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.tree.validate()?;
        anyhow::ensure!(
            self.world.width > 0.0 && self.world.height > 0.0,
            "world size must be positive, got {}x{}",
            self.world.width,
            self.world.height
        );
        anyhow::ensure!(
            self.sprites.min_size > 0.0 && self.sprites.min_size <= self.sprites.max_size,
            "sprite sizes must satisfy 0 < min_size <= max_size, got {}..{}",
            self.sprites.min_size,
            self.sprites.max_size
        );
        anyhow::ensure!(self.sprites.max_speed >= 0.0, "max_speed must not be negative");
        anyhow::ensure!(self.sim.tick_interval_ms > 0, "tick_interval_ms must be positive");
        Ok(())
    }
}

/// World extent. The world spans `0..width` by `0..height`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    #[serde(default = "default_world_size")]
    pub width: f32,
    #[serde(default = "default_world_size")]
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_world_size(),
            height: default_world_size(),
        }
    }
}

fn default_world_size() -> f32 {
    1000.0
}

/// Sprite spawning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpriteConfig {
    /// Number of sprites to spawn.
    #[serde(default = "default_sprite_count")]
    pub count: usize,
    /// Smallest half extent of a sprite's box.
    #[serde(default = "default_sprite_min_size")]
    pub min_size: f32,
    /// Largest half extent of a sprite's box.
    #[serde(default = "default_sprite_max_size")]
    pub max_size: f32,
    /// Speed cap per axis, in world units per second.
    #[serde(default = "default_sprite_max_speed")]
    pub max_speed: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            count: default_sprite_count(),
            min_size: default_sprite_min_size(),
            max_size: default_sprite_max_size(),
            max_speed: default_sprite_max_speed(),
        }
    }
}

fn default_sprite_count() -> usize {
    500
}
fn default_sprite_min_size() -> f32 {
    2.0
}
fn default_sprite_max_size() -> f32 {
    12.0
}
fn default_sprite_max_speed() -> f32 {
    120.0
}

/// Tick loop settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoopConfig {
    /// Number of ticks to run before exiting.
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            tick_interval_ms: default_tick_interval(),
        }
    }
}

fn default_ticks() -> u64 {
    300
}
fn default_tick_interval() -> u64 {
    16
}
