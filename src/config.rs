//! Game configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `config.ron` file (if exists)
//! 3. Environment variables prefixed with `SIDESCROLLER_`
//!
//! Example environment variable: `SIDESCROLLER_PLAYER__GRAVITY=0.8`

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::entity::Player;
use crate::world::{ChunkManager, PhysicsConfig};

/// Main game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GameConfig {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub world: WorldConfig,
}

/// Player size, spawn point and per-frame physics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal movement in pixels per frame
    pub move_speed: f32,
    /// Added to y every frame, in pixels
    pub gravity: f32,
    /// Subtracted from y when jumping off a block, in pixels
    pub jump_impulse: f32,
    pub width: f32,
    pub height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let physics = PhysicsConfig::default();
        Self {
            move_speed: physics.move_speed,
            gravity: physics.gravity,
            jump_impulse: physics.jump_impulse,
            width: Player::WIDTH,
            height: Player::HEIGHT,
            spawn_x: Player::SPAWN.x,
            spawn_y: Player::SPAWN.y,
        }
    }
}

impl PlayerConfig {
    pub fn physics(&self) -> PhysicsConfig {
        PhysicsConfig {
            move_speed: self.move_speed,
            gravity: self.gravity,
            jump_impulse: self.jump_impulse,
        }
    }

    pub fn spawn_player(&self) -> Player {
        Player::with_size(
            glam::Vec2::new(self.spawn_x, self.spawn_y),
            self.width,
            self.height,
        )
    }
}

/// Terrain streaming settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// World seed; a random one is drawn each session when unset
    pub seed: Option<u64>,
    /// Chunks within this distance of the player chunk are always loaded
    pub load_radius: i32,
    /// Chunks farther than this are evicted
    pub evict_radius: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            load_radius: ChunkManager::DEFAULT_LOAD_RADIUS,
            evict_radius: ChunkManager::DEFAULT_EVICT_RADIUS,
        }
    }
}

impl GameConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `config.ron` file (if exists)
    /// 3. Environment variables prefixed with `SIDESCROLLER_` (highest priority)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        Self::load_from("config")
    }

    /// Same as [`GameConfig::load`] with a custom file name (extension optional)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(file: &str) -> Result<Self> {
        use anyhow::Context;
        use config::{Config, Environment, File};

        let defaults = Self::default();
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("player.move_speed", defaults.player.move_speed as f64)?
            .set_default("player.gravity", defaults.player.gravity as f64)?
            .set_default("player.jump_impulse", defaults.player.jump_impulse as f64)?
            .set_default("player.width", defaults.player.width as f64)?
            .set_default("player.height", defaults.player.height as f64)?
            .set_default("player.spawn_x", defaults.player.spawn_x as f64)?
            .set_default("player.spawn_y", defaults.player.spawn_y as f64)?
            .set_default("world.load_radius", defaults.world.load_radius as i64)?
            .set_default("world.evict_radius", defaults.world.evict_radius as i64)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(file)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (SIDESCROLLER_PLAYER__GRAVITY, etc.)
            .add_source(
                Environment::with_prefix("SIDESCROLLER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let game_config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        game_config.validate()?;
        Ok(game_config)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let player = &self.player;
        ensure!(
            player.width > 0.0 && player.height > 0.0,
            "player size must be positive, got {}x{}",
            player.width,
            player.height
        );
        ensure!(
            player.move_speed.is_finite() && player.gravity.is_finite() && player.jump_impulse.is_finite(),
            "player physics values must be finite"
        );
        ensure!(
            self.world.load_radius >= 0,
            "load_radius must not be negative, got {}",
            self.world.load_radius
        );
        ensure!(
            self.world.evict_radius >= self.world.load_radius,
            "evict_radius ({}) must be at least load_radius ({})",
            self.world.evict_radius,
            self.world.load_radius
        );
        Ok(())
    }
}
