//! # Sidescroller - chunk-streamed 2D terrain
//!
//! Procedurally generated terrain strips streamed around a single player,
//! with per-frame gravity and AABB collision against the loaded blocks.

pub mod config;
pub mod entity;
pub mod render;
pub mod world;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use world::World;

/// Common imports for internal use
pub mod prelude {
    pub use crate::entity::{Camera, InputState, Key, KeyQuery, Player};
    pub use crate::world::{
        BiomeType, Block, BlockKind, ChunkManager, TerrainChunk, World, WorldGenerator,
        CHUNK_HEIGHT, CHUNK_SIZE, CHUNK_WIDTH,
    };
    pub use glam::Vec2;
}
