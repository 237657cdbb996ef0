//! World management - terrain chunks, generation, streaming and physics

pub mod biome;
mod block;
pub mod chunk_manager;
pub mod generation;
pub mod player_physics;
pub mod rng_trait;
#[allow(clippy::module_inception)]
mod world;

pub use biome::{select_biome, BiomeDefinition, BiomeType, Color};
pub use block::{Block, BlockKind, Rect};
pub use chunk_manager::{ChunkLoadReport, ChunkManager, TerrainChunk};
pub use generation::WorldGenerator;
pub use player_physics::{PhysicsConfig, PhysicsOutcome, PlayerPhysicsSystem};
pub use rng_trait::WorldRng;
pub use world::{FrameReport, FrameSnapshot, World};

/// World columns per chunk
pub const CHUNK_SIZE: i32 = 16;
/// Width of one block column in pixels
pub const CHUNK_WIDTH: i32 = 32;
/// Height of one block row in pixels
pub const CHUNK_HEIGHT: i32 = 19;
/// Horizontal extent of one chunk in pixels
pub const CHUNK_PIXEL_WIDTH: i32 = CHUNK_SIZE * CHUNK_WIDTH;

/// Viewport width; the camera keeps the player centered inside it
pub const CANVAS_WIDTH: f32 = 800.0;
/// Viewport height; terrain rows are anchored to its bottom edge
pub const CANVAS_HEIGHT: f32 = 600.0;
