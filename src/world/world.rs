//! World - the simulation context driven once per frame

use serde::Serialize;

use super::chunk_manager::{ChunkLoadReport, ChunkManager, TerrainChunk};
use super::generation::WorldGenerator;
use super::player_physics::{PhysicsConfig, PhysicsOutcome, PlayerPhysicsSystem};
use super::Block;
use crate::config::GameConfig;
use crate::entity::{Camera, KeyQuery, Player};

/// Everything a frame changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub physics: PhysicsOutcome,
    pub chunks: ChunkLoadReport,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrameSnapshot<'a> {
    pub chunks: &'a [TerrainChunk],
    pub player: Player,
    pub camera: Camera,
}

impl<'a> FrameSnapshot<'a> {
    /// Terrain blocks in terrain order
    pub fn blocks(&self) -> impl Iterator<Item = &'a Block> {
        let chunks: &'a [TerrainChunk] = self.chunks;
        chunks.iter().flat_map(|c| c.blocks.iter())
    }
}

/// The game world: terrain, the single player and the camera
pub struct World {
    generator: WorldGenerator,
    chunks: ChunkManager,
    pub player: Player,
    pub camera: Camera,
    pub physics: PhysicsConfig,
    frame: u64,
}

impl World {
    /// Build a world from configuration and load the chunks around the spawn point
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.world.seed.unwrap_or_else(rand::random);
        let mut world = Self {
            generator: WorldGenerator::new(seed),
            chunks: ChunkManager::with_radii(config.world.load_radius, config.world.evict_radius),
            player: config.player.spawn_player(),
            camera: Camera::default(),
            physics: config.player.physics(),
            frame: 0,
        };

        world.camera.follow(&world.player);
        let report = world.chunks.load_chunks(world.player.position.x, &world.generator);

        log::info!(
            "Created world (seed: {}): chunks {:?}, {} blocks",
            seed,
            world.chunks.loaded_chunks(),
            world.chunks.block_count()
        );
        log::info!("  Player starts at: {:?}", world.player.position);
        log::debug!("  Initial load: {:?}", report.loaded);

        world
    }

    /// Default configuration with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        let mut config = GameConfig::default();
        config.world.seed = Some(seed);
        Self::new(&config)
    }

    /// Advance one frame.
    ///
    /// Physics runs against the current terrain. The camera and the chunk
    /// window then follow the player as it was at the start of the frame,
    /// so streaming lags movement by one frame.
    pub fn step<K: KeyQuery + ?Sized>(&mut self, input: &K) -> FrameReport {
        let previous = self.player;

        // Chunks the body can touch after this frame's horizontal move
        let reach = self.physics.move_speed.abs();
        let span_min = previous.position.x - reach;
        let span_max = previous.position.x + previous.width + reach;
        let physics = PlayerPhysicsSystem::update(
            &mut self.player,
            input,
            self.chunks.blocks_in_span(span_min, span_max),
            &self.physics,
        );

        self.camera.follow(&previous);
        let chunks = self.chunks.load_chunks(previous.position.x, &self.generator);

        self.frame += 1;
        if !chunks.is_empty() {
            log::debug!(
                "Frame {}: player chunk {}, loaded {:?}, evicted {:?}",
                self.frame,
                chunks.player_chunk,
                chunks.loaded,
                chunks.evicted
            );
        }

        FrameReport {
            frame: self.frame,
            physics,
            chunks,
        }
    }

    /// Run `frames` steps with the same input
    pub fn run<K: KeyQuery + ?Sized>(&mut self, input: &K, frames: u64) -> Vec<FrameReport> {
        (0..frames).map(|_| self.step(input)).collect()
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            chunks: self.chunks.chunks(),
            player: self.player,
            camera: self.camera,
        }
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed
    }

    pub fn generator(&self) -> &WorldGenerator {
        &self.generator
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn chunk_manager(&self) -> &ChunkManager {
        &self.chunks
    }

    /// Get all loaded chunk indices, ascending
    pub fn loaded_chunks(&self) -> Vec<i32> {
        self.chunks.loaded_chunks()
    }

    /// Move the player and re-stream terrain around the new position
    pub fn teleport_player(&mut self, position: glam::Vec2) -> ChunkLoadReport {
        self.player.position = position;
        self.camera.follow(&self.player);
        self.chunks.load_chunks(position.x, &self.generator)
    }
}
