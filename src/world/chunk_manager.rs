//! Chunk lifecycle management - streaming terrain around the player

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::generation::WorldGenerator;
use super::{BiomeType, Block, CHUNK_PIXEL_WIDTH};

/// The blocks produced for one chunk index, kept in generation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainChunk {
    pub chunk_x: i32,
    pub biome: BiomeType,
    pub blocks: Vec<Block>,
}

impl TerrainChunk {
    /// World x range covered by this chunk
    pub fn pixel_range(&self) -> Range<f32> {
        chunk_pixel_range(self.chunk_x)
    }
}

/// Chunk index containing world x (floor division, negative x included)
pub fn chunk_index_for(world_x: f32) -> i32 {
    (world_x / CHUNK_PIXEL_WIDTH as f32).floor() as i32
}

/// Half-open world x range of a chunk
pub fn chunk_pixel_range(chunk_x: i32) -> Range<f32> {
    (chunk_x * CHUNK_PIXEL_WIDTH) as f32..((chunk_x + 1) * CHUNK_PIXEL_WIDTH) as f32
}

/// What a single `load_chunks` call changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkLoadReport {
    pub player_chunk: i32,
    pub loaded: Vec<i32>,
    pub evicted: Vec<i32>,
}

impl ChunkLoadReport {
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty() && self.evicted.is_empty()
    }
}

/// Manages chunk loading and eviction around the player.
///
/// Chunks are stored in the order they were loaded; iterating their blocks
/// yields the terrain collection in insertion order.
pub struct ChunkManager {
    chunks: Vec<TerrainChunk>,

    /// Chunks within this distance of the player chunk are always loaded
    pub load_radius: i32,

    /// Chunks farther than this from the player chunk are evicted
    pub evict_radius: i32,
}

impl ChunkManager {
    pub const DEFAULT_LOAD_RADIUS: i32 = 2;
    pub const DEFAULT_EVICT_RADIUS: i32 = 3;

    /// Create an empty manager with default radii
    pub fn new() -> Self {
        Self::with_radii(Self::DEFAULT_LOAD_RADIUS, Self::DEFAULT_EVICT_RADIUS)
    }

    pub fn with_radii(load_radius: i32, evict_radius: i32) -> Self {
        debug_assert!(load_radius <= evict_radius);
        Self {
            chunks: Vec::new(),
            load_radius,
            evict_radius,
        }
    }

    /// Stream terrain for a player at `player_x`.
    ///
    /// Generates every missing chunk within `load_radius` (ascending index),
    /// then evicts every chunk farther than `evict_radius` along with all of
    /// its blocks.
    pub fn load_chunks(&mut self, player_x: f32, generator: &WorldGenerator) -> ChunkLoadReport {
        let player_chunk = chunk_index_for(player_x);
        let mut report = ChunkLoadReport {
            player_chunk,
            ..Default::default()
        };

        for chunk_x in (player_chunk - self.load_radius)..=(player_chunk + self.load_radius) {
            if self.is_loaded(chunk_x) {
                continue;
            }

            let chunk = generator.generate_chunk(chunk_x);
            log::debug!(
                "[LOAD] Chunk {} ({}, {} blocks)",
                chunk_x,
                chunk.biome,
                chunk.blocks.len()
            );
            self.chunks.push(chunk);
            report.loaded.push(chunk_x);
        }

        let evict_radius = self.evict_radius;
        self.chunks.retain(|chunk| {
            let keep = (chunk.chunk_x - player_chunk).abs() <= evict_radius;
            if !keep {
                log::debug!("[EVICT] Chunk {} ({} blocks)", chunk.chunk_x, chunk.blocks.len());
                report.evicted.push(chunk.chunk_x);
            }
            keep
        });

        if !report.is_empty() {
            log::trace!(
                "Player chunk {}: loaded {:?}, evicted {:?}, {} chunks resident",
                player_chunk,
                report.loaded,
                report.evicted,
                self.chunks.len()
            );
        }

        report
    }

    /// Check if chunk is loaded
    pub fn is_loaded(&self, chunk_x: i32) -> bool {
        self.chunks.iter().any(|c| c.chunk_x == chunk_x)
    }

    /// Get a loaded chunk by index
    pub fn get_chunk(&self, chunk_x: i32) -> Option<&TerrainChunk> {
        self.chunks.iter().find(|c| c.chunk_x == chunk_x)
    }

    /// Loaded chunk indices, ascending
    pub fn loaded_chunks(&self) -> Vec<i32> {
        let mut indices: Vec<i32> = self.chunks.iter().map(|c| c.chunk_x).collect();
        indices.sort_unstable();
        indices
    }

    /// Loaded chunks in load order
    pub fn chunks(&self) -> &[TerrainChunk] {
        &self.chunks
    }

    /// All terrain blocks in load order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.chunks.iter().flat_map(|c| c.blocks.iter())
    }

    /// Blocks of every chunk whose x range intersects `[min_x, max_x)`.
    ///
    /// Blocks never cross chunk boundaries, so any block overlapping the
    /// span is yielded, still in load order.
    pub fn blocks_in_span(&self, min_x: f32, max_x: f32) -> impl Iterator<Item = &Block> {
        self.chunks
            .iter()
            .filter(move |c| {
                let range = c.pixel_range();
                min_x < range.end && max_x > range.start
            })
            .flat_map(|c| c.blocks.iter())
    }

    /// Get chunk count
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total resident blocks
    pub fn block_count(&self) -> usize {
        self.chunks.iter().map(|c| c.blocks.len()).sum()
    }

    /// Clear all chunks
    pub fn clear(&mut self) {
        self.chunks.clear();
    }
}

impl Default for ChunkManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_x_of(block: &Block) -> i32 {
        chunk_index_for(block.x)
    }

    #[test]
    fn test_new_creates_empty_manager() {
        let manager = ChunkManager::new();
        assert_eq!(manager.chunk_count(), 0);
        assert_eq!(manager.block_count(), 0);
        assert_eq!(manager.load_radius, 2);
        assert_eq!(manager.evict_radius, 3);
    }

    #[test]
    fn test_chunk_index_for() {
        assert_eq!(chunk_index_for(0.0), 0);
        assert_eq!(chunk_index_for(50.0), 0);
        assert_eq!(chunk_index_for(511.9), 0);
        assert_eq!(chunk_index_for(512.0), 1);
        assert_eq!(chunk_index_for(-0.5), -1);
        assert_eq!(chunk_index_for(-512.0), -1);
        assert_eq!(chunk_index_for(-512.5), -2);
        assert_eq!(chunk_index_for(6.0 * 512.0 + 10.0), 6);
    }

    #[test]
    fn test_chunk_pixel_range() {
        assert_eq!(chunk_pixel_range(0), 0.0..512.0);
        assert_eq!(chunk_pixel_range(-1), -512.0..0.0);
        assert_eq!(chunk_pixel_range(3), 1536.0..2048.0);
    }

    #[test]
    fn test_initial_load() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(1);

        let report = manager.load_chunks(50.0, &generator);

        assert_eq!(report.player_chunk, 0);
        assert_eq!(report.loaded, vec![-2, -1, 0, 1, 2]);
        assert!(report.evicted.is_empty());
        assert_eq!(manager.loaded_chunks(), vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(1);

        manager.load_chunks(50.0, &generator);
        let blocks_before: Vec<Block> = manager.blocks().copied().collect();

        let report = manager.load_chunks(50.0, &generator);

        assert!(report.is_empty());
        assert_eq!(manager.loaded_chunks(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(manager.blocks().copied().collect::<Vec<_>>(), blocks_before);
    }

    #[test]
    fn test_retains_chunks_within_evict_radius() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(1);

        manager.load_chunks(50.0, &generator);
        let report = manager.load_chunks(600.0, &generator); // chunk 1

        assert_eq!(report.loaded, vec![3]);
        assert!(report.evicted.is_empty());
        // -2 is exactly 3 away and stays
        assert_eq!(manager.loaded_chunks(), vec![-2, -1, 0, 1, 2, 3]);

        let report = manager.load_chunks(1100.0, &generator); // chunk 2
        assert_eq!(report.loaded, vec![4]);
        assert_eq!(report.evicted, vec![-2]);
        assert_eq!(manager.loaded_chunks(), vec![-1, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_jump_to_distant_chunk_evicts_and_partitions() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(99);

        manager.load_chunks(50.0, &generator);
        let report = manager.load_chunks(6.0 * 512.0 + 50.0, &generator);

        assert_eq!(report.player_chunk, 6);
        assert_eq!(report.loaded, vec![4, 5, 6, 7, 8]);
        assert_eq!(report.evicted, vec![-2, -1, 0, 1, 2]);
        assert_eq!(manager.loaded_chunks(), vec![4, 5, 6, 7, 8]);

        // Every resident block belongs to a loaded chunk and vice versa
        let start = chunk_pixel_range(4).start;
        let end = chunk_pixel_range(8).end;
        for block in manager.blocks() {
            assert!(block.x >= start && block.x < end);
            assert!(manager.is_loaded(chunk_x_of(block)));
        }
        for chunk in manager.chunks() {
            assert_eq!(chunk, &generator.generate_chunk(chunk.chunk_x));
        }
    }

    #[test]
    fn test_eviction_keeps_retained_blocks_intact() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(5);

        manager.load_chunks(50.0, &generator);
        let kept: Vec<TerrainChunk> = manager
            .chunks()
            .iter()
            .filter(|c| c.chunk_x >= -1)
            .cloned()
            .collect();

        manager.load_chunks(2.0 * 512.0 + 1.0, &generator); // chunk 2, evicts -2

        for chunk in kept {
            assert_eq!(manager.get_chunk(chunk.chunk_x), Some(&chunk));
        }
        assert!(manager.get_chunk(-2).is_none());
        assert!(manager.blocks().all(|b| chunk_x_of(b) != -2));
    }

    #[test]
    fn test_blocks_in_span_filters_by_chunk() {
        let mut manager = ChunkManager::new();
        let generator = WorldGenerator::new(11);
        manager.load_chunks(50.0, &generator);

        // Player-sized span inside chunk 0 only
        let span: Vec<&Block> = manager.blocks_in_span(50.0, 82.0).collect();
        assert_eq!(span.len(), manager.get_chunk(0).unwrap().blocks.len());
        assert!(span.iter().all(|b| chunk_x_of(b) == 0));

        // Straddling the 0/1 boundary pulls in both chunks
        let expected = manager.get_chunk(0).unwrap().blocks.len()
            + manager.get_chunk(1).unwrap().blocks.len();
        assert_eq!(manager.blocks_in_span(500.0, 532.0).count(), expected);
    }

    #[test]
    fn test_clear() {
        let mut manager = ChunkManager::new();
        manager.load_chunks(0.0, &WorldGenerator::new(3));
        assert!(manager.chunk_count() > 0);

        manager.clear();
        assert_eq!(manager.chunk_count(), 0);
        assert!(manager.loaded_chunks().is_empty());
    }
}
