//! Terrain generation - column heights, ground rows and trees per chunk

use crate::world::biome::{select_biome, BiomeType};
use crate::world::chunk_manager::TerrainChunk;
use crate::world::rng_trait::{chunk_rng, WorldRng};
use crate::world::{Block, BlockKind, CANVAS_HEIGHT, CHUNK_HEIGHT, CHUNK_SIZE, CHUNK_WIDTH};

/// Blocks stacked on a column that grows a tree
pub const TREE_HEIGHT: i32 = 3;

/// Fixed multi-frequency sine sum over the absolute world column
pub fn terrain_noise(world_column: i32) -> f64 {
    let x = world_column as f64;
    (x / 100.0).sin() * (x / 50.0).sin() * 10.0 + (x / 25.0).sin() * 5.0
}

/// Column height in blocks: the noise blended with the biome's height bounds.
///
/// Can be zero or negative on low biomes; such columns get no ground blocks
/// but may still grow a tree starting at row `height`.
pub fn column_height(world_column: i32, biome: BiomeType) -> i32 {
    let def = biome.definition();
    ((terrain_noise(world_column) + def.max_height as f64 + def.min_height as f64) / 2.0).floor()
        as i32
}

/// Screen-anchored y of the block in `row` (row 0 sits on the canvas bottom)
fn row_y(row: i32) -> f32 {
    CANVAS_HEIGHT - ((row + 1) * CHUNK_HEIGHT) as f32
}

/// Terrain generator; every chunk draws from its own stream derived from `seed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldGenerator {
    pub seed: u64,
}

impl WorldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Generate a complete chunk at the given chunk index.
    ///
    /// Same seed and index always give the same chunk.
    pub fn generate_chunk(&self, chunk_x: i32) -> TerrainChunk {
        let mut rng = chunk_rng(self.seed, chunk_x);
        Self::generate_chunk_with_rng(chunk_x, &mut rng)
    }

    /// Generate a chunk drawing the biome and trees from `rng`
    pub fn generate_chunk_with_rng<R: WorldRng + ?Sized>(chunk_x: i32, rng: &mut R) -> TerrainChunk {
        let biome = select_biome(rng);
        Self::generate_chunk_in_biome(chunk_x, biome, rng)
    }

    /// Generate a chunk in a fixed biome; `rng` only decides tree placement
    pub fn generate_chunk_in_biome<R: WorldRng + ?Sized>(
        chunk_x: i32,
        biome: BiomeType,
        rng: &mut R,
    ) -> TerrainChunk {
        let def = biome.definition();
        let mut blocks = Vec::new();

        for local_x in 0..CHUNK_SIZE {
            let world_column = chunk_x * CHUNK_SIZE + local_x;
            let x = (world_column * CHUNK_WIDTH) as f32;
            let height = column_height(world_column, biome);

            for row in 0..height {
                blocks.push(Block {
                    x,
                    y: row_y(row),
                    width: CHUNK_WIDTH as f32,
                    height: CHUNK_HEIGHT as f32,
                    kind: if row == height - 1 {
                        BlockKind::Surface
                    } else {
                        BlockKind::Ground
                    },
                    biome,
                });
            }

            // Trees stack on the column's top row even when it has no ground
            if def.has_trees() && rng.check_probability(def.tree_frequency) {
                for trunk in 0..TREE_HEIGHT {
                    blocks.push(Block {
                        x,
                        y: row_y(height + trunk),
                        width: CHUNK_WIDTH as f32,
                        height: CHUNK_HEIGHT as f32,
                        kind: BlockKind::Tree,
                        biome,
                    });
                }
            }
        }

        log::trace!(
            "Generated chunk {} ({}): {} blocks",
            chunk_x,
            biome,
            blocks.len()
        );

        TerrainChunk {
            chunk_x,
            biome,
            blocks,
        }
    }
}
