//! RNG trait abstraction for terrain generation
//!
//! Generation only ever asks for a handful of draws (biome choice, tree
//! placement), so it takes any source implementing [`WorldRng`]:
//! - a per-chunk seeded `Xoshiro256StarStar` (the normal path)
//! - `thread_rng()` or a mock generator (tests, one-off tools)

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Random number generator trait for world generation
pub trait WorldRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate a uniformly distributed index in `0..len`
    fn gen_index(&mut self, len: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}

/// Derive the seed of a single chunk from the world seed.
///
/// SplitMix64 finalizer over the seed and the chunk index, so neighbouring
/// chunks get unrelated streams.
pub fn chunk_seed(world_seed: u64, chunk_x: i32) -> u64 {
    let mut z = world_seed ^ (chunk_x as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seeded generator for one chunk
pub fn chunk_rng(world_seed: u64, chunk_x: i32) -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(chunk_seed(world_seed, chunk_x))
}
