//! Biome system - terrain style per chunk

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rng_trait::WorldRng;

/// RGB color used for terrain and sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Types of biomes in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeType {
    Forest,
    Plains,
    Icy,
    Ocean,
}

impl BiomeType {
    /// All biomes, in selection order
    pub const ALL: [BiomeType; 4] = [
        BiomeType::Forest,
        BiomeType::Plains,
        BiomeType::Icy,
        BiomeType::Ocean,
    ];

    /// Static definition for this biome
    pub fn definition(self) -> &'static BiomeDefinition {
        match self {
            BiomeType::Forest => &FOREST,
            BiomeType::Plains => &PLAINS,
            BiomeType::Icy => &ICY,
            BiomeType::Ocean => &OCEAN,
        }
    }
}

impl fmt::Display for BiomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// Defines the characteristics of a biome
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeDefinition {
    pub name: &'static str,
    pub biome_type: BiomeType,

    /// Fill for ground and surface blocks
    pub ground_color: Color,

    // Vegetation
    pub tree_frequency: f32, // 0.0-1.0 probability of a tree per column
    pub tree_color: Option<Color>,

    // Terrain shape, in blocks
    pub max_height: i32,
    pub min_height: i32,
}

impl BiomeDefinition {
    /// Whether columns in this biome ever roll for a tree
    pub fn has_trees(&self) -> bool {
        self.tree_frequency > 0.0
    }

    /// Fill for tree blocks, falling back to the ground color
    pub fn tree_fill(&self) -> Color {
        self.tree_color.unwrap_or(self.ground_color)
    }
}

static FOREST: BiomeDefinition = BiomeDefinition {
    name: "Forest",
    biome_type: BiomeType::Forest,
    ground_color: Color::hex(0x4CAF50),
    tree_frequency: 0.2,
    tree_color: Some(Color::hex(0x795548)),
    max_height: 12,
    min_height: 8,
};

static PLAINS: BiomeDefinition = BiomeDefinition {
    name: "Plains",
    biome_type: BiomeType::Plains,
    ground_color: Color::hex(0x8BC34A),
    tree_frequency: 0.05,
    tree_color: Some(Color::hex(0xA1887F)),
    max_height: 6,
    min_height: 4,
};

static ICY: BiomeDefinition = BiomeDefinition {
    name: "Icy",
    biome_type: BiomeType::Icy,
    ground_color: Color::hex(0xECEFF1),
    tree_frequency: 0.1,
    tree_color: Some(Color::hex(0x90A4AE)),
    max_height: 10,
    min_height: 6,
};

static OCEAN: BiomeDefinition = BiomeDefinition {
    name: "Ocean",
    biome_type: BiomeType::Ocean,
    ground_color: Color::hex(0x2196F3),
    tree_frequency: 0.0, // No trees underwater
    tree_color: None,
    max_height: 3,
    min_height: 1,
};

/// Pick a biome uniformly; adjacent chunks are independent
pub fn select_biome<R: WorldRng + ?Sized>(rng: &mut R) -> BiomeType {
    BiomeType::ALL[rng.gen_index(BiomeType::ALL.len())]
}
