//! Block - a single terrain or decoration cell

use serde::{Deserialize, Serialize};

use super::biome::BiomeType;

/// Axis-aligned rectangle in world pixels (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict AABB overlap; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Material kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Ground,
    Surface,
    Tree,
}

impl BlockKind {
    /// Trees are decoration; the player passes through them
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockKind::Tree)
    }
}

/// One generated block. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// World x of the left edge, in pixels
    pub x: f32,
    /// World y of the top edge, in pixels
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: BlockKind,
    pub biome: BiomeType,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_solid(&self) -> bool {
        self.kind.is_solid()
    }
}
