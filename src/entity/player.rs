//! Player entity - position and bounding box

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::world::Rect;

/// The player entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world pixels
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub const WIDTH: f32 = 32.0;
    pub const HEIGHT: f32 = 48.0;
    pub const SPAWN: Vec2 = Vec2::new(50.0, 0.0);

    /// Create a new player at the specified position
    pub fn new(position: Vec2) -> Self {
        Self::with_size(position, Self::WIDTH, Self::HEIGHT)
    }

    pub fn with_size(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Bounding box at the current position
    pub fn rect(&self) -> Rect {
        self.rect_at(self.position)
    }

    /// Bounding box if the player stood at `position`
    pub fn rect_at(&self, position: Vec2) -> Rect {
        Rect::new(position.x, position.y, self.width, self.height)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Self::SPAWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::default();
        assert_eq!(player.position, Vec2::new(50.0, 0.0));
        assert_eq!(player.width, 32.0);
        assert_eq!(player.height, 48.0);
    }

    #[test]
    fn test_player_rect() {
        let player = Player::new(Vec2::new(10.0, 20.0));
        assert_eq!(player.rect(), Rect::new(10.0, 20.0, 32.0, 48.0));
        assert_eq!(player.rect_at(Vec2::ZERO), Rect::new(0.0, 0.0, 32.0, 48.0));
    }
}
