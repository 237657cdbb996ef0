//! Camera offset following the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Player;
use crate::world::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Offset subtracted from world coordinates to get screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Camera centered horizontally on the player, never above the world top
    pub fn following(player: &Player) -> Self {
        Self {
            x: player.position.x - CANVAS_WIDTH / 2.0,
            y: (player.position.y - CANVAS_HEIGHT / 2.0).max(0.0),
        }
    }

    pub fn follow(&mut self, player: &Player) {
        *self = Self::following(player);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset()
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_centers_player() {
        let mut camera = Camera::default();
        camera.follow(&Player::new(Vec2::new(1000.0, 0.0)));

        assert_eq!(camera.x, 600.0);
        assert_eq!(camera.y, 0.0);
    }

    #[test]
    fn test_follow_clamps_vertical() {
        let camera = Camera::following(&Player::new(Vec2::new(50.0, 100.0)));
        assert_eq!(camera.x, -350.0);
        assert_eq!(camera.y, 0.0);

        let camera = Camera::following(&Player::new(Vec2::new(50.0, 900.0)));
        assert_eq!(camera.y, 600.0);
    }

    #[test]
    fn test_world_to_screen() {
        let camera = Camera::new(-350.0, 10.0);
        assert_eq!(
            camera.world_to_screen(Vec2::new(50.0, 570.0)),
            Vec2::new(400.0, 560.0)
        );
    }
}
