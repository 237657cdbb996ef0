//! Rendering - projects a frame snapshot to screen-space rectangles

pub mod svg;

use glam::Vec2;

use crate::world::{BlockKind, Color, FrameSnapshot};

pub use svg::render_svg;

/// Fill of the player sprite
pub const PLAYER_COLOR: Color = Color::rgb(255, 0, 0);

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

/// Map a snapshot to draw calls: terrain in terrain order, then the player.
///
/// Screen position is world position minus the camera offset. Nothing is
/// culled; the SVG viewport clips.
pub fn project(snapshot: &FrameSnapshot<'_>) -> Vec<DrawRect> {
    let camera = snapshot.camera;
    let mut rects: Vec<DrawRect> = snapshot
        .blocks()
        .map(|block| {
            let biome = block.biome.definition();
            let screen = camera.world_to_screen(Vec2::new(block.x, block.y));
            DrawRect {
                x: screen.x,
                y: screen.y,
                width: block.width,
                height: block.height,
                fill: match block.kind {
                    BlockKind::Tree => biome.tree_fill(),
                    BlockKind::Ground | BlockKind::Surface => biome.ground_color,
                },
            }
        })
        .collect();

    let player = snapshot.player;
    let screen = camera.world_to_screen(player.position);
    rects.push(DrawRect {
        x: screen.x,
        y: screen.y,
        width: player.width,
        height: player.height,
        fill: PLAYER_COLOR,
    });

    rects
}
