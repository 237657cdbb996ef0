//! Player physics system - movement, gravity, jumping, collision

use serde::{Deserialize, Serialize};

use crate::entity::input::{Key, KeyQuery};
use crate::entity::player::Player;
use crate::world::Block;

/// Per-frame physics constants, in pixels per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            gravity: 0.5,
            jump_impulse: 10.0,
        }
    }
}

/// Result of one physics update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicsOutcome {
    /// Number of solid blocks the player was snapped onto
    pub collisions: usize,
    /// Whether the jump impulse was applied at least once
    pub jumped: bool,
}

impl PhysicsOutcome {
    pub fn grounded(&self) -> bool {
        self.collisions > 0
    }
}

/// Player physics system - handles movement, gravity and floor collision
pub struct PlayerPhysicsSystem;

impl PlayerPhysicsSystem {
    /// Update player physics for one frame
    ///
    /// No velocity is carried between frames. Every solid block overlapping
    /// the prospective position snaps the player on top of it, testing each
    /// block against the y left by the previous snap, so the last overlapping
    /// block in `blocks` order decides the result. Horizontal penetration is
    /// never corrected.
    ///
    /// # Arguments
    /// * `player` - Mutable reference to player state
    /// * `input` - Held-key query
    /// * `blocks` - Terrain blocks in terrain order
    /// * `config` - Speed, gravity and jump impulse
    pub fn update<'a, I, K>(
        player: &mut Player,
        input: &K,
        blocks: I,
        config: &PhysicsConfig,
    ) -> PhysicsOutcome
    where
        I: IntoIterator<Item = &'a Block>,
        K: KeyQuery + ?Sized,
    {
        let mut position = player.position;
        let mut outcome = PhysicsOutcome::default();

        // 1. Horizontal movement; both keys cancel out
        if input.is_held(Key::ArrowLeft) {
            position.x -= config.move_speed;
        }
        if input.is_held(Key::ArrowRight) {
            position.x += config.move_speed;
        }

        // 2. Gravity, before collision
        position.y += config.gravity;

        // 3. Vertical-only resolution against every solid block
        let jump = input.jump_held();
        for block in blocks {
            if !block.is_solid() || !player.rect_at(position).overlaps(&block.rect()) {
                continue;
            }

            position.y = block.y - player.height;
            if jump {
                position.y -= config.jump_impulse;
                outcome.jumped = true;
            }
            outcome.collisions += 1;
        }

        if position != player.position {
            log::trace!(
                "Player: {:?} → {:?} (collisions: {})",
                player.position,
                position,
                outcome.collisions
            );
        }

        player.position = position;
        outcome
    }
}
