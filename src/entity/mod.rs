//! Player-side entities: the player sprite, the camera and held-key input

pub mod camera;
pub mod input;
pub mod player;

pub use camera::Camera;
pub use input::{InputState, Key, KeyQuery, ParseKeyError};
pub use player::Player;
