//! Player input state
//!
//! Key events arrive asynchronously from the host and overwrite the held
//! flags; the frame loop reads them once per step. Last write wins.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Space,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp, Key::Space];

    /// Name as reported by `KeyboardEvent.key`
    pub fn dom_name(self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::Space => " ",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Space => f.write_str("Space"),
            other => f.write_str(other.dom_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised key name {0:?}")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" => Ok(Key::ArrowLeft),
            "ArrowRight" => Ok(Key::ArrowRight),
            "ArrowUp" => Ok(Key::ArrowUp),
            " " | "Space" => Ok(Key::Space),
            other => Err(ParseKeyError(other.to_string())),
        }
    }
}

/// Read-only view of which keys are held
pub trait KeyQuery {
    fn is_held(&self, key: Key) -> bool;

    /// Either jump key
    fn jump_held(&self) -> bool {
        self.is_held(Key::ArrowUp) || self.is_held(Key::Space)
    }
}

/// Tracks current input state for player control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub up_pressed: bool,
    pub space_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::ArrowLeft => self.left_pressed = held,
            Key::ArrowRight => self.right_pressed = held,
            Key::ArrowUp => self.up_pressed = held,
            Key::Space => self.space_pressed = held,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Apply a raw host key event; keys outside the recognised set are ignored.
    ///
    /// Returns the key that changed, if any.
    pub fn handle_key_event(&mut self, name: &str, down: bool) -> Option<Key> {
        match name.parse::<Key>() {
            Ok(key) => {
                self.set(key, down);
                Some(key)
            }
            Err(e) => {
                log::trace!("Ignoring key event: {}", e);
                None
            }
        }
    }

    /// Hold every key in `keys`
    pub fn holding(keys: impl IntoIterator<Item = Key>) -> Self {
        let mut input = Self::new();
        for key in keys {
            input.press(key);
        }
        input
    }
}

impl KeyQuery for InputState {
    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => self.left_pressed,
            Key::ArrowRight => self.right_pressed,
            Key::ArrowUp => self.up_pressed,
            Key::Space => self.space_pressed,
        }
    }
}
