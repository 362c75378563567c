//! Discrete key edge events and the per-tick input they fold into
//!
//! The core never polls held-key state. The host collects press/release
//! edges between ticks and hands over a `TickInput`.

use serde::{Deserialize, Serialize};

/// One of the four steering directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a keyboard key name to a direction (arrows and WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "Down" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "Left" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "Right" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A key edge delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Direction),
    Released(Direction),
}

/// Input commands for a single tick (deterministic)
///
/// Each flag records that the edge happened at least once since the previous
/// tick. Several flags may be set; the motion engine decides which one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up_pressed: bool,
    pub down_pressed: bool,
    pub up_released: bool,
    pub down_released: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub left_released: bool,
    pub right_released: bool,
}

impl TickInput {
    /// Fold a batch of key edges into one tick's input
    pub fn from_events(events: &[KeyEvent]) -> Self {
        let mut input = Self::default();
        for &event in events {
            input.record(event);
        }
        input
    }

    /// Record a single key edge
    pub fn record(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Pressed(Direction::Up) => self.up_pressed = true,
            KeyEvent::Pressed(Direction::Down) => self.down_pressed = true,
            KeyEvent::Pressed(Direction::Left) => self.left_pressed = true,
            KeyEvent::Pressed(Direction::Right) => self.right_pressed = true,
            KeyEvent::Released(Direction::Up) => self.up_released = true,
            KeyEvent::Released(Direction::Down) => self.down_released = true,
            KeyEvent::Released(Direction::Left) => self.left_released = true,
            KeyEvent::Released(Direction::Right) => self.right_released = true,
        }
    }

    /// Shorthand for a tick with a single key edge
    pub fn pressed(direction: Direction) -> Self {
        Self::from_events(&[KeyEvent::Pressed(direction)])
    }

    pub fn released(direction: Direction) -> Self {
        Self::from_events(&[KeyEvent::Released(direction)])
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
