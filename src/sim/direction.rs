//! Direction state for the disc
//!
//! Motion is axis-aligned only. The engine stores a `Direction` (or none at
//! all before the user picks one) and derives the velocity pair from it on
//! demand, so there is no floating-point sentinel to compare against.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four axis-aligned travel directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The opposite direction along the same axis.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Canonical velocity pair for this direction at the given step
    /// magnitude. Y grows downward (screen coordinates), so `Up` is -Y.
    pub fn velocity(&self, step: f32) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-step, 0.0),
            Direction::Right => Vec2::new(step, 0.0),
            Direction::Up => Vec2::new(0.0, -step),
            Direction::Down => Vec2::new(0.0, step),
        }
    }

    /// Recover a direction from a velocity pair, if it is one of the four
    /// canonical pairs for the given step magnitude. Total over every input:
    /// anything else (zero, diagonal, partial, non-finite) is `None`.
    pub fn from_velocity(vel: Vec2, step: f32) -> Option<Self> {
        if vel == Vec2::new(-step, 0.0) {
            Some(Direction::Left)
        } else if vel == Vec2::new(step, 0.0) {
            Some(Direction::Right)
        } else if vel == Vec2::new(0.0, -step) {
            Some(Direction::Up)
        } else if vel == Vec2::new(0.0, step) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}
