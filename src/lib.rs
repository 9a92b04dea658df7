//! Bounce Box - a colored disc bouncing inside a fixed viewport
//!
//! Core modules:
//! - `sim`: Deterministic motion core (disc state, direction machine, tick rule)
//! - `renderer`: WebGPU rendering pipeline
//! - `config`: Engine tuning (step magnitude, tick cadence, viewport)

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::MotionConfig;
pub use sim::{Direction, Engine};

/// Engine configuration constants
pub mod consts {
    /// Seconds between motion ticks (1 Hz cadence)
    pub const TICK_INTERVAL: f32 = 1.0;
    /// Distance the disc travels per tick, in viewport units
    pub const STEP_MAGNITUDE: f32 = 50.0;
    /// Maximum ticks per advance call, so a backgrounded tab can't burst
    pub const MAX_TICKS_PER_ADVANCE: u32 = 4;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 600.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Disc defaults
    pub const DISC_RADIUS: f32 = 20.0;
}
