//! Motion engine
//!
//! Owns the disc and advances it deterministically. The engine is pure state
//! plus arithmetic; the shell owns wall-clock time and feeds elapsed seconds
//! into [`Engine::advance`], which converts them into fixed-cadence ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::{Color, Disc};
use crate::config::MotionConfig;
use crate::consts::*;

/// The motion core. One instance per program, driven entirely by the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engine {
    pub disc: Disc,
    pub config: MotionConfig,
    direction: Option<Direction>,
    running: bool,
    /// Seconds of wall-clock time not yet converted into ticks.
    accumulator: f32,
}

impl Engine {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            disc: Disc::centered_in(config.viewport, DISC_RADIUS),
            config,
            direction: None,
            running: false,
            accumulator: 0.0,
        }
    }

    /// `None` until the first `set_direction`; never returns to `None` after.
    pub fn current_direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Per-tick displacement derived from the direction state. Zero while no
    /// direction has been chosen, so a degenerate `play` moves nothing.
    pub fn velocity(&self) -> Vec2 {
        match self.direction {
            Some(dir) => dir.velocity(self.config.step),
            None => Vec2::ZERO,
        }
    }

    /// Point the disc in a new travel direction. Takes effect on the next
    /// tick; does not start motion by itself.
    pub fn set_direction(&mut self, dir: Direction) {
        log::debug!("Direction set to {:?}", dir);
        self.direction = Some(dir);
    }

    /// Flip to the axis-opposite direction. No-op before any direction has
    /// been chosen.
    pub fn reverse(&mut self) {
        if let Some(dir) = self.direction {
            self.set_direction(dir.opposite());
        }
    }

    /// Arm the tick source. No-op if already running. Starting without a
    /// direction is safe: ticks run with zero velocity until one is chosen.
    pub fn play(&mut self) {
        if self.running {
            return;
        }
        if self.direction.is_none() {
            log::warn!("Playing with no direction chosen; disc will not move");
        }
        self.running = true;
        log::info!("Motion started");
    }

    /// Disarm the tick source and drop any partially elapsed interval, so a
    /// later `play` waits a full interval before the first tick. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Motion stopped at {:?}", self.disc.center);
        }
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Recolor the disc. Never touches position or velocity.
    pub fn set_color(&mut self, color: Color) {
        self.disc.color = color;
    }

    /// One motion step: reflect at the walls, then displace.
    ///
    /// The wall check uses the position left over from the previous tick, so
    /// a bounce flips the direction first and the flipped velocity is what
    /// displaces the disc this tick. The disc may sit past a wall by up to
    /// one step for a single tick before the flip carries it back inside.
    pub fn tick(&mut self) {
        let Some(mut dir) = self.direction else {
            return;
        };

        let vp = self.config.viewport;
        let center = self.disc.center;
        let r = self.disc.radius;

        let crossed = match dir {
            Direction::Left | Direction::Right => {
                center.x - r < 0.0 || center.x + r > vp.width
            }
            Direction::Up | Direction::Down => {
                center.y - r < 0.0 || center.y + r > vp.height
            }
        };
        if crossed {
            dir = dir.opposite();
            self.direction = Some(dir);
            log::debug!("Reflected to {:?} at {:?}", dir, center);
        }

        self.disc.center += dir.velocity(self.config.step);
    }

    /// Feed elapsed wall-clock seconds and run however many ticks came due.
    /// Returns the number of ticks run; always 0 while stopped.
    ///
    /// A single call catches up at most a few intervals; elapsed time beyond
    /// that is dropped, so a tab resuming after minutes in the background
    /// does not replay them.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if !self.running {
            return 0;
        }
        let max_catch_up = self.config.tick_interval * MAX_TICKS_PER_ADVANCE as f32;
        self.accumulator += elapsed.clamp(0.0, max_catch_up);

        let mut ticks = 0;
        while self.accumulator >= self.config.tick_interval && ticks < MAX_TICKS_PER_ADVANCE {
            self.tick();
            self.accumulator -= self.config.tick_interval;
            ticks += 1;
        }
        ticks
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}
