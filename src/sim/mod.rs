//! Deterministic motion core
//!
//! All motion logic lives here. This module must stay pure and deterministic:
//! - Fixed tick cadence only, fed elapsed time by the caller
//! - No rendering or platform dependencies
//! - Direction is tagged state; velocity is always derived from it

pub mod direction;
pub mod engine;
pub mod state;

pub use direction::Direction;
pub use engine::Engine;
pub use state::{Color, Disc, Viewport};
