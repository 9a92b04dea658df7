//! Engine tuning
//!
//! The only adjustable "physics" are the step magnitude and the tick
//! cadence, plus the viewport the disc bounces in. Read once at startup;
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Viewport;

/// Motion engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Distance traveled per tick, in viewport units.
    pub step: f32,
    /// Seconds between ticks.
    pub tick_interval: f32,
    pub viewport: Viewport,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step: STEP_MAGNITUDE,
            tick_interval: TICK_INTERVAL,
            viewport: Viewport::default(),
        }
    }
}

impl MotionConfig {
    /// Parse a JSON override, e.g. from the canvas `data-config` attribute.
    /// Missing fields keep their defaults; malformed or out-of-range input
    /// falls back to the full defaults with a warning.
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<MotionConfig>(json) {
            Ok(config) if config.is_valid() => config,
            Ok(config) => {
                log::warn!("Ignoring out-of-range motion config {:?}", config);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse motion config: {e}");
                Self::default()
            }
        }
    }

    /// Step, cadence, and viewport must all be finite and positive.
    fn is_valid(&self) -> bool {
        self.step.is_finite()
            && self.step > 0.0
            && self.tick_interval.is_finite()
            && self.tick_interval > 0.0
            && self.viewport.width.is_finite()
            && self.viewport.width > 0.0
            && self.viewport.height.is_finite()
            && self.viewport.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = MotionConfig::default();
        assert_eq!(config.step, STEP_MAGNITUDE);
        assert_eq!(config.tick_interval, TICK_INTERVAL);
        assert_eq!(config.viewport.width, VIEWPORT_WIDTH);
        assert_eq!(config.viewport.height, VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_parse_full_override() {
        let config = MotionConfig::from_json_str(
            r#"{"step": 25.0, "tick_interval": 0.25, "viewport": {"width": 800.0, "height": 450.0}}"#,
        );
        assert_eq!(config.step, 25.0);
        assert_eq!(config.tick_interval, 0.25);
        assert_eq!(config.viewport.width, 800.0);
        assert_eq!(config.viewport.height, 450.0);
    }

    #[test]
    fn test_parse_partial_override_keeps_defaults() {
        let config = MotionConfig::from_json_str(r#"{"step": 10.0}"#);
        assert_eq!(config.step, 10.0);
        assert_eq!(config.tick_interval, TICK_INTERVAL);
        assert_eq!(config.viewport, Viewport::default());
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert_eq!(MotionConfig::from_json_str("not json"), MotionConfig::default());
        assert_eq!(MotionConfig::from_json_str(""), MotionConfig::default());
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        assert_eq!(
            MotionConfig::from_json_str(r#"{"step": -50.0}"#),
            MotionConfig::default()
        );
        assert_eq!(
            MotionConfig::from_json_str(r#"{"tick_interval": 0.0}"#),
            MotionConfig::default()
        );
        assert_eq!(
            MotionConfig::from_json_str(r#"{"viewport": {"width": 0.0, "height": 600.0}}"#),
            MotionConfig::default()
        );
    }
}
