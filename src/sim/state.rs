//! Disc, viewport, and color types
//!
//! Plain data only. Everything here is mutated exclusively by the engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` string (leading `#` optional), as produced by an
    /// HTML color input. Returns `None` for anything else.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        ))
    }

    /// Components as an array, in uniform-buffer order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

/// The fixed rectangular region the disc bounces in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The disc entity. One instance lives for the whole program; it is only
/// ever mutated, never replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disc {
    /// Center position in viewport units, Y growing downward.
    pub center: Vec2,
    /// Fixed at construction.
    pub radius: f32,
    /// Cosmetic only, no effect on motion.
    pub color: Color,
}

impl Disc {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            center,
            radius,
            color: Color::BLUE,
        }
    }

    /// Disc at rest in the middle of the given viewport.
    pub fn centered_in(viewport: Viewport, radius: f32) -> Self {
        Self::new(viewport.center(), radius)
    }
}

impl Default for Disc {
    fn default() -> Self {
        Self::centered_in(Viewport::default(), DISC_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#0000ff"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("0000ff"), Some(Color::BLUE));
        assert_eq!(
            Color::from_hex("#FF0000"),
            Some(Color::new(1.0, 0.0, 0.0, 1.0))
        );

        let c = Color::from_hex("#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_from_hex_rejects_malformed() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#1234567"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("blue"), None);
    }

    #[test]
    fn test_default_color_is_blue() {
        assert_eq!(Color::default(), Color::BLUE);
        assert_eq!(Disc::default().color, Color::BLUE);
    }

    #[test]
    fn test_disc_centered_in_viewport() {
        let disc = Disc::default();
        assert_eq!(disc.center, Vec2::new(300.0, 300.0));
        assert_eq!(disc.radius, DISC_RADIUS);

        let vp = Viewport {
            width: 800.0,
            height: 400.0,
        };
        assert_eq!(Disc::centered_in(vp, 10.0).center, Vec2::new(400.0, 200.0));
    }
}
