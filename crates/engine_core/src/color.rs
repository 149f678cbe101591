//! Hue/saturation/lightness colors used for systems, planets and atmospheres.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in HSL space with an alpha channel.
///
/// Generated content picks a random hue at a fixed saturation/lightness, so
/// storing the HSL components keeps that intent visible to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees, [0, 360).
    pub hue: f32,
    /// Saturation, 0-1.
    pub saturation: f32,
    /// Lightness, 0-1.
    pub lightness: f32,
    /// Alpha, 0-1 (1 = opaque).
    pub alpha: f32,
}

impl Hsla {
    pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Opaque color.
    pub fn opaque(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// Convert to linear-ish RGB in 0-1 (alpha dropped).
    pub fn to_rgb(&self) -> Vec3 {
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let h = self.hue / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.lightness - c / 2.0;
        Vec3::new(r + m, g + m, b + m)
    }
}

/// CSS-style notation, e.g. `hsla(120, 70%, 50%, 0.3)`.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.0}, {:.0}%, {:.0}%, {})",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0,
            self.alpha
        )
    }
}
