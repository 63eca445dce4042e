//! Hue, saturation and value adjustment of palettes
//!
//! Each color is converted to HSV, shifted and scaled, then converted back.
//! Hue wraps around the unit circle while saturation and value saturate at
//! the bounds of [0, 1].

use crate::color::palette::{Color, Palette};

/// Parameters for a palette adjustment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvAdjustment {
    /// Additive hue shift, wrapped modulo 1.0
    pub hue_shift: f64,
    /// Saturation multiplier, result clamped into [0, 1]
    pub saturation: f64,
    /// Value multiplier, result clamped into [0, 1]
    pub value: f64,
}

impl HsvAdjustment {
    /// Adjustment that leaves every color unchanged
    pub const IDENTITY: Self = Self {
        hue_shift: 0.0,
        saturation: 1.0,
        value: 1.0,
    };

    /// Create an adjustment from its three parameters
    pub const fn new(hue_shift: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue_shift,
            saturation,
            value,
        }
    }

    /// Adjust a single color
    pub fn apply(&self, color: Color) -> Color {
        let [h, s, v] = rgb_to_hsv(color);
        let h = (h + self.hue_shift).rem_euclid(1.0);
        let s = (s * self.saturation).clamp(0.0, 1.0);
        let v = (v * self.value).clamp(0.0, 1.0);
        hsv_to_rgb([h, s, v])
    }
}

impl Default for HsvAdjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Produce a new palette with every color adjusted independently
pub fn adjust_palette(palette: &Palette, adjustment: &HsvAdjustment) -> Palette {
    palette.map(|color| adjustment.apply(color))
}

/// Convert a color to normalized `[hue, saturation, value]`
pub fn rgb_to_hsv(color: Color) -> [f64; 3] {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= 0.0 {
        return [0.0, 0.0, max];
    }

    let saturation = delta / max;
    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let sector = if (r - max).abs() <= f64::EPSILON {
        bc - gc
    } else if (g - max).abs() <= f64::EPSILON {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(sector / 6.0).rem_euclid(1.0), saturation, max]
}

/// Convert normalized `[hue, saturation, value]` back to a color
///
/// Channels are rounded to the nearest integer so that a round trip through
/// `rgb_to_hsv` is exact.
pub fn hsv_to_rgb(hsv: [f64; 3]) -> Color {
    let [h, s, v] = hsv;

    let (r, g, b) = if s <= 0.0 {
        (v, v, v)
    } else {
        let scaled = h.rem_euclid(1.0) * 6.0;
        let sector = scaled.floor();
        let f = scaled - sector;
        let p = v * (1.0 - s);
        let q = v * s.mul_add(-f, 1.0);
        let t = v * s.mul_add(-(1.0 - f), 1.0);

        match (sector as u8) % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        }
    };

    let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::rgb(to_byte(r), to_byte(g), to_byte(b))
}
