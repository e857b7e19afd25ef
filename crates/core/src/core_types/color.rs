//! RGBA colour value.
//!
//! Components are stored normalised to `[0, 1]`. Constructors and readers
//! use the Processing convention of a `0..=255` scale for every channel,
//! including hue, saturation and brightness.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Full-scale value of a channel in the Processing convention
const CHANNEL_MAX: f64 = 255.0;

#[inline]
fn unit(v: f64) -> f64 {
    (v / CHANNEL_MAX).clamp(0.0, 1.0)
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8
}

/// An RGBA colour with normalised components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red in `[0, 1]`
    pub r: f64,
    /// Green in `[0, 1]`
    pub g: f64,
    /// Blue in `[0, 1]`
    pub b: f64,
    /// Alpha (opacity) in `[0, 1]`
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const PURPLE: Color = Color {
        r: 0.5,
        g: 0.0,
        b: 0.5,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque grey from a `0..=255` brightness.
    pub fn gray(white: f64) -> Self {
        Self::gray_alpha(white, CHANNEL_MAX)
    }

    /// Grey with alpha, both on the `0..=255` scale.
    pub fn gray_alpha(white: f64, alpha: f64) -> Self {
        let w = unit(white);
        Self {
            r: w,
            g: w,
            b: w,
            a: unit(alpha),
        }
    }

    /// Opaque colour from `0..=255` channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, CHANNEL_MAX)
    }

    /// Colour with alpha from `0..=255` channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Colour from already-normalised `[0, 1]` components (clamped).
    pub fn from_normalized(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Colour from hue, saturation, brightness and alpha on the `0..=255` scale.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let s = unit(saturation);
        let v = unit(brightness);
        let a = unit(alpha);
        if s == 0.0 {
            return Self { r: v, g: v, b: v, a };
        }

        // Hue wraps: 255 is the same as 0
        let h = (unit(hue) * 6.0) % 6.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self { r, g, b, a }
    }

    /// Same colour with a new `0..=255` alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: unit(alpha),
            ..self
        }
    }

    pub fn red(&self) -> f64 {
        self.r * CHANNEL_MAX
    }

    pub fn green(&self) -> f64 {
        self.g * CHANNEL_MAX
    }

    pub fn blue(&self) -> f64 {
        self.b * CHANNEL_MAX
    }

    pub fn alpha(&self) -> f64 {
        self.a * CHANNEL_MAX
    }

    /// Hue on the `0..=255` scale (0 for greys).
    pub fn hue(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }

        let sector = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        sector / 6.0 * CHANNEL_MAX
    }

    /// Saturation on the `0..=255` scale.
    pub fn saturation(&self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        if max == 0.0 {
            return 0.0;
        }
        let min = self.r.min(self.g).min(self.b);
        (max - min) / max * CHANNEL_MAX
    }

    /// Brightness (HSB value) on the `0..=255` scale.
    pub fn brightness(&self) -> f64 {
        self.r.max(self.g).max(self.b) * CHANNEL_MAX
    }

    /// `true` when the colour is fully transparent and draws nothing.
    pub fn is_invisible(&self) -> bool {
        self.a <= 0.0
    }

    /// Channels quantised to bytes, in `[r, g, b, a]` order.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b), to_byte(self.a)]
    }

    /// Colour from byte channels in `[r, g, b, a]` order.
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(f64::from(r), f64::from(g), f64::from(b), f64::from(a))
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Shorthand conversions so drawing calls read like `fill(255.0)` or
// `stroke((255.0, 0.0, 255.0))`. All inputs use the `0..=255` scale.

impl From<f64> for Color {
    fn from(white: f64) -> Self {
        Color::gray(white)
    }
}

impl From<(f64, f64)> for Color {
    fn from((white, alpha): (f64, f64)) -> Self {
        Color::gray_alpha(white, alpha)
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

/// Interpolate between two colours; `t` is clamped to `[0, 1]`.
pub fn lerp_color(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors_use_255_scale() {
        let c = Color::rgba(255.0, 127.5, 0.0, 51.0);
        assert_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, 0.5);
        assert_eq!(c.b, 0.0);
        assert_relative_eq!(c.a, 0.2);
        assert_relative_eq!(c.green(), 127.5);
        assert_relative_eq!(c.alpha(), 51.0);
    }

    #[test]
    fn test_constructors_clamp() {
        let c = Color::rgb(300.0, -10.0, 128.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(Color::gray(255.0), Color::WHITE);
        assert_eq!(Color::gray(0.0), Color::BLACK);
    }

    #[test]
    fn test_hsb_readers() {
        let red = Color::rgb(255.0, 0.0, 0.0);
        assert_eq!(red.hue(), 0.0);
        assert_relative_eq!(red.saturation(), 255.0);
        assert_relative_eq!(red.brightness(), 255.0);

        let blue = Color::rgb(0.0, 0.0, 255.0);
        assert_relative_eq!(blue.hue(), 255.0 * 4.0 / 6.0);

        let grey = Color::gray(100.0);
        assert_eq!(grey.hue(), 0.0);
        assert_eq!(grey.saturation(), 0.0);
    }

    #[test]
    fn test_hsb_round_trip() {
        for &(r, g, b) in &[(255.0, 128.0, 0.0), (10.0, 200.0, 90.0), (60.0, 20.0, 240.0)] {
            let c = Color::rgb(r, g, b);
            let back = Color::from_hsb(c.hue(), c.saturation(), c.brightness(), 255.0);
            assert_relative_eq!(back.red(), r, epsilon = 1e-9);
            assert_relative_eq!(back.green(), g, epsilon = 1e-9);
            assert_relative_eq!(back.blue(), b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_lerp_color_clamps() {
        let mid = lerp_color(Color::BLACK, Color::WHITE, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_eq!(lerp_color(Color::BLACK, Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::PURPLE.to_hex(), "#800080");
        assert_eq!(Color::rgba(255.0, 0.0, 0.0, 0.0).to_hex(), "#FF000000");
        assert!(Color::TRANSPARENT.is_invisible());
    }

    #[test]
    fn test_shorthand_conversions() {
        assert_eq!(Color::from(255.0), Color::WHITE);
        assert_eq!(Color::from((255.0, 100.0)), Color::gray_alpha(255.0, 100.0));
        assert_eq!(Color::from((255.0, 0.0, 255.0)).to_hex(), "#FF00FF");
        assert_eq!(Color::from((0.0, 0.0, 0.0, 0.0)), Color::TRANSPARENT);
    }
}
