//! Color value types shared by the controls and the rendering layer.
//!
//! [`Hsv`] and [`Rgb`] are the two sides of the color model; [`RingColor`]
//! is the RGBA value the picker reads from and writes to its host.

use crate::math;

/// Hue (degrees, `[0, 360)`), saturation and value (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// RGB channels in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = math::hsv_to_rgb(self.h, self.s, self.v);
        Rgb { r, g, b }
    }
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Inverse of [`Hsv::to_rgb`]. Gray input reports hue 0.
    pub fn to_hsv(self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(self.r, self.g, self.b);
        Hsv { h, s, v }
    }
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        value.to_rgb()
    }
}

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        value.to_hsv()
    }
}

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Default for RingColor {
    /// Opaque cyan, the picker's stock starting color.
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        }
    }
}

impl RingColor {
    /// Create from f64 RGBA, clamping every component into 0.0–1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp_unit(r),
            g: math::clamp_unit(g),
            b: math::clamp_unit(b),
            a: math::clamp_unit(a),
        }
    }

    /// Create from HSV (hue in degrees) plus alpha.
    pub fn from_hsv(hsv: Hsv, a: f64) -> Self {
        let rgb = hsv.to_rgb();
        Self::from_rgba(rgb.r, rgb.g, rgb.b, a)
    }

    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn to_hsv(&self) -> Hsv {
        self.rgb().to_hsv()
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is read as RRGGBBAA; shorter forms are opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        if !matches!(stripped.len(), 3 | 6 | 8) {
            return None;
        }
        // RRGGBBAA after expansion
        let full = math::normalize_hex(stripped);
        let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).ok();
        let (r, g, b, a) = (channel(0)?, channel(2)?, channel(4)?, channel(6)?);
        Some(Self::from_rgb8(r, g, b).with_alpha(a as f64 / 255.0))
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Six chars when opaque, eight (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if (self.a - 1.0).abs() < 0.001 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: math::clamp_unit(a),
            ..self
        }
    }

    /// Per-channel comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.r - other.r).abs() <= tolerance
            && (self.g - other.g).abs() <= tolerance
            && (self.b - other.b).abs() <= tolerance
            && (self.a - other.a).abs() <= tolerance
    }
}
