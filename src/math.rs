//! Color math: HSV and RGB conversions, hue wrapping, hex cleanup.
//!
//! Hue is in degrees, `[0, 360)`. Saturation, value and RGB channels are
//! normalized f64 in 0.0–1.0.

/// Wrap a hue in degrees into `[0, 360)`. Non-finite input maps to 0.
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Clamp into 0.0–1.0, sending NaN to 0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// HSV → RGB. Hue in degrees (taken modulo 360), `s`/`v` clamped to 0.0–1.0.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = clamp_unit(s);
    let v = clamp_unit(v);
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = wrap_hue(h) / 60.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Channels clamped to 0.0–1.0; achromatic input yields hue 0.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (clamp_unit(r), clamp_unit(g), clamp_unit(b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (wrap_hue(h), s, v)
}

/// Normalize a hex string: uppercase, expand shorthand, default to gray if invalid.
///
/// Always returns 8 chars (RRGGBBAA).
pub(crate) fn normalize_hex(hex: &str) -> String {
    let stripped = hex.trim().trim_start_matches('#');
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return "808080FF".to_string();
    }
    match stripped.len() {
        3 => {
            let mut out: String = stripped.chars().flat_map(|c| [c, c]).collect();
            out.push_str("FF");
            out.to_uppercase()
        }
        6 => format!("{}FF", stripped.to_uppercase()),
        8 => stripped.to_uppercase(),
        _ => "808080FF".to_string(),
    }
}
