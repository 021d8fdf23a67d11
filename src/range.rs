//! Linear rescaling between closed numeric ranges.

use crate::error::{PickerError, Result, ensure_finite};

/// A closed range `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    lower: f64,
    upper: f64,
}

impl ValueRange {
    /// The unit interval `[0, 1]`.
    pub const UNIT: ValueRange = ValueRange {
        lower: 0.0,
        upper: 1.0,
    };

    /// Hue in degrees, `[0, 360]`.
    pub const DEGREES: ValueRange = ValueRange {
        lower: 0.0,
        upper: 360.0,
    };

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &ValueRange) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Build a range, rejecting non-finite bounds and zero or negative width.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        ensure_finite("range lower bound", lower)?;
        ensure_finite("range upper bound", upper)?;
        if upper <= lower {
            log::debug!("rejecting degenerate range [{lower}, {upper}]");
            return Err(PickerError::DegenerateRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            self.lower
        } else {
            x.clamp(self.lower, self.upper)
        }
    }
}

/// Map `x` linearly from `from` onto `to`.
///
/// Endpoints land exactly: `from.lower` gives `to.lower`, `from.upper` gives
/// `to.upper`. A zero-width source maps everything to `to.lower`. Input
/// outside `from` extrapolates; callers clamp where they need to.
pub fn map_value(x: f64, from: ValueRange, to: ValueRange) -> f64 {
    let width = from.width();
    if width == 0.0 {
        return to.lower;
    }
    let t = (x - from.lower) / width;
    (1.0 - t) * to.lower + t * to.upper
}
