//! Error types for picker configuration.
//!
//! Drag handling never fails; only malformed configuration is rejected, and
//! always at construction time.

use thiserror::Error;

/// Errors produced while validating picker configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickerError {
    /// A configuration value was NaN or infinite.
    #[error("{name} must be finite")]
    NonFinite { name: &'static str },

    /// A range had zero or negative width.
    #[error("degenerate range [{lower}, {upper}]: upper bound must exceed lower bound")]
    DegenerateRange { lower: f64, upper: f64 },

    /// Dial sweep bounds were not ordered `min < max <= total`.
    #[error("invalid dial sweep: min {min}, max {max}, total {total}")]
    InvalidSweep { min: f64, max: f64, total: f64 },

    /// A radius or width was zero or negative where it must be positive.
    #[error("{name} must be positive, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },

    /// A distance was negative where zero or more is required.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    /// A slider range reached outside the domain of the field it drives.
    #[error("{field} slider range [{lower}, {upper}] leaves the field domain [{min}, {max}]")]
    RangeOutsideDomain {
        field: &'static str,
        lower: f64,
        upper: f64,
        min: f64,
        max: f64,
    },

    /// Slider track pixel bounds were not ordered.
    #[error("invalid slider track: min pixel {min_pixel}, max pixel {max_pixel}")]
    InvalidTrack { min_pixel: f64, max_pixel: f64 },
}

/// Result alias for fallible configuration.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejecting non-finite {name}: {value}");
        Err(PickerError::NonFinite { name })
    }
}

/// Reject values that are not strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        log::debug!("rejecting non-positive {name}: {value}");
        Err(PickerError::InvalidRadius { name, value })
    }
}

/// Reject negative values; zero is allowed.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        log::debug!("rejecting negative {name}: {value}");
        Err(PickerError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_mentions_bounds() {
        let err = PickerError::DegenerateRange {
            lower: 2.0,
            upper: 2.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("[2, 2]"), "missing bounds in: {msg}");
    }

    #[test]
    fn invalid_radius_names_the_field() {
        let err = ensure_positive("dial radius", 0.0).unwrap_err();
        assert_eq!(
            err,
            PickerError::InvalidRadius {
                name: "dial radius",
                value: 0.0
            }
        );
        assert!(format!("{err}").contains("dial radius"));
    }

    #[test]
    fn negative_distance_is_not_a_radius_error() {
        assert_eq!(ensure_non_negative("ring gap", 0.0), Ok(0.0));
        assert_eq!(
            ensure_non_negative("ring gap", -1.0),
            Err(PickerError::Negative {
                name: "ring gap",
                value: -1.0
            })
        );
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        assert!(ensure_finite("x", f64::NAN).is_err());
        assert!(ensure_finite("x", f64::INFINITY).is_err());
        assert_eq!(ensure_finite("x", -3.5), Ok(-3.5));
    }

    #[test]
    fn picker_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<PickerError>();
    }
}
