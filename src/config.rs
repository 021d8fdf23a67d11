//! Construction-time configuration for the whole picker.

use crate::color::{Hsv, Rgb, RingColor};
use crate::constants;
use crate::dial::{DialConfig, DialKind, Sweep};
use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::range::ValueRange;
use crate::state::Field;

/// Everything the picker needs up front. Immutable once the picker is built.
///
/// The widget starts from `initial_rgb`, `initial_brightness` and
/// `initial_alpha` and writes that color into the host's signal; use
/// [`PickerConfig::with_initial_color`] to start from an existing color.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Radius of the outer (hue) ring.
    pub dial_radius: f64,
    pub knob_radius: f64,
    pub line_width: f64,
    /// Padding around the knob; together with `knob_radius` forms the drag
    /// origin offset.
    pub knob_padding: f64,
    /// How far inside the hue ring the saturation ring sits.
    pub ring_gap: f64,
    pub initial_rgb: Rgb,
    pub initial_brightness: f64,
    pub initial_alpha: f64,
    pub hue_sweep: Sweep,
    pub saturation_sweep: Sweep,
    pub slider_range: ValueRange,
    pub thumb_size: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            dial_radius: constants::DIAL_RADIUS,
            knob_radius: constants::KNOB_RADIUS,
            line_width: constants::LINE_WIDTH,
            knob_padding: constants::KNOB_PADDING,
            ring_gap: constants::RING_GAP,
            initial_rgb: Rgb::new(0.0, 1.0, 1.0),
            initial_brightness: 1.0,
            initial_alpha: 1.0,
            hue_sweep: Sweep::THREE_QUARTER,
            saturation_sweep: Sweep::THREE_QUARTER,
            slider_range: ValueRange::UNIT,
            thumb_size: constants::THUMB_SIZE,
        }
    }
}

impl PickerConfig {
    pub fn with_dial_radius(mut self, radius: f64) -> Self {
        self.dial_radius = radius;
        self
    }

    pub fn with_knob_radius(mut self, radius: f64) -> Self {
        self.knob_radius = radius;
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_ring_gap(mut self, gap: f64) -> Self {
        self.ring_gap = gap;
        self
    }

    pub fn with_initial_rgb(mut self, rgb: Rgb) -> Self {
        self.initial_rgb = rgb;
        self
    }

    pub fn with_initial_brightness(mut self, brightness: f64) -> Self {
        self.initial_brightness = brightness;
        self
    }

    pub fn with_initial_alpha(mut self, alpha: f64) -> Self {
        self.initial_alpha = alpha;
        self
    }

    /// Start from `color`: hue and saturation from its RGB, brightness and
    /// alpha from its value and alpha.
    pub fn with_initial_color(mut self, color: RingColor) -> Self {
        let hsv = color.to_hsv();
        self.initial_rgb = Hsv::new(hsv.h, hsv.s, 1.0).to_rgb();
        self.initial_brightness = hsv.v;
        self.initial_alpha = color.a();
        self
    }

    pub fn with_slider_range(mut self, range: ValueRange) -> Self {
        self.slider_range = range;
        self
    }

    /// Dial geometry for one ring. The saturation ring is `ring_gap` inside
    /// the hue ring.
    pub fn dial_config(&self, kind: DialKind) -> DialConfig {
        let (sweep, dial_radius) = match kind {
            DialKind::Hue => (self.hue_sweep, self.dial_radius),
            DialKind::Saturation => (self.saturation_sweep, self.dial_radius - self.ring_gap),
        };
        DialConfig {
            sweep,
            knob_radius: self.knob_radius,
            dial_radius,
            padding: self.knob_padding,
        }
    }

    /// Side of the square that fits the outer ring and its knob.
    pub fn outer_size(&self) -> f64 {
        2.0 * (self.dial_radius + self.knob_radius)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("line width", self.line_width)?;
        ensure_positive("thumb size", self.thumb_size)?;
        ensure_non_negative("ring gap", self.ring_gap)?;
        ensure_finite("initial red", self.initial_rgb.r)?;
        ensure_finite("initial green", self.initial_rgb.g)?;
        ensure_finite("initial blue", self.initial_rgb.b)?;
        ensure_finite("initial brightness", self.initial_brightness)?;
        ensure_finite("initial alpha", self.initial_alpha)?;
        Field::Brightness.check_slider_range(self.slider_range)?;
        self.dial_config(DialKind::Hue).validate()?;
        self.dial_config(DialKind::Saturation).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;

    #[test]
    fn default_config_is_valid() {
        let config = PickerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.outer_size(), 280.0);
    }

    #[test]
    fn saturation_ring_sits_inside_hue_ring() {
        let config = PickerConfig::default();
        let hue = config.dial_config(DialKind::Hue);
        let sat = config.dial_config(DialKind::Saturation);
        assert_eq!(hue.dial_radius, 125.0);
        assert_eq!(sat.dial_radius, 85.0);
        assert_eq!(hue.origin_offset(), 25.0);
    }

    #[test]
    fn gap_swallowing_the_inner_ring_is_rejected() {
        let config = PickerConfig::default().with_ring_gap(125.0);
        assert!(matches!(
            config.validate(),
            Err(PickerError::InvalidRadius {
                name: "dial radius",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_initial_values_are_rejected() {
        let config = PickerConfig::default().with_initial_brightness(f64::NAN);
        assert_eq!(
            config.validate(),
            Err(PickerError::NonFinite {
                name: "initial brightness"
            })
        );
    }

    #[test]
    fn zero_line_width_is_rejected() {
        assert!(PickerConfig::default().with_line_width(0.0).validate().is_err());
    }

    #[test]
    fn brightness_range_beyond_unit_is_rejected() {
        let config = PickerConfig::default().with_slider_range(ValueRange::new(0.0, 100.0).unwrap());
        assert!(matches!(
            config.validate(),
            Err(PickerError::RangeOutsideDomain {
                field: "brightness",
                ..
            })
        ));

        let narrow = PickerConfig::default().with_slider_range(ValueRange::new(0.2, 0.8).unwrap());
        assert_eq!(narrow.validate(), Ok(()));
    }

    #[test]
    fn negative_gap_is_reported_as_negative() {
        let config = PickerConfig::default().with_ring_gap(-5.0);
        assert_eq!(
            config.validate(),
            Err(PickerError::Negative {
                name: "ring gap",
                value: -5.0
            })
        );
    }
}
