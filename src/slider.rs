//! Linear slider controller.
//!
//! Drags are applied as deltas from where the thumb sat when the gesture
//! began, not as absolute pointer positions, so grabbing the thumb off-center
//! never makes it jump. Clamping happens in pixel space before mapping back
//! to the value range.

use crate::constants;
use crate::error::{PickerError, Result};
use crate::range::{ValueRange, map_value};
use crate::state::{Field, PickerState};

/// Stateful delta-driven slider over a value range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSlider {
    field: Field,
    range: ValueRange,
    track: ValueRange,
    value: f64,
    last_committed_pixel: f64,
}

impl LinearSlider {
    /// Slider for `field` over `range`, with the thumb travelling between
    /// `min_pixel` and `max_pixel`. `value` is clamped into `range`.
    pub fn new(
        field: Field,
        range: ValueRange,
        min_pixel: f64,
        max_pixel: f64,
        value: f64,
    ) -> Result<Self> {
        let track = Self::track(min_pixel, max_pixel)?;
        let value = range.clamp(value);
        let mut slider = Self {
            field,
            range,
            track,
            value,
            last_committed_pixel: 0.0,
        };
        slider.last_committed_pixel = slider.thumb_pixel();
        Ok(slider)
    }

    fn track(min_pixel: f64, max_pixel: f64) -> Result<ValueRange> {
        ValueRange::new(min_pixel, max_pixel).map_err(|_| PickerError::InvalidTrack {
            min_pixel,
            max_pixel,
        })
    }

    /// Thumb-center travel for a widget `width` wide with a `thumb_size` thumb.
    pub fn track_for_width(width: f64, thumb_size: f64) -> (f64, f64) {
        let half = thumb_size / 2.0;
        (half, width - half)
    }

    /// Replace the pixel bounds after a relayout; the value is kept.
    pub fn set_track(&mut self, min_pixel: f64, max_pixel: f64) -> Result<()> {
        self.track = Self::track(min_pixel, max_pixel)?;
        self.last_committed_pixel = self.thumb_pixel();
        Ok(())
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn min_pixel(&self) -> f64 {
        self.track.lower()
    }

    pub fn max_pixel(&self) -> f64 {
        self.track.upper()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Pixels per unit of value.
    pub fn scale_factor(&self) -> f64 {
        self.track.width() / self.range.width()
    }

    /// Current thumb position in pixels.
    pub fn thumb_pixel(&self) -> f64 {
        map_value(self.value, self.range, self.track)
    }

    /// Thumb position the current gesture's deltas are measured from.
    pub fn last_committed_pixel(&self) -> f64 {
        self.last_committed_pixel
    }

    /// Apply a drag translation measured from the gesture's start.
    ///
    /// A translation smaller than the gesture epsilon marks a new gesture and
    /// re-anchors on the thumb. Returns the new value.
    pub fn on_drag_changed(&mut self, translation_x: f64) -> f64 {
        if !translation_x.is_finite() {
            return self.value;
        }
        if translation_x.abs() < constants::GESTURE_EPSILON {
            self.last_committed_pixel = self.thumb_pixel();
            log::trace!(
                "{:?} slider anchored at pixel {:.2}",
                self.field,
                self.last_committed_pixel
            );
        }

        let target = self.last_committed_pixel + translation_x;
        let next_pixel = if translation_x > 0.0 {
            target.min(self.track.upper())
        } else {
            target.max(self.track.lower())
        };

        self.value = self
            .range
            .clamp(map_value(next_pixel, self.track, self.range));
        self.value
    }

    /// Drag and write the new value into `state`.
    pub fn apply_drag(&mut self, state: &mut PickerState, translation_x: f64) -> bool {
        let value = self.on_drag_changed(translation_x);
        state.set(self.field, value)
    }

    /// Adopt a value set elsewhere.
    pub fn sync_value(&mut self, value: f64) {
        self.value = self.range.clamp(value);
    }
}
