//! Angular dial controller.
//!
//! Turns a pointer position into a bounded value along a 3/4-circle sweep.
//! Angles are measured clockwise from straight up in the dial's own frame
//! (y grows downward). Pointer input is expected relative to an origin
//! shifted by [`DialConfig::origin_offset`], which the dial subtracts again
//! before taking the angle.
//!
//! The sweep covers `min_value..=max_value` of a `total_value` turn; angles
//! beyond `max_value` fall in the dead zone and are ignored.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::constants;
use crate::error::{PickerError, Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::math;
use crate::state::{Field, PickerState};

/// Which color component a dial drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialKind {
    /// Commits the raw angle value as hue in degrees.
    Hue,
    /// Commits `1 - raw/total * 4/3`, so the sweep start is full saturation.
    Saturation,
}

impl DialKind {
    /// The state field this kind of dial writes.
    pub fn field(self) -> Field {
        match self {
            DialKind::Hue => Field::Hue,
            DialKind::Saturation => Field::Saturation,
        }
    }
}

/// The reachable part of a dial's turn, in domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub min_value: f64,
    pub max_value: f64,
    pub total_value: f64,
}

impl Sweep {
    /// 0–270 of a 360 turn, leaving a 90 unit dead zone.
    pub const THREE_QUARTER: Sweep = Sweep {
        min_value: 0.0,
        max_value: constants::ACTIVE_SWEEP,
        total_value: constants::FULL_TURN,
    };

    pub fn validate(&self) -> Result<()> {
        ensure_finite("sweep min value", self.min_value)?;
        ensure_finite("sweep max value", self.max_value)?;
        ensure_finite("sweep total value", self.total_value)?;
        let ordered = self.min_value >= 0.0
            && self.min_value < self.max_value
            && self.max_value <= self.total_value;
        if !ordered {
            log::debug!("rejecting dial sweep {self:?}");
            return Err(PickerError::InvalidSweep {
                min: self.min_value,
                max: self.max_value,
                total: self.total_value,
            });
        }
        Ok(())
    }

    /// Width of the dead zone in domain units.
    pub fn dead_zone(&self) -> f64 {
        self.total_value - self.max_value + self.min_value
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Sweep::THREE_QUARTER
    }
}

/// Fixed geometry of one dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialConfig {
    pub sweep: Sweep,
    pub knob_radius: f64,
    pub dial_radius: f64,
    pub padding: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            sweep: Sweep::THREE_QUARTER,
            knob_radius: constants::KNOB_RADIUS,
            dial_radius: constants::DIAL_RADIUS,
            padding: constants::KNOB_PADDING,
        }
    }
}

impl DialConfig {
    pub fn with_dial_radius(self, dial_radius: f64) -> Self {
        Self {
            dial_radius,
            ..self
        }
    }

    pub fn with_knob_radius(self, knob_radius: f64) -> Self {
        Self {
            knob_radius,
            ..self
        }
    }

    pub fn with_sweep(self, sweep: Sweep) -> Self {
        Self { sweep, ..self }
    }

    /// Distance the pointer origin sits from the dial center on both axes.
    pub fn origin_offset(&self) -> f64 {
        self.knob_radius + self.padding
    }

    pub fn validate(&self) -> Result<()> {
        self.sweep.validate()?;
        ensure_positive("dial radius", self.dial_radius)?;
        ensure_positive("knob radius", self.knob_radius)?;
        ensure_non_negative("knob padding", self.padding)?;
        Ok(())
    }
}

/// Clockwise angle from straight up, in `[0, 2π)`.
///
/// The origin itself has no direction and reports 0.
fn pointer_angle(dx: f64, dy: f64) -> f64 {
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    let angle = dy.atan2(dx) + FRAC_PI_2;
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Saturation committed for a raw sweep value.
fn saturation_for_raw(raw: f64, total: f64) -> f64 {
    // full saturation spread over 3/4 of the turn
    math::clamp_unit(1.0 - raw / total * 4.0 / 3.0)
}

/// Value a dial of `kind` commits for an accepted raw sweep value.
///
/// A sweep that runs to the full turn can report exactly `total`; hue wraps
/// that back to 0 so the dial agrees with the state.
fn value_for_raw(kind: DialKind, raw: f64, total: f64) -> f64 {
    match kind {
        DialKind::Hue => Field::Hue.normalize(raw),
        DialKind::Saturation => saturation_for_raw(raw, total),
    }
}

/// Raw sweep value that commits `saturation`.
fn raw_for_saturation(saturation: f64, total: f64) -> f64 {
    (1.0 - math::clamp_unit(saturation)) * 3.0 / 4.0 * total
}

/// Rotate a screen-space offset from the ring center into the dial frame
/// and shift it by `origin_offset`, ready for [`AngularDial::on_drag_changed`].
pub fn screen_to_dial_frame(dx: f64, dy: f64, origin_offset: f64) -> (f64, f64) {
    let phi = (-constants::SWEEP_ROTATION_DEG).to_radians();
    let (sin, cos) = phi.sin_cos();
    (
        dx * cos - dy * sin + origin_offset,
        dx * sin + dy * cos + origin_offset,
    )
}

/// Stateful hue or saturation dial.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularDial {
    kind: DialKind,
    config: DialConfig,
    value: f64,
    angle_degrees: f64,
}

impl AngularDial {
    /// Validate `config` and place the knob for `initial_value`.
    pub fn new(kind: DialKind, config: DialConfig, initial_value: f64) -> Result<Self> {
        config.validate()?;
        let mut dial = Self {
            kind,
            config,
            value: 0.0,
            angle_degrees: 0.0,
        };
        dial.sync_value(initial_value);
        Ok(dial)
    }

    pub fn kind(&self) -> DialKind {
        self.kind
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn field(&self) -> Field {
        self.kind.field()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Knob angle in degrees, clockwise from the sweep start.
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Value and knob angle (radians) for a pointer, if it is on the sweep.
    fn resolve(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let offset = self.config.origin_offset();
        let fixed_angle = pointer_angle(x - offset, y - offset);
        let Sweep {
            min_value,
            max_value,
            total_value,
        } = self.config.sweep;
        let raw = fixed_angle / TAU * total_value;

        if raw < min_value || raw > max_value {
            return None;
        }

        Some((value_for_raw(self.kind, raw, total_value), fixed_angle))
    }

    /// The value a drag at `(x, y)` would commit, without committing it.
    pub fn preview(&self, x: f64, y: f64) -> Option<f64> {
        self.resolve(x, y).map(|(value, _)| value)
    }

    /// Handle a drag at `(x, y)` in the offset dial frame.
    ///
    /// Returns the committed value, or `None` when the pointer is in the dead
    /// zone (value and knob angle are then left untouched).
    pub fn on_drag_changed(&mut self, x: f64, y: f64) -> Option<f64> {
        let Some((value, fixed_angle)) = self.resolve(x, y) else {
            log::trace!("{:?} dial ignoring drag at ({x:.1}, {y:.1})", self.kind);
            return None;
        };
        self.value = value;
        self.angle_degrees = fixed_angle.to_degrees();
        Some(value)
    }

    /// Drag and write the committed value into `state`.
    pub fn apply_drag(&mut self, state: &mut PickerState, x: f64, y: f64) -> bool {
        match self.on_drag_changed(x, y) {
            Some(value) => {
                state.set(self.field(), value);
                true
            }
            None => false,
        }
    }

    /// Knob angle in degrees for `value`, held inside the active sweep.
    pub fn angle_for_value(&self, value: f64) -> f64 {
        let Sweep {
            min_value,
            max_value,
            total_value,
        } = self.config.sweep;
        let raw = match self.kind {
            DialKind::Hue => math::wrap_hue(value),
            DialKind::Saturation => raw_for_saturation(value, total_value),
        };
        raw.clamp(min_value, max_value) / total_value * constants::FULL_TURN
    }

    /// Adopt a value set elsewhere and move the knob to match.
    pub fn sync_value(&mut self, value: f64) {
        self.value = self.field().normalize(value);
        self.angle_degrees = self.angle_for_value(self.value);
    }

    /// Knob center relative to the dial center, in the dial frame.
    pub fn knob_offset(&self) -> (f64, f64) {
        let (sin, cos) = self.angle_degrees.to_radians().sin_cos();
        let r = self.config.dial_radius;
        (r * sin, -r * cos)
    }

    /// Knob center relative to the dial center as drawn on screen.
    pub fn knob_screen_offset(&self) -> (f64, f64) {
        let angle = (self.angle_degrees + constants::SWEEP_ROTATION_DEG).to_radians();
        let (sin, cos) = angle.sin_cos();
        let r = self.config.dial_radius;
        (r * sin, -r * cos)
    }
}
