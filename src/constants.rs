//! Geometry defaults, sweep constants, and view styling for the picker.

/// Default radius of the outer (hue) ring
pub const DIAL_RADIUS: f64 = 125.0;

/// Default knob radius
pub const KNOB_RADIUS: f64 = 15.0;

/// Default ring stroke width
pub const LINE_WIDTH: f64 = 10.0;

/// Padding around the knob, part of the drag origin offset
pub const KNOB_PADDING: f64 = 10.0;

/// Distance between the hue ring and the inner saturation ring
pub const RING_GAP: f64 = 40.0;

/// Conceptual full-circle span in domain units
pub const FULL_TURN: f64 = 360.0;

/// Reachable end of the 3/4-circle sweep
pub const ACTIVE_SWEEP: f64 = 270.0;

/// Screen rotation of the dial frame, puts the dead zone at the bottom
pub const SWEEP_ROTATION_DEG: f64 = -135.0;

/// Slider translations below this start a new gesture
pub const GESTURE_EPSILON: f64 = 0.1;

/// Slider thumb diameter
pub const THUMB_SIZE: f64 = 32.0;

/// Linear slider widget height, fits the thumb
pub const SLIDER_HEIGHT: f32 = 32.0;

/// Visible track line thickness
pub const TRACK_THICKNESS: f64 = 4.0;

/// Border radius for swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Hue readout font size
pub const READOUT_FONT: f32 = 40.0;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "alpha")]
pub const CHECKER_CELL: f64 = 5.0;
