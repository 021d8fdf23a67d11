//! # floem-hsv-ring
//!
//! An HSV ring color picker for [Floem](https://github.com/lapce/floem).
//!
//! Two concentric 3/4 rings pick hue (outside) and saturation (inside); a
//! linear slider picks brightness. The geometry and color math is plain Rust
//! and usable headless:
//!
//! ```rust
//! use floem_hsv_ring::{DialConfig, Field, PickerState, ValueRange};
//!
//! let mut state = PickerState::default();
//! let mut hue = state.bind_hue_dial(DialConfig::default()).unwrap();
//! let mut brightness = state
//!     .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
//!     .unwrap();
//!
//! // pointer straight up from the dial origin is the start of the sweep
//! let offset = hue.config().origin_offset();
//! hue.apply_drag(&mut state, offset, offset - 60.0);
//! assert_eq!(state.get(Field::Hue), 0.0);
//!
//! brightness.apply_drag(&mut state, 0.0);
//! brightness.apply_drag(&mut state, -50.0);
//! assert_eq!(state.brightness(), 0.5);
//! ```
//!
//! ## Widget
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsv_ring::{PickerConfig, RingColor, hsv_ring_picker};
//!
//! let start = RingColor::from_hex("3B82F6").unwrap();
//! let color = RwSignal::new(start);
//! let config = PickerConfig::default().with_initial_color(start);
//! let picker = hsv_ring_picker(color, config);
//! // Use `picker` in your Floem view tree.
//! ```

pub mod color;
pub mod config;
pub mod dial;
pub mod error;
pub mod math;
pub mod range;
pub mod slider;
pub mod state;

#[cfg(feature = "alpha")]
mod alpha_slider;
mod brightness_slider;
#[cfg(feature = "alpha")]
mod checkerboard;
mod constants;
mod dual_ring;
mod inputs;
mod picker;

pub use color::{Hsv, Rgb, RingColor};
pub use config::PickerConfig;
pub use dial::{AngularDial, DialConfig, DialKind, Sweep};
pub use error::{PickerError, Result};
pub use range::{ValueRange, map_value};
pub use slider::LinearSlider;
pub use state::{Field, ObserverId, PickerSnapshot, PickerState};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the ring picker view.
///
/// The picker starts from the config's initial color and writes it into
/// `color`; after that, external changes to the signal move the rings and
/// sliders. Fails only if `config` is invalid, leaving `color` untouched.
pub fn hsv_ring_picker(
    color: RwSignal<RingColor>,
    config: PickerConfig,
) -> Result<impl IntoView> {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::ring_picker(color, config)
}
