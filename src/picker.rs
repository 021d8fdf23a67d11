//! The assembled picker: dual rings, hue readout, swatch, brightness and
//! alpha sliders, and the hex row.
//!
//! `PickerState` is the single source of truth. It is seeded from the
//! config's initial color, which is pushed into the host's signal once. One
//! observer mirrors the state into a `values` signal that the views repaint
//! from; effects keep the host's color signal in step with it.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

#[cfg(feature = "alpha")]
use crate::alpha_slider::alpha_slider;
use crate::brightness_slider::brightness_slider;
use crate::color::RingColor;
use crate::config::PickerConfig;
use crate::constants;
use crate::dual_ring::dual_ring;
use crate::error::Result;
#[cfg(feature = "alpha")]
use crate::inputs::percent_input;
use crate::inputs::{copy_button, hex_input};
use crate::math;
#[cfg(feature = "alpha")]
use crate::state::Field;
use crate::state::PickerState;

/// Round-trip tolerance when comparing colors coming back from the host.
const ECHO_TOLERANCE: f64 = 0.005;

/// Build the state from `config` and hand its color to the host.
fn seed_state(color: RwSignal<RingColor>, config: &PickerConfig) -> Result<PickerState> {
    let state = PickerState::from_config(config)?;
    let seeded = state.current_rgb();
    if !seeded.approx_eq(&color.get_untracked(), ECHO_TOLERANCE) {
        log::debug!("seeding picker color {}", seeded.to_hex());
        color.set(seeded);
    }
    Ok(state)
}

pub(crate) fn ring_picker(
    color: RwSignal<RingColor>,
    config: PickerConfig,
) -> Result<impl IntoView> {
    let state = Rc::new(RefCell::new(seed_state(color, &config)?));
    let values = RwSignal::new(state.borrow().snapshot());

    state.borrow_mut().subscribe(move |snap| {
        values.set(*snap);
    });

    // state -> host color
    create_effect(move |_| {
        let next = values.get().rgba();
        if !next.approx_eq(&color.get_untracked(), 0.001) {
            color.set(next);
        }
    });

    // host color -> state
    let host_state = state.clone();
    create_effect(move |_| {
        let c = color.get();
        if c.approx_eq(&values.get_untracked().rgba(), ECHO_TOLERANCE) {
            return;
        }
        match host_state.try_borrow_mut() {
            Ok(mut st) => {
                st.set_rgb(c);
            }
            Err(_) => log::debug!("picker state busy, external color {} skipped", c.to_hex()),
        }
    });

    let rings = dual_ring(state.clone(), values, &config)?;
    let brightness = brightness_slider(state.clone(), values, &config)?;
    #[cfg(feature = "alpha")]
    let alpha = alpha_slider(state.clone(), values, &config)?;
    #[cfg(feature = "alpha")]
    let alpha_state = state.clone();

    Ok(v_stack((
        rings.style(|s| s.margin_top(12.0)),
        // Hue readout in its own color, swatch on the right
        h_stack((
            label(move || format!("{:.0}°", values.get().hue)).style(move |s| {
                let (r, g, b) = math::hsv_to_rgb(values.get().hue, 1.0, 1.0);
                s.font_size(constants::READOUT_FONT)
                    .color(Color::rgba(r, g, b, 1.0))
            }),
            empty().style(|s| s.flex_grow(1.0)),
            empty().style(move |s| {
                let c = color.get();
                s.width(32.0)
                    .height(32.0)
                    .border_radius(constants::RADIUS)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
            }),
        ))
        .style(|s| s.items_center().margin_horiz(8.0)),
        brightness.style(|s| s.margin_horiz(8.0)),
        #[cfg(feature = "alpha")]
        h_stack((
            alpha,
            percent_input(
                move || values.get().alpha,
                move |a| {
                    if let Ok(mut st) = alpha_state.try_borrow_mut() {
                        st.set(Field::Alpha, a);
                    }
                },
            ),
        ))
        .style(|s| s.margin_horiz(8.0).gap(4.0).items_center()),
        h_stack((hex_input(color), copy_button(color)))
            .style(|s| s.gap(constants::GAP).items_center().justify_center()),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_color_reaches_the_host_signal() {
        let color = RwSignal::new(RingColor::default());
        let config = PickerConfig::default().with_initial_brightness(0.25);
        let state = seed_state(color, &config).unwrap();
        assert_eq!(state.brightness(), 0.25);
        assert!(color.get_untracked().approx_eq(&state.current_rgb(), 1e-12));
        assert_eq!(color.get_untracked().to_hex(), "004040");
    }

    #[test]
    fn host_color_survives_when_passed_through_the_config() {
        let start = RingColor::from_hex("3B82F680").unwrap();
        let color = RwSignal::new(start);
        let config = PickerConfig::default().with_initial_color(start);
        let state = seed_state(color, &config).unwrap();
        assert!(state.current_rgb().approx_eq(&start, 1e-9));
        assert_eq!(color.get_untracked(), start);
    }

    #[test]
    fn invalid_config_leaves_the_host_alone() {
        let color = RwSignal::new(RingColor::default());
        let config = PickerConfig::default().with_line_width(0.0);
        assert!(seed_state(color, &config).is_err());
        assert_eq!(color.get_untracked(), RingColor::default());
    }
}
