//! Headless drag flows through the public API: dials and sliders bound to a
//! shared `PickerState`, with an observer standing in for the renderer.

use std::cell::RefCell;
use std::rc::Rc;

use floem_hsv_ring::dial::screen_to_dial_frame;
use floem_hsv_ring::{
    AngularDial, DialKind, Field, PickerConfig, PickerError, PickerSnapshot, PickerState,
    RingColor, ValueRange,
};

/// Dial-frame pointer at `degrees` clockwise from the sweep start.
fn pointer_at(dial: &AngularDial, degrees: f64) -> (f64, f64) {
    let offset = dial.config().origin_offset();
    let r = dial.config().dial_radius;
    let (sin, cos) = degrees.to_radians().sin_cos();
    (offset + r * sin, offset - r * cos)
}

fn recorded(state: &mut PickerState) -> Rc<RefCell<Vec<PickerSnapshot>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    state.subscribe(move |snap| sink.borrow_mut().push(*snap));
    seen
}

#[test]
fn dragging_both_rings_and_the_slider_builds_a_color() {
    let config = PickerConfig::default();
    let mut state = PickerState::from_config(&config).unwrap();
    let seen = recorded(&mut state);

    let mut hue = state
        .bind_hue_dial(config.dial_config(DialKind::Hue))
        .unwrap();
    let mut saturation = state
        .bind_saturation_dial(config.dial_config(DialKind::Saturation))
        .unwrap();
    let mut brightness = state
        .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
        .unwrap();

    // hue to 120 (green)
    let (x, y) = pointer_at(&hue, 120.0);
    assert!(hue.apply_drag(&mut state, x, y));
    assert!((state.hue() - 120.0).abs() < 1e-9);

    // saturation raw 135 commits 0.5
    let (x, y) = pointer_at(&saturation, 135.0);
    assert!(saturation.apply_drag(&mut state, x, y));
    assert!((state.saturation() - 0.5).abs() < 1e-9);

    // brightness down by half the track
    brightness.apply_drag(&mut state, 0.0);
    brightness.apply_drag(&mut state, -50.0);
    assert_eq!(state.brightness(), 0.5);

    let (r, g, b) = state.current_rgb().to_rgb8();
    assert_eq!((r, g, b), (64, 128, 64));
    assert_eq!(state.alpha(), 1.0);

    let last = *seen.borrow().last().unwrap();
    assert_eq!(last, state.snapshot());
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn dead_zone_leaves_dial_and_state_alone() {
    let mut state = PickerState::default();
    let mut hue = state.bind_hue_dial(Default::default()).unwrap();
    let (x, y) = pointer_at(&hue, 90.0);
    hue.apply_drag(&mut state, x, y);
    let seen = recorded(&mut state);

    let before = (hue.value(), hue.angle_degrees(), state.snapshot());
    let (x, y) = pointer_at(&hue, 300.0);
    assert!(!hue.apply_drag(&mut state, x, y));
    assert_eq!((hue.value(), hue.angle_degrees(), state.snapshot()), before);
    assert!(seen.borrow().is_empty());
}

#[test]
fn saturation_ring_runs_full_to_empty() {
    let mut state = PickerState::default();
    let mut saturation = state.bind_saturation_dial(Default::default()).unwrap();

    let (x, y) = pointer_at(&saturation, 0.0);
    saturation.apply_drag(&mut state, x, y);
    assert_eq!(state.saturation(), 1.0);

    let (x, y) = pointer_at(&saturation, 202.5);
    saturation.apply_drag(&mut state, x, y);
    assert!((state.saturation() - 0.25).abs() < 1e-9);

    // just inside the end of the sweep
    let (x, y) = pointer_at(&saturation, 269.99);
    saturation.apply_drag(&mut state, x, y);
    assert!(state.saturation() < 1e-3);
    assert_eq!(state.current_rgb().to_hex(), "FFFFFF");
}

#[test]
fn slider_clamps_at_the_track_end() {
    let mut state = PickerState::default();
    let mut slider = state
        .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
        .unwrap();
    assert_eq!(slider.thumb_pixel(), 100.0);

    assert!(!slider.apply_drag(&mut state, 50.0));
    assert_eq!(state.brightness(), 1.0);
}

#[test]
fn slider_reanchors_on_a_new_gesture() {
    let mut state = PickerState::default();
    state.set(Field::Brightness, 0.4);
    let mut slider = state
        .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
        .unwrap();

    // the first gesture leaves its anchor at 40 while the thumb ends at 50
    slider.apply_drag(&mut state, 0.0);
    slider.apply_drag(&mut state, 10.0);
    assert!((state.brightness() - 0.5).abs() < 1e-9);

    slider.apply_drag(&mut state, 0.05);
    assert!((slider.last_committed_pixel() - 50.0).abs() < 1e-9);
    slider.apply_drag(&mut state, 20.0);
    assert!((state.brightness() - 0.7).abs() < 1e-9);
}

#[test]
fn screen_drag_matches_the_drawn_knob() {
    let config = PickerConfig::default();
    let mut state = PickerState::from_config(&config).unwrap();
    let mut hue = state
        .bind_hue_dial(config.dial_config(DialKind::Hue))
        .unwrap();

    // put a second dial's knob at hue 200 and drag the first onto it
    let mut target = hue.clone();
    target.sync_value(200.0);
    let (dx, dy) = target.knob_screen_offset();
    let (x, y) = screen_to_dial_frame(dx, dy, hue.config().origin_offset());
    assert!(hue.apply_drag(&mut state, x, y));
    assert!((state.hue() - 200.0).abs() < 1e-6);
}

#[test]
fn external_color_reseeds_the_state() {
    let mut state = PickerState::default();
    let seen = recorded(&mut state);

    let orange = RingColor::from_hex("FF8000").unwrap();
    assert!(state.set_rgb(orange));
    assert!(!state.set_rgb(orange));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(state.current_rgb().to_hex(), "FF8000");
}

#[test]
fn bad_configuration_fails_up_front() {
    let config = PickerConfig::default().with_ring_gap(200.0);
    assert!(matches!(
        PickerState::from_config(&config),
        Err(PickerError::InvalidRadius { .. })
    ));

    let state = PickerState::default();
    assert!(matches!(
        state.bind_brightness_slider(ValueRange::UNIT, 10.0, 10.0),
        Err(PickerError::InvalidTrack { .. })
    ));
    assert!(ValueRange::new(1.0, 1.0).is_err());
}
