//! Shared picker state.
//!
//! One [`PickerState`] holds the canonical hue, saturation, brightness and
//! alpha. Controllers never own a field; each one names the [`Field`] it
//! writes and hands its committed value back through [`PickerState::set`].
//! Renderers either read the state each frame or register an observer.

use std::fmt;

use crate::color::{Hsv, RingColor};
use crate::config::PickerConfig;
use crate::dial::{AngularDial, DialConfig, DialKind};
use crate::error::{PickerError, Result};
use crate::math;
use crate::range::ValueRange;
use crate::slider::LinearSlider;

/// Selects one component of the picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hue,
    Saturation,
    Brightness,
    Alpha,
}

impl Field {
    /// Bring `value` into this field's domain: hue wraps into `[0, 360)`,
    /// the rest clamp to 0.0–1.0.
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Field::Hue => math::wrap_hue(value),
            Field::Saturation | Field::Brightness | Field::Alpha => math::clamp_unit(value),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Hue => "hue",
            Field::Saturation => "saturation",
            Field::Brightness => "brightness",
            Field::Alpha => "alpha",
        }
    }

    /// Every value the state can hold for this field.
    pub fn domain(self) -> ValueRange {
        match self {
            Field::Hue => ValueRange::DEGREES,
            Field::Saturation | Field::Brightness | Field::Alpha => ValueRange::UNIT,
        }
    }

    /// Accept a slider range only if the state can store all of it.
    pub(crate) fn check_slider_range(self, range: ValueRange) -> Result<ValueRange> {
        let domain = self.domain();
        if domain.covers(&range) {
            return Ok(range);
        }
        log::debug!("rejecting {} slider range {range:?}", self.name());
        Err(PickerError::RangeOutsideDomain {
            field: self.name(),
            lower: range.lower(),
            upper: range.upper(),
            min: domain.lower(),
            max: domain.upper(),
        })
    }
}

/// Plain copy of all four state fields, handed to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerSnapshot {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl PickerSnapshot {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Hue => self.hue,
            Field::Saturation => self.saturation,
            Field::Brightness => self.brightness,
            Field::Alpha => self.alpha,
        }
    }

    fn slot(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::Hue => &mut self.hue,
            Field::Saturation => &mut self.saturation,
            Field::Brightness => &mut self.brightness,
            Field::Alpha => &mut self.alpha,
        }
    }

    pub fn hsv(&self) -> Hsv {
        Hsv::new(self.hue, self.saturation, self.brightness)
    }

    pub fn rgba(&self) -> RingColor {
        RingColor::from_hsv(self.hsv(), self.alpha)
    }
}

/// Handle returned by [`PickerState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&PickerSnapshot)>;

/// The picker's single source of truth.
pub struct PickerState {
    values: PickerSnapshot,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl fmt::Debug for PickerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerState")
            .field("values", &self.values)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::from_color(RingColor::default())
    }
}

impl PickerState {
    pub fn new(hsv: Hsv, alpha: f64) -> Self {
        Self {
            values: PickerSnapshot {
                hue: Field::Hue.normalize(hsv.h),
                saturation: Field::Saturation.normalize(hsv.s),
                brightness: Field::Brightness.normalize(hsv.v),
                alpha: Field::Alpha.normalize(alpha),
            },
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn from_color(color: RingColor) -> Self {
        Self::new(color.to_hsv(), color.a())
    }

    /// Hue and saturation from the initial RGB, brightness and alpha as configured.
    pub fn from_config(config: &PickerConfig) -> Result<Self> {
        config.validate()?;
        let hsv = config.initial_rgb.to_hsv();
        Ok(Self::new(
            Hsv::new(hsv.h, hsv.s, config.initial_brightness),
            config.initial_alpha,
        ))
    }

    pub fn get(&self, field: Field) -> f64 {
        self.values.get(field)
    }

    pub fn hue(&self) -> f64 {
        self.values.hue
    }

    pub fn saturation(&self) -> f64 {
        self.values.saturation
    }

    pub fn brightness(&self) -> f64 {
        self.values.brightness
    }

    pub fn alpha(&self) -> f64 {
        self.values.alpha
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        self.values
    }

    /// Write one field (normalized into its domain). Observers are notified
    /// only when the stored value actually changes; returns whether it did.
    pub fn set(&mut self, field: Field, value: f64) -> bool {
        let value = field.normalize(value);
        let slot = self.values.slot(field);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.notify();
        true
    }

    /// Re-seed every field from an RGBA color.
    ///
    /// Gray and black carry no hue, so the current hue is kept for them.
    pub fn set_rgb(&mut self, color: RingColor) -> bool {
        let hsv = color.to_hsv();
        let mut next = PickerSnapshot {
            hue: self.values.hue,
            saturation: Field::Saturation.normalize(hsv.s),
            brightness: Field::Brightness.normalize(hsv.v),
            alpha: Field::Alpha.normalize(color.a()),
        };
        if hsv.s > 0.0 && hsv.v > 0.0 {
            next.hue = Field::Hue.normalize(hsv.h);
        }
        if next == self.values {
            return false;
        }
        self.values = next;
        self.notify();
        true
    }

    /// Current color: HSV converted to RGB with alpha passed through.
    pub fn current_rgb(&self) -> RingColor {
        self.values.rgba()
    }

    /// Register a callback run after every effective change.
    pub fn subscribe(&mut self, observer: impl FnMut(&PickerSnapshot) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let snapshot = self.values;
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }

    /// Hue dial starting from the current hue.
    pub fn bind_hue_dial(&self, config: DialConfig) -> Result<AngularDial> {
        AngularDial::new(DialKind::Hue, config, self.values.hue)
    }

    /// Saturation dial starting from the current saturation.
    pub fn bind_saturation_dial(&self, config: DialConfig) -> Result<AngularDial> {
        AngularDial::new(DialKind::Saturation, config, self.values.saturation)
    }

    /// Brightness slider starting from the current brightness.
    pub fn bind_brightness_slider(
        &self,
        range: ValueRange,
        min_pixel: f64,
        max_pixel: f64,
    ) -> Result<LinearSlider> {
        self.bind_slider(Field::Brightness, range, min_pixel, max_pixel)
    }

    /// Slider bound to any field, starting from its current value.
    ///
    /// `range` must fit inside the field's domain, otherwise the slider and
    /// the stored value would drift apart.
    pub fn bind_slider(
        &self,
        field: Field,
        range: ValueRange,
        min_pixel: f64,
        max_pixel: f64,
    ) -> Result<LinearSlider> {
        let range = field.check_slider_range(range)?;
        LinearSlider::new(field, range, min_pixel, max_pixel, self.get(field))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::color::Rgb;

    #[test]
    fn default_state_is_opaque_cyan() {
        let state = PickerState::default();
        assert_eq!(state.hue(), 180.0);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.brightness(), 1.0);
        assert_eq!(state.alpha(), 1.0);
        assert_eq!(state.current_rgb().to_hex(), "00FFFF");
    }

    #[test]
    fn set_normalizes_into_field_domain() {
        let mut state = PickerState::default();
        state.set(Field::Hue, 370.0);
        assert!((state.hue() - 10.0).abs() < 1e-9);
        state.set(Field::Saturation, 1.5);
        assert_eq!(state.saturation(), 1.0);
        state.set(Field::Alpha, -0.5);
        assert_eq!(state.alpha(), 0.0);
    }

    #[test]
    fn observers_see_changes_only() {
        let mut state = PickerState::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = state.subscribe(move |snap| sink.borrow_mut().push(snap.brightness));

        assert!(state.set(Field::Brightness, 0.5));
        assert!(!state.set(Field::Brightness, 0.5));
        assert_eq!(*seen.borrow(), vec![0.5]);

        assert!(state.unsubscribe(id));
        state.set(Field::Brightness, 0.2);
        assert_eq!(seen.borrow().len(), 1);
        assert!(!state.unsubscribe(id));
    }

    #[test]
    fn current_rgb_passes_alpha_through() {
        let mut state = PickerState::new(Hsv::new(0.0, 1.0, 1.0), 0.5);
        assert_eq!(state.current_rgb().to_hex(), "FF000080");
        state.set(Field::Brightness, 0.0);
        assert_eq!(state.current_rgb().to_rgb8(), (0, 0, 0));
    }

    #[test]
    fn set_rgb_keeps_hue_for_gray() {
        let mut state = PickerState::new(Hsv::new(210.0, 0.8, 0.9), 1.0);
        state.set_rgb(RingColor::from_rgba(0.4, 0.4, 0.4, 1.0));
        assert_eq!(state.hue(), 210.0);
        assert_eq!(state.saturation(), 0.0);
        assert!((state.brightness() - 0.4).abs() < 1e-12);

        state.set_rgb(RingColor::from_rgb8(255, 0, 0));
        assert_eq!(state.hue(), 0.0);
    }

    #[test]
    fn from_config_combines_rgb_and_brightness() {
        let config = PickerConfig::default()
            .with_initial_rgb(Rgb::new(1.0, 0.0, 0.0))
            .with_initial_brightness(0.25);
        let state = PickerState::from_config(&config).unwrap();
        assert_eq!(state.hue(), 0.0);
        assert_eq!(state.saturation(), 1.0);
        assert_eq!(state.brightness(), 0.25);
    }

    #[test]
    fn bound_controllers_start_from_state() {
        let state = PickerState::new(Hsv::new(90.0, 0.25, 0.6), 1.0);
        let hue = state.bind_hue_dial(DialConfig::default()).unwrap();
        assert_eq!(hue.value(), 90.0);
        assert_eq!(hue.field(), Field::Hue);

        let sat = state.bind_saturation_dial(DialConfig::default()).unwrap();
        assert!((sat.angle_degrees() - 202.5).abs() < 1e-9);

        let slider = state
            .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
            .unwrap();
        assert!((slider.thumb_pixel() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn controllers_write_only_their_own_field() {
        let mut state = PickerState::new(Hsv::new(90.0, 0.25, 0.6), 0.8);
        let mut slider = state
            .bind_brightness_slider(ValueRange::UNIT, 0.0, 100.0)
            .unwrap();
        slider.apply_drag(&mut state, 0.0);
        slider.apply_drag(&mut state, 30.0);
        assert!((state.brightness() - 0.9).abs() < 1e-9);
        assert_eq!(state.hue(), 90.0);
        assert_eq!(state.saturation(), 0.25);
        assert_eq!(state.alpha(), 0.8);
    }

    #[test]
    fn slider_range_must_fit_the_field() {
        let state = PickerState::default();
        let wide = ValueRange::new(0.0, 100.0).unwrap();
        assert_eq!(
            state.bind_brightness_slider(wide, 0.0, 100.0).unwrap_err(),
            PickerError::RangeOutsideDomain {
                field: "brightness",
                lower: 0.0,
                upper: 100.0,
                min: 0.0,
                max: 1.0,
            }
        );
        assert!(state.bind_slider(Field::Alpha, wide, 0.0, 100.0).is_err());
        assert!(state.bind_slider(Field::Hue, ValueRange::DEGREES, 0.0, 100.0).is_ok());
    }

    #[test]
    fn narrow_slider_range_stays_in_step_with_state() {
        let mut state = PickerState::default();
        let upper_half = ValueRange::new(0.5, 1.0).unwrap();
        let mut slider = state
            .bind_brightness_slider(upper_half, 0.0, 100.0)
            .unwrap();
        slider.apply_drag(&mut state, 0.0);
        slider.apply_drag(&mut state, 50.0);
        assert_eq!(slider.value(), state.brightness());
        slider.apply_drag(&mut state, -50.0);
        assert_eq!(slider.value(), state.brightness());
        assert!((state.brightness() - 0.75).abs() < 1e-9);
    }
}
