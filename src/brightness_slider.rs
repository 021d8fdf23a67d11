//! Brightness slider (0.0 black, left → 1.0 full color, right).
//!
//! The track is a rasterized black-to-color gradient. Dragging moves the
//! thumb by the pointer's travel since the press, so pressing anywhere on the
//! widget never makes the thumb jump under the pointer.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::config::PickerConfig;
use crate::constants;
use crate::error::Result;
use crate::math;
use crate::slider::LinearSlider;
use crate::state::{PickerSnapshot, PickerState};

/// Rasterize a horizontal gradient: black on the left → `(r, g, b)` on the right.
fn rasterize_brightness_gradient(width: u32, height: u32, r: f64, g: f64, b: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let texel = [
            (t * r * 255.0 + 0.5) as u8,
            (t * g * 255.0 + 0.5) as u8,
            (t * b * 255.0 + 0.5) as u8,
            255,
        ];
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&texel);
        }
    }
    buf
}

/// Paint the slider thumb: white disc with a soft outline.
pub(crate) fn paint_thumb(cx: &mut PaintCx, x: f64, cy: f64, radius: f64) {
    let disc = Circle::new((x, cy), radius - 1.0);
    cx.fill(&disc, Color::WHITE, 0.0);
    let outline = Circle::new((x, cy), radius - 0.5);
    cx.stroke(&outline, Color::rgba8(0, 0, 0, 60), &Stroke::new(1.0));
}

/// Drag bookkeeping shared by the linear slider views.
pub(crate) struct SliderDrag {
    state: Rc<RefCell<PickerState>>,
    pub(crate) slider: LinearSlider,
    gesture_start: Option<f64>,
    thumb_size: f64,
    width: f64,
}

impl SliderDrag {
    pub(crate) fn new(state: Rc<RefCell<PickerState>>, slider: LinearSlider, thumb_size: f64) -> Self {
        Self {
            state,
            slider,
            gesture_start: None,
            thumb_size,
            width: 0.0,
        }
    }

    pub(crate) fn thumb_radius(&self) -> f64 {
        self.thumb_size / 2.0
    }

    /// Refit the track to a new widget width.
    pub(crate) fn relayout(&mut self, width: f64) {
        if width == self.width {
            return;
        }
        self.width = width;
        let (min_pixel, max_pixel) = LinearSlider::track_for_width(width, self.thumb_size);
        if let Err(err) = self.slider.set_track(min_pixel, max_pixel) {
            log::debug!("slider too narrow for its thumb: {err}");
        }
    }

    fn apply(&mut self, translation_x: f64) -> bool {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            log::debug!("picker state busy, dropping slider drag");
            return false;
        };
        self.slider.apply_drag(&mut state, translation_x)
    }

    /// Route a pointer event: press anchors the gesture, moves apply deltas.
    pub(crate) fn handle(&mut self, id: ViewId, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(id);
                self.gesture_start = Some(e.pos.x);
                self.apply(0.0);
                id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => match self.gesture_start {
                Some(start) => {
                    if self.apply(e.pos.x - start) {
                        id.request_layout();
                    }
                    EventPropagation::Stop
                }
                None => EventPropagation::Continue,
            },
            Event::PointerUp(_) | Event::FocusLost => {
                self.gesture_start = None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    drag: SliderDrag,
    base_r: f64,
    base_g: f64,
    base_b: f64,
    size: floem::taffy::prelude::Size<f32>,
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_color: (u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates the brightness slider bound to `state`.
pub(crate) fn brightness_slider(
    state: Rc<RefCell<PickerState>>,
    values: RwSignal<PickerSnapshot>,
    config: &PickerConfig,
) -> Result<BrightnessSlider> {
    let id = ViewId::new();

    let (min_pixel, max_pixel) =
        LinearSlider::track_for_width(config.outer_size(), config.thumb_size);
    let slider = state
        .borrow()
        .bind_brightness_slider(config.slider_range, min_pixel, max_pixel)?;

    create_effect(move |_| {
        let snap = values.get();
        id.update_state(snap);
    });

    let snap = values.get_untracked();
    let (r, g, b) = math::hsv_to_rgb(snap.hue, snap.saturation, 1.0);

    Ok(BrightnessSlider {
        id,
        drag: SliderDrag::new(state, slider, config.thumb_size),
        base_r: r,
        base_g: g,
        base_b: b,
        size: Default::default(),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_color: (0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl BrightnessSlider {
    fn track_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let cy = self.size.height as f64 / 2.0;
        let half = constants::TRACK_THICKNESS / 2.0;
        let inset = self.drag.thumb_radius();
        Rect::new(inset, cy - half, (w - inset).max(inset), cy + half)
    }

    fn ensure_gradient_image(&mut self, rect: Rect, scale: f64) {
        let s = scale.max(1.0);
        let pw = (rect.width() * s).round() as u32;
        let ph = (rect.height() * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let color_key = (
            (self.base_r * 255.0 + 0.5) as u8,
            (self.base_g * 255.0 + 0.5) as u8,
            (self.base_b * 255.0 + 0.5) as u8,
        );
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_color == color_key {
            return;
        }

        let pixels = rasterize_brightness_gradient(pw, ph, self.base_r, self.base_g, self.base_b);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_color = color_key;
        self.cached_dims = dims;
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(snap) = state.downcast::<PickerSnapshot>() {
            let (r, g, b) = math::hsv_to_rgb(snap.hue, snap.saturation, 1.0);
            self.base_r = r;
            self.base_g = g;
            self.base_b = b;
            self.drag.slider.sync_value(snap.brightness);
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        self.drag.handle(self.id, cx, event)
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        self.drag.relayout(self.size.width as f64);
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let track = self.track_rect();
        let rtrack = track.to_rounded_rect(constants::TRACK_THICKNESS / 2.0);
        cx.save();
        cx.clip(&rtrack);
        let scale = cx.scale();
        self.ensure_gradient_image(track, scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                track,
            );
        }
        cx.restore();

        paint_thumb(cx, self.drag.slider.thumb_pixel(), h / 2.0, self.drag.thumb_radius());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_runs_from_black_to_color() {
        let buf = rasterize_brightness_gradient(11, 2, 1.0, 0.5, 0.0);
        assert_eq!(&buf[0..4], &[0, 0, 0, 255]);
        let last = (10 * 4) as usize;
        assert_eq!(&buf[last..last + 4], &[255, 128, 0, 255]);
        // second row repeats the first
        let row = (11 * 4) as usize;
        assert_eq!(&buf[row..row + 4], &buf[0..4]);
    }
}
