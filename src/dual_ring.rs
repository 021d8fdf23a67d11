//! Concentric hue and saturation rings.
//!
//! The hue ring sits outside, the saturation ring inside. Both are drawn as
//! 3/4 arcs with the dead zone at the bottom, rasterized together into one
//! RGBA8 image that is rebuilt only when the colors or pixel size change.
//! Pointer input goes to whichever ring the press landed nearest.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect, Stroke};
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
use crate::dial::{AngularDial, DialKind, screen_to_dial_frame};
use crate::error::Result;
use crate::math;
use crate::state::{PickerSnapshot, PickerState};

/// Anti-alias width in physical pixels at the ring edges.
const FEATHER_PX: f64 = 1.5;

/// Rasterize both rings to an RGBA8 buffer `side` physical pixels square.
///
/// The hue ring uses the current saturation and brightness; the saturation
/// ring uses the current hue and brightness. Pixels outside either sweep
/// stay transparent.
fn rasterize_rings(
    side: u32,
    scale: f64,
    dials: [&AngularDial; 2],
    half_width: f64,
    values: PickerSnapshot,
) -> Vec<u8> {
    let c = side as f64 / 2.0;
    let feather = FEATHER_PX / scale;
    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = (py as f64 + 0.5 - c) / scale;
        let row_offset = (py * side * 4) as usize;

        for px in 0..side {
            let dx = (px as f64 + 0.5 - c) / scale;
            let dist = (dx * dx + dy * dy).sqrt();

            for dial in dials {
                let band = (dist - dial.config().dial_radius).abs();
                if band > half_width + feather {
                    continue;
                }
                let (x, y) = screen_to_dial_frame(dx, dy, dial.config().origin_offset());
                let Some(v) = dial.preview(x, y) else {
                    continue;
                };

                let alpha = ((half_width + feather - band) / feather).clamp(0.0, 1.0);
                let (r, g, b) = match dial.kind() {
                    DialKind::Hue => math::hsv_to_rgb(v, values.saturation, values.brightness),
                    DialKind::Saturation => math::hsv_to_rgb(values.hue, v, values.brightness),
                };
                let offset = row_offset + (px * 4) as usize;
                buf[offset] = (r * 255.0 + 0.5) as u8;
                buf[offset + 1] = (g * 255.0 + 0.5) as u8;
                buf[offset + 2] = (b * 255.0 + 0.5) as u8;
                buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
                break;
            }
        }
    }

    buf
}

/// The ring whose radius is nearest to a press `dist` from the center.
///
/// Presses farther than `tolerance` from both rings miss. A press exactly
/// between them goes to the first ring listed.
fn nearest_ring(dist: f64, dials: [&AngularDial; 2], tolerance: f64) -> Option<DialKind> {
    dials
        .into_iter()
        .map(|dial| (dial.kind(), (dist - dial.config().dial_radius).abs()))
        .filter(|(_, gap)| *gap <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(kind, _)| kind)
}

/// Image cache key: physical side plus 8-bit quantized colors.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
struct RasterKey {
    side: u32,
    hue: u16,
    saturation: u8,
    brightness: u8,
}

impl RasterKey {
    fn new(side: u32, values: &PickerSnapshot) -> Self {
        Self {
            side,
            hue: (values.hue * 10.0).round() as u16,
            saturation: (values.saturation * 255.0).round() as u8,
            brightness: (values.brightness * 255.0).round() as u8,
        }
    }
}

pub(crate) struct DualRing {
    id: ViewId,
    state: Rc<RefCell<PickerState>>,
    hue_dial: AngularDial,
    saturation_dial: AngularDial,
    active: Option<DialKind>,
    values: PickerSnapshot,
    knob_radius: f64,
    line_width: f64,
    size: floem::taffy::prelude::Size<f32>,
    ring_img: Option<peniko::Image>,
    ring_hash: Vec<u8>,
    cached_key: RasterKey,
}

/// Creates the dual-ring control bound to `state`.
///
/// `values` mirrors the state and drives repaints; drags write to `state`
/// directly.
pub(crate) fn dual_ring(
    state: Rc<RefCell<PickerState>>,
    values: RwSignal<PickerSnapshot>,
    config: &PickerConfig,
) -> Result<DualRing> {
    let id = ViewId::new();

    let (hue_dial, saturation_dial) = {
        let st = state.borrow();
        (
            st.bind_hue_dial(config.dial_config(DialKind::Hue))?,
            st.bind_saturation_dial(config.dial_config(DialKind::Saturation))?,
        )
    };

    create_effect(move |_| {
        let snap = values.get();
        id.update_state(snap);
    });

    let side = config.outer_size();
    Ok(DualRing {
        id,
        state,
        hue_dial,
        saturation_dial,
        active: None,
        values: values.get_untracked(),
        knob_radius: config.knob_radius,
        line_width: config.line_width,
        size: Default::default(),
        ring_img: None,
        ring_hash: Vec::new(),
        cached_key: RasterKey::default(),
    }
    .style(move |s| {
        s.width(side)
            .height(side)
            .align_self(Some(floem::taffy::AlignItems::Center))
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl DualRing {
    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    fn dial_mut(&mut self, kind: DialKind) -> &mut AngularDial {
        match kind {
            DialKind::Hue => &mut self.hue_dial,
            DialKind::Saturation => &mut self.saturation_dial,
        }
    }

    fn hit_test(&self, pos: Point) -> Option<DialKind> {
        nearest_ring(
            pos.distance(self.center()),
            [&self.hue_dial, &self.saturation_dial],
            self.knob_radius + self.line_width,
        )
    }

    fn drag(&mut self, kind: DialKind, pos: Point) {
        let center = self.center();
        let shared = self.state.clone();
        let Ok(mut state) = shared.try_borrow_mut() else {
            log::debug!("picker state busy, dropping {kind:?} drag");
            return;
        };
        let dial = self.dial_mut(kind);
        let (x, y) = screen_to_dial_frame(
            pos.x - center.x,
            pos.y - center.y,
            dial.config().origin_offset(),
        );
        if dial.apply_drag(&mut state, x, y) {
            self.id.request_layout();
        }
    }

    fn ensure_ring_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let side = (self.size.width.min(self.size.height) as f64 * s).round() as u32;
        if side == 0 {
            return;
        }
        let key = RasterKey::new(side, &self.values);
        if self.ring_img.is_some() && self.cached_key == key {
            return;
        }

        let pixels = rasterize_rings(
            side,
            s,
            [&self.hue_dial, &self.saturation_dial],
            self.line_width / 2.0,
            self.values,
        );
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.ring_hash = blob.id().to_le_bytes().to_vec();
        self.ring_img = Some(img);
        self.cached_key = key;
    }

    fn paint_knob(&self, cx: &mut PaintCx, dial: &AngularDial) {
        let center = self.center();
        let (ox, oy) = dial.knob_screen_offset();
        let pt = Point::new(center.x + ox, center.y + oy);

        let halo = Circle::new(pt, self.knob_radius * 0.6);
        cx.fill(&halo, Color::rgba(1.0, 1.0, 1.0, 0.5), 0.0);
        let ring = Circle::new(pt, self.knob_radius);
        cx.stroke(&ring, Color::WHITE, &Stroke::new(1.5));
        let outline = Circle::new(pt, self.knob_radius + 1.0);
        cx.stroke(&outline, Color::rgba8(0, 0, 0, 80), &Stroke::new(1.0));
        let core = Circle::new(pt, self.line_width / 2.0);
        cx.fill(&core, Color::WHITE, 0.0);
    }
}

impl View for DualRing {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(snap) = state.downcast::<PickerSnapshot>() {
            self.values = *snap;
            // external edits move the knobs; live drags already agree
            if (self.hue_dial.value() - snap.hue).abs() > 1e-9 {
                self.hue_dial.sync_value(snap.hue);
            }
            if (self.saturation_dial.value() - snap.saturation).abs() > 1e-9 {
                self.saturation_dial.sync_value(snap.saturation);
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => match self.hit_test(e.pos) {
                Some(kind) => {
                    cx.update_active(self.id());
                    self.active = Some(kind);
                    self.drag(kind, e.pos);
                    EventPropagation::Stop
                }
                None => EventPropagation::Continue,
            },
            Event::PointerMove(e) => match self.active {
                Some(kind) => {
                    self.drag(kind, e.pos);
                    EventPropagation::Stop
                }
                None => EventPropagation::Continue,
            },
            Event::PointerUp(_) | Event::FocusLost => {
                self.active = None;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let center = self.center();
        let half = w.min(h) / 2.0;
        let rect = Rect::new(center.x - half, center.y - half, center.x + half, center.y + half);

        let scale = cx.scale();
        self.ensure_ring_image(scale);
        if let Some(ref img) = self.ring_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ring_hash,
                },
                rect,
            );
        }

        self.paint_knob(cx, &self.saturation_dial);
        self.paint_knob(cx, &self.hue_dial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dials() -> (AngularDial, AngularDial) {
        let config = PickerConfig::default();
        let state = PickerState::default();
        (
            state
                .bind_hue_dial(config.dial_config(DialKind::Hue))
                .unwrap(),
            state
                .bind_saturation_dial(config.dial_config(DialKind::Saturation))
                .unwrap(),
        )
    }

    fn pixel(buf: &[u8], side: u32, x: u32, y: u32) -> [u8; 4] {
        let o = ((y * side + x) * 4) as usize;
        [buf[o], buf[o + 1], buf[o + 2], buf[o + 3]]
    }

    #[test]
    fn rings_leave_dead_zone_and_center_transparent() {
        let (hue, sat) = dials();
        let snap = PickerState::default().snapshot();
        let side = 280;
        let buf = rasterize_rings(side, 1.0, [&hue, &sat], 5.0, snap);

        // center of the widget
        assert_eq!(pixel(&buf, side, 140, 140)[3], 0);
        // bottom of the hue ring is in the dead zone
        assert_eq!(pixel(&buf, side, 140, 140 + 125)[3], 0);
        // top of the hue ring is drawn opaque
        assert_eq!(pixel(&buf, side, 140, 140 - 125)[3], 255);
        // top of the saturation ring too
        assert_eq!(pixel(&buf, side, 140, 140 - 85)[3], 255);
    }

    #[test]
    fn raster_key_tracks_quantized_colors() {
        let snap = PickerState::default().snapshot();
        let a = RasterKey::new(280, &snap);
        let mut moved = snap;
        moved.brightness = 0.5;
        assert!(a != RasterKey::new(280, &moved));
        assert!(a != RasterKey::new(560, &snap));
        assert!(a == RasterKey::new(280, &snap));
    }

    #[test]
    fn press_picks_the_nearest_ring() {
        let (hue, sat) = dials();
        let config = PickerConfig::default();
        let tolerance = config.knob_radius + config.line_width;
        let pick = |dist| nearest_ring(dist, [&hue, &sat], tolerance);

        assert_eq!(pick(125.0), Some(DialKind::Hue));
        assert_eq!(pick(140.0), Some(DialKind::Hue));
        assert_eq!(pick(85.0), Some(DialKind::Saturation));
        assert_eq!(pick(104.0), Some(DialKind::Saturation));
        assert_eq!(pick(106.0), Some(DialKind::Hue));
        // both rings 20 away, inside the tolerance of 25
        assert_eq!(pick(105.0), Some(DialKind::Hue));
    }

    #[test]
    fn press_away_from_both_rings_misses() {
        let (hue, sat) = dials();
        let pick = |dist| nearest_ring(dist, [&hue, &sat], 25.0);
        assert_eq!(pick(0.0), None);
        assert_eq!(pick(59.0), None);
        assert_eq!(pick(151.0), None);
        assert_eq!(pick(60.0), Some(DialKind::Saturation));
        assert_eq!(pick(150.0), Some(DialKind::Hue));
    }
}
