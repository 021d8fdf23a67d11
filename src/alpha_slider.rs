//! Alpha slider: checkerboard backdrop under a transparent-to-opaque
//! gradient of the current color. Drags the same way as the brightness
//! slider, bound to the alpha field.

use std::cell::RefCell;
use std::rc::Rc;

use floem::kurbo::{Rect, Shape};
use floem::peniko::{Color, Gradient};

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::brightness_slider::{SliderDrag, paint_thumb};
use crate::checkerboard;
use crate::config::PickerConfig;
use crate::constants;
use crate::error::Result;
use crate::range::ValueRange;
use crate::slider::LinearSlider;
use crate::state::{Field, PickerSnapshot, PickerState};

pub(crate) struct AlphaSlider {
    id: ViewId,
    drag: SliderDrag,
    color: (f64, f64, f64),
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates the alpha slider bound to `state`.
pub(crate) fn alpha_slider(
    state: Rc<RefCell<PickerState>>,
    values: RwSignal<PickerSnapshot>,
    config: &PickerConfig,
) -> Result<AlphaSlider> {
    let id = ViewId::new();

    let (min_pixel, max_pixel) =
        LinearSlider::track_for_width(config.outer_size(), config.thumb_size);
    let slider = state
        .borrow()
        .bind_slider(Field::Alpha, ValueRange::UNIT, min_pixel, max_pixel)?;

    create_effect(move |_| {
        let snap = values.get();
        id.update_state(snap);
    });

    let rgb = values.get_untracked().hsv().to_rgb();

    Ok(AlphaSlider {
        id,
        drag: SliderDrag::new(state, slider, config.thumb_size),
        color: (rgb.r, rgb.g, rgb.b),
        size: Default::default(),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .cursor(floem::style::CursorStyle::Pointer)
    }))
}

impl View for AlphaSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(snap) = state.downcast::<PickerSnapshot>() {
            let rgb = snap.hsv().to_rgb();
            self.color = (rgb.r, rgb.g, rgb.b);
            self.drag.slider.sync_value(snap.alpha);
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
        let inset = self.drag.thumb_radius();
        let track = Rect::new(inset, h / 2.0 - 4.0, (w - inset).max(inset), h / 2.0 + 4.0);
        let rtrack = track.to_rounded_rect(4.0);

        cx.save();
        cx.clip(&rtrack);
        checkerboard::paint_checkerboard(cx, track, constants::CHECKER_CELL);

        // transparent (left) → opaque (right)
        let (r, g, b) = self.color;
        let transparent = Color::rgba(r, g, b, 0.0);
        let solid = Color::rgba(r, g, b, 1.0);
        let gradient = Gradient::new_linear((track.x0, h / 2.0), (track.x1, h / 2.0))
            .with_stops([transparent, solid]);
        // vello's Rect fast path only takes solid colors
        let path = track.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        cx.stroke(
            &rtrack,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        paint_thumb(cx, self.drag.slider.thumb_pixel(), h / 2.0, inset);
    }
}
