//! Text fields and the copy button under the rings.

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::style::CursorStyle;
use lucide_icons::Icon;

use crate::color::RingColor;
use crate::constants;

/// Shared look of the picker's text fields.
fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn is_enter(event: &floem::event::Event) -> bool {
    match event {
        floem::event::Event::KeyDown(ke) => {
            ke.key.logical_key == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Enter)
        }
        _ => false,
    }
}

/// A typed value that already spells a full color: 6 or 8 hex digits, with
/// or without `#`. Shorthand waits for the field to commit.
fn typed_color(raw: &str) -> Option<RingColor> {
    let digits = raw.trim().trim_start_matches('#');
    let complete = matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if complete { RingColor::from_hex(digits) } else { None }
}

/// Hex entry for `color`.
///
/// A complete value recolors while typing. On Enter or focus loss the text
/// is rewritten in canonical form, or reset to the current color if it
/// doesn't parse.
pub(crate) fn hex_input(color: RwSignal<RingColor>) -> impl IntoView {
    let text = RwSignal::new(color.get_untracked().to_hex());

    // leave the text alone while it already spells the current color
    create_effect(move |_| {
        let hex = color.get().to_hex();
        let shown = RingColor::from_hex(&text.get_untracked()).map(|c| c.to_hex());
        if shown.as_deref() != Some(hex.as_str()) {
            text.set(hex);
        }
    });

    create_effect(move |_| {
        if let Some(typed) = typed_color(&text.get()) {
            if typed.to_hex() != color.get_untracked().to_hex() {
                color.set(typed);
            }
        }
    });

    let commit = move || {
        let raw = text.get_untracked();
        let next = RingColor::from_hex(&raw).unwrap_or_else(|| color.get_untracked());
        let hex = next.to_hex();
        if hex != color.get_untracked().to_hex() {
            color.set(next);
        }
        if raw != hex {
            text.set(hex);
        }
    };

    h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| field_style(s, constants::HEX_INPUT_WIDTH))
            .on_event_stop(EventListener::FocusLost, move |_| commit())
            .on_event_stop(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    commit();
                }
            }),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// An editable 0–100 percentage for a 0.0–1.0 value.
///
/// Shows `value`; a committed number is clamped and handed to `on_set`.
#[cfg(feature = "alpha")]
pub(crate) fn percent_input(
    value: impl Fn() -> f64 + 'static,
    on_set: impl Fn(f64) + 'static,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let value = std::rc::Rc::new(value);

    let shown = value.clone();
    create_effect(move |_| {
        let display = format!("{}", (shown() * 100.0).round() as i64);
        if text.get_untracked() != display {
            text.set(display);
        }
    });

    let current = value;
    let on_commit = move || {
        let raw = text.get_untracked();
        match raw.trim().parse::<f64>() {
            Ok(num) if num.is_finite() => {
                let clamped = num.clamp(0.0, 100.0).round();
                on_set(clamped / 100.0);
                text.set(format!("{}", clamped as i64));
            }
            _ => text.set(format!("{}", (current() * 100.0).round() as i64)),
        }
    };
    let on_commit = std::rc::Rc::new(on_commit);
    let on_enter = on_commit.clone();

    h_stack((
        text_input(text)
            .style(|s| field_style(s, 28.0))
            .on_event_stop(EventListener::FocusLost, move |_| {
                on_commit();
            })
            .on_event(EventListener::KeyDown, move |e| {
                if is_enter(e) {
                    on_enter();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        label(|| "%").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .style(|s| s.items_center().gap(2.0))
}

/// Copies `#RRGGBB[AA]` for `color`. The icon turns into a check mark after
/// a successful copy and back once the pointer leaves.
pub(crate) fn copy_button(color: RwSignal<RingColor>) -> impl IntoView {
    let copied = RwSignal::new(false);
    container(label(move || {
        let icon = if copied.get() { Icon::Check } else { Icon::Copy };
        icon.unicode().to_string()
    }))
    .style(move |s| {
        let tint = if copied.get() {
            Color::rgb8(40, 150, 70)
        } else {
            Color::rgb8(120, 120, 120)
        };
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .font_size(14.0)
            .font_family("lucide".to_string())
            .color(tint)
            .border_radius(3.0)
            .cursor(CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_click_stop(move |_| {
        let hex = format!("#{}", color.get_untracked().to_hex());
        copied.set(copy_to_clipboard(&hex));
    })
    .on_event_stop(EventListener::PointerLeave, move |_| copied.set(false))
}

fn copy_to_clipboard(text: &str) -> bool {
    let written = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
    match written {
        Ok(()) => true,
        Err(err) => {
            log::debug!("copy to clipboard failed: {err}");
            false
        }
    }
}
