//! Standalone demo: opens a window with the ring picker.
//!
//! Run with `RUST_LOG=floem_hsv_ring=trace` to see drag traces.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv_ring::{PickerConfig, RingColor, hsv_ring_picker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let start = RingColor::from_hex("3B82F6").unwrap_or_default();
    let color = RwSignal::new(start);
    let config = PickerConfig::default().with_initial_color(start);
    let width = config.outer_size() + 24.0;

    // validate up front so the window closure can't fail
    config.validate()?;

    floem::Application::new()
        .window(
            move |_| {
                match hsv_ring_picker(color, config.clone()) {
                    Ok(picker) => picker.into_any(),
                    Err(err) => label(move || format!("invalid picker config: {err}")).into_any(),
                }
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((width, 560.0))
                    .title("floem-hsv-ring"),
            ),
        )
        .run();
    Ok(())
}
