//! In-page utilities for the simulacros exam site: toast notifications,
//! the leave-page guard during a timed test, the results count-up and a
//! simple pie chart.

use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod state;
pub mod util;

use config::UiConfig;
use error::UiError;
use model::{ChartSlice, Notification, ScoreBreakdown};
use page::chart::{CanvasSurface, render_pie};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // filtered by log::max_level, which the page config may change
        console_log::init_with_level(log::Level::Trace).ok();
    }
    log::set_max_level(log::LevelFilter::Info);
    let window = web_sys::window().ok_or(UiError::MissingHost { what: "window" })?;
    page::when_ready(&window)?;
    Ok(())
}

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(seconds: u32) -> String {
    util::format_time(seconds as u64)
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(UiError::MissingHost { what: "window" })?;
    let document = window
        .document()
        .ok_or(UiError::MissingHost { what: "document" })?;
    let notification = Notification::new(message, severity.as_deref());
    let lifetime = UiConfig::active().notification_lifetime_ms;
    components::show_notification(&window, &document, notification, lifetime)?;
    Ok(())
}

/// Draws a pie on the canvas `canvas_id`. Unknown canvases are ignored;
/// mismatched lengths or negative magnitudes throw.
#[wasm_bindgen(js_name = createPieChart)]
pub fn create_pie_chart(
    canvas_id: &str,
    magnitudes: Vec<f64>,
    colors: Vec<String>,
) -> Result<(), JsValue> {
    draw_slices(canvas_id, || ChartSlice::zip(&magnitudes, &colors))
}

/// Correct vs. incorrect answers of a finished test.
#[wasm_bindgen(js_name = createScoreChart)]
pub fn create_score_chart(canvas_id: &str, correct: u32, total: u32) -> Result<(), JsValue> {
    draw_slices(canvas_id, || Ok(ScoreBreakdown::new(correct, total)?.slices()))
}

// The surface is resolved before the input is checked: a missing canvas is
// always a silent no-op.
fn draw_slices(
    canvas_id: &str,
    slices: impl FnOnce() -> Result<Vec<ChartSlice>, UiError>,
) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    let Some(mut surface) = CanvasSurface::resolve(&document, canvas_id) else {
        log::debug!("pie chart skipped: no 2d canvas #{canvas_id}");
        return Ok(());
    };
    let inset = UiConfig::active().chart_inset;
    render_pie(&mut surface, &slices()?, inset)?;
    Ok(())
}
