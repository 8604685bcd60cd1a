//! Bindings to the hosting page: lookup, lifecycle and the DOM-facing
//! halves of the animator, chart, guard and timer.

pub mod animate;
pub mod chart;
pub mod guard;
pub mod timer;

use crate::config::UiConfig;
use crate::error::UiError;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

/// Presence queries against the page, by CSS selector.
pub trait ElementLookup {
    fn has_element(&self, selector: &str) -> bool;
}

impl ElementLookup for Document {
    fn has_element(&self, selector: &str) -> bool {
        matches!(self.query_selector(selector), Ok(Some(_)))
    }
}

thread_local! {
    static READY_HOOKED: Cell<bool> = const { Cell::new(false) };
}

/// Runs `on_page_ready` once the document is parsed, at most once per page.
/// Returns `false` when an earlier call already hooked it.
pub fn when_ready(window: &Window) -> Result<bool, UiError> {
    if READY_HOOKED.with(|h| h.get()) {
        return Ok(false);
    }
    let document = window
        .document()
        .ok_or(UiError::MissingHost { what: "document" })?;
    READY_HOOKED.with(|h| h.set(true));
    if document.ready_state() != "loading" {
        on_page_ready(window)?;
        return Ok(true);
    }
    let win = window.clone();
    let cb = Closure::once_into_js(move || {
        if let Err(e) = on_page_ready(&win) {
            log::error!("page setup failed: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(UiError::dom)?;
    Ok(true)
}

/// Page-ready hook: loads the page config, then runs `setup_page`.
pub fn on_page_ready(window: &Window) -> Result<(), UiError> {
    let document = window
        .document()
        .ok_or(UiError::MissingHost { what: "document" })?;
    let cfg = UiConfig::load(&document);
    cfg.clone().activate();
    setup_page(window, &document, cfg)
}

/// Navigation guard, session timer, and the delayed count-up on results
/// pages. A failing guard or timer is logged and the rest still runs.
pub fn setup_page(window: &Window, document: &Document, cfg: UiConfig) -> Result<(), UiError> {
    if let Err(e) = guard::install_navigation_guard(window, &cfg.timer_selector) {
        log::warn!("navigation guard not installed: {e}");
    }
    if let Err(e) = timer::start_elapsed_timer(window, document, &cfg.timer_selector) {
        log::warn!("session timer not started: {e}");
    }

    if !document.has_element(&cfg.results_marker_selector) {
        return Ok(());
    }
    let win = window.clone();
    let delay = cfg.count_up_delay_ms;
    let run = Closure::once_into_js(move || {
        if let Err(e) = animate::animate_all(&win, &cfg) {
            log::error!("count-up failed: {e}");
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(run.unchecked_ref(), delay)
        .map_err(UiError::dom)?;
    log::info!("results count-up scheduled in {delay}ms");
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn sleep(window: &Window, ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}
