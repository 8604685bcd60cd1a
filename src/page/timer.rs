use crate::error::UiError;
use crate::state::ElapsedClock;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};

pub const ELAPSED_ATTR: &str = "data-elapsed-seconds";

/// Keeps the session timer ticking once per second, starting from the
/// seconds the server already counted. Returns `false` when there is no
/// timer or it carries no usable start value.
pub fn start_elapsed_timer(
    window: &Window,
    document: &Document,
    timer_selector: &str,
) -> Result<bool, UiError> {
    let Some(timer) = document.query_selector(timer_selector).map_err(UiError::dom)? else {
        return Ok(false);
    };
    let Some(raw) = timer.get_attribute(ELAPSED_ATTR) else {
        return Ok(false);
    };
    let Ok(start) = raw.trim().parse::<u64>() else {
        log::warn!("ignoring {ELAPSED_ATTR}={raw:?} on {timer_selector}");
        return Ok(false);
    };

    let mut clock = ElapsedClock::starting_at(start);
    timer.set_text_content(Some(&clock.display()));
    let tick = Closure::wrap(Box::new(move || {
        let text = clock.tick();
        timer.set_text_content(Some(&text));
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), 1000)
        .map_err(UiError::dom)?;
    tick.forget();
    log::debug!("elapsed timer started at {start}s");
    Ok(true)
}
