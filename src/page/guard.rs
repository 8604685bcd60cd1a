use super::ElementLookup;
use crate::error::UiError;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{BeforeUnloadEvent, Window};

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Leaving is only confirmed while a timer element is on the page.
pub fn should_confirm_leave(page: &impl ElementLookup, timer_selector: &str) -> bool {
    page.has_element(timer_selector)
}

/// Registers the `beforeunload` handler. Returns `false` if it was already installed.
pub fn install_navigation_guard(window: &Window, timer_selector: &str) -> Result<bool, UiError> {
    if INSTALLED.with(|i| i.get()) {
        return Ok(false);
    }
    let document = window
        .document()
        .ok_or(UiError::MissingHost { what: "document" })?;
    let selector = timer_selector.to_string();
    let on_unload = Closure::wrap(Box::new(move |e: BeforeUnloadEvent| {
        if should_confirm_leave(&document, &selector) {
            e.prevent_default();
            e.set_return_value("");
        }
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())
        .map_err(UiError::dom)?;
    INSTALLED.with(|i| i.set(true));
    // lives for the whole page
    on_unload.forget();
    log::debug!("navigation guard installed for {timer_selector}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FakePage(HashSet<&'static str>);

    impl ElementLookup for FakePage {
        fn has_element(&self, selector: &str) -> bool {
            self.0.contains(selector)
        }
    }

    #[test]
    fn confirms_only_with_timer_present() {
        let mut page = FakePage(HashSet::new());
        assert!(!should_confirm_leave(&page, "#timer"));
        page.0.insert("#timer");
        assert!(should_confirm_leave(&page, "#timer"));
        page.0.remove("#timer");
        assert!(!should_confirm_leave(&page, "#timer"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn installs_only_once() {
        let window = web_sys::window().unwrap();
        // an earlier test may already have installed it
        let _ = install_navigation_guard(&window, "#timer").unwrap();
        assert!(INSTALLED.with(|i| i.get()));
        assert_eq!(install_navigation_guard(&window, "#timer"), Ok(false));
    }

    #[wasm_bindgen_test]
    fn follows_timer_presence_in_the_document() {
        let document = web_sys::window().unwrap().document().unwrap();
        assert!(!should_confirm_leave(&document, "#guard-test-timer"));
        let timer = document.create_element("div").unwrap();
        timer.set_id("guard-test-timer");
        document.body().unwrap().append_child(&timer).unwrap();
        assert!(should_confirm_leave(&document, "#guard-test-timer"));
        timer.remove();
        assert!(!should_confirm_leave(&document, "#guard-test-timer"));
    }
}
