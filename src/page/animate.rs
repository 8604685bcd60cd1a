use crate::config::UiConfig;
use crate::error::UiError;
use crate::state::CountUp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Window};

/// Starts the count-up of one element. The first frame runs immediately,
/// the rest on `requestAnimationFrame` until the target is shown.
pub fn animate_element(window: &Window, element: Element, cfg: &UiConfig) -> Result<(), UiError> {
    let text = element.text_content().unwrap_or_default();
    let mut anim = CountUp::parse(&text, cfg.count_up_duration_ms, cfg.frame_interval_ms)?;
    match anim.advance() {
        Some(first) => element.set_text_content(Some(&first)),
        None => return Ok(()),
    }
    if anim.is_done() {
        return Ok(());
    }

    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let closure_cell_clone = closure_cell.clone();
    let window_loop = window.clone();
    *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(text) = anim.advance() {
            element.set_text_content(Some(&text));
        }
        if anim.is_done() {
            // break the cycle so the closure is freed after this call
            let _ = closure_cell_clone.borrow_mut().take();
            return;
        }
        if let Some(cb) = closure_cell_clone.borrow().as_ref() {
            if window_loop
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("requestAnimationFrame failed, count-up stopped early");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = closure_cell.borrow().as_ref() {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(UiError::dom)?;
    }
    Ok(())
}

/// Animates every element matching the configured selector. Elements with
/// unusable text are skipped. Returns how many animations were started.
pub fn animate_all(window: &Window, cfg: &UiConfig) -> Result<usize, UiError> {
    let document = window
        .document()
        .ok_or(UiError::MissingHost { what: "document" })?;
    let nodes = document
        .query_selector_all(&cfg.animated_number_selector)
        .map_err(UiError::dom)?;
    let mut started = 0;
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match animate_element(window, element, cfg) {
            Ok(()) => started += 1,
            Err(e) => log::warn!("skipping count-up: {e}"),
        }
    }
    log::debug!("count-up started on {started} element(s)");
    Ok(started)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::page::sleep;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn number(document: &web_sys::Document, class: &str, text: &str) -> Element {
        let el = document.create_element("span").unwrap();
        el.set_class_name(class);
        el.set_text_content(Some(text));
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    async fn skips_bad_text_and_animates_the_rest() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let bad = number(&document, "animate-test-number", "abc");
        let good = number(&document, "animate-test-number", "40");
        let cfg = UiConfig {
            animated_number_selector: ".animate-test-number".to_string(),
            ..UiConfig::default()
        };

        assert_eq!(animate_all(&window, &cfg), Ok(1));
        assert_eq!(bad.text_content(), Some("abc".to_string()));
        // first frame is synchronous: 40 / 62.5
        assert_eq!(good.text_content(), Some("0.6".to_string()));

        sleep(&window, 1500).await;
        assert_eq!(good.text_content(), Some("40.0".to_string()));
        bad.remove();
        good.remove();
    }

    #[wasm_bindgen_test]
    fn zero_target_needs_no_frames() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let el = number(&document, "animate-zero-number", "0");
        animate_element(&window, el.clone(), &UiConfig::default()).unwrap();
        assert_eq!(el.text_content(), Some("0.0".to_string()));
        el.remove();
    }
}
