use crate::error::UiError;
use crate::model::{Notification, Severity};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Window};
use yew::prelude::*;

/// Marks the host element of each banner.
pub const TOAST_ATTR: &str = "data-toast";

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: AttrValue,
    pub severity: Severity,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let n = Notification {
        message: props.message.to_string(),
        severity: props.severity,
    };
    html! { <div class={n.class_list()} role="status">{ props.message.clone() }</div> }
}

/// Shows a banner and removes it after `lifetime_ms`. Banners are
/// independent: no queueing, no cancellation.
pub fn show_notification(
    window: &Window,
    document: &Document,
    notification: Notification,
    lifetime_ms: i32,
) -> Result<Element, UiError> {
    let body = document.body().ok_or(UiError::MissingHost { what: "body" })?;
    let host = document.create_element("div").map_err(UiError::dom)?;
    host.set_attribute(TOAST_ATTR, notification.severity.background_class())
        .map_err(UiError::dom)?;
    body.append_child(&host).map_err(UiError::dom)?;

    let app = yew::Renderer::<Toast>::with_root_and_props(
        host.clone(),
        ToastProps {
            message: notification.message.into(),
            severity: notification.severity,
        },
    )
    .render();

    let host_rm = host.clone();
    let remove = Closure::once_into_js(move || {
        app.destroy();
        host_rm.remove();
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(remove.unchecked_ref(), lifetime_ms)
        .map_err(UiError::dom)?;
    Ok(host)
}
