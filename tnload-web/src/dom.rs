use js_sys::{Function, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The `<html>` element.
#[must_use]
pub fn root_element() -> Option<Element> {
    document().and_then(|doc| doc.document_element())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Move keyboard focus to the element with the given id.
pub fn focus_by_id(id: &str) {
    if let Some(el) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },
}

/// Fetch a URL and decode its JSON body.
///
/// # Errors
/// Returns an error for network failures, non-success status codes, or bodies that do not decode.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let network = |err: &JsValue| LoadError::Network {
        url: url.to_string(),
        message: js_error_message(err),
    };
    let decode = |err: &JsValue| LoadError::Decode {
        url: url.to_string(),
        message: js_error_message(err),
    };

    let response = fetch_response(url).await.map_err(|e| network(&e))?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    let body = JsFuture::from(response.json().map_err(|e| decode(&e))?)
        .await
        .map_err(|e| decode(&e))?;
    serde_wasm_bindgen::from_value(body).map_err(|err| LoadError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Whether the page was opened with a fragment (`#section`) in the URL.
#[must_use]
pub fn location_has_hash() -> bool {
    window()
        .and_then(|win| win.location().hash().ok())
        .is_some_and(|hash| !hash.is_empty())
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Whether the element with `id` sits inside a `[hidden]` container.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn in_hidden_container(id: &str) -> bool {
    document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.parent_element())
        .and_then(|parent| parent.closest("[hidden]").ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn in_hidden_container(id: &str) -> bool {
    let _ = id;
    false
}

/// Focus an element once the pending render has been committed.
#[cfg(target_arch = "wasm32")]
pub fn focus_after_render(id: impl Into<String>) {
    let id = id.into();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = sleep_ms(0).await;
        focus_by_id(&id);
    });
}

/// No DOM off-browser; nothing to focus.
#[cfg(not(target_arch = "wasm32"))]
pub fn focus_after_render(id: impl Into<String>) {
    let _ = id.into();
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`. Returns `None` if the browser refuses.
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
