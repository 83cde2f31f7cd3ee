//! Copying result values to the clipboard.
//!
//! The async Clipboard API is tried first. When it is missing or rejects, a
//! hidden textarea is selected and `execCommand("copy")` runs synchronously.

use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

pub const COPY_LABEL: &str = "Copy Value";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_RESET_MS: i32 = 2000;
pub const MANUAL_COPY_ALERT: &str =
    "Failed to copy value. Please try selecting and copying manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    Fallback,
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn clipboard_write(text: &str) -> Result<(), String> {
    let win = dom::window().ok_or_else(|| "Window unavailable".to_string())?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| dom::js_error_message(&err))
}

fn fallback_copy(text: &str) -> Result<(), String> {
    let Some(document) = dom::document() else {
        return Err("Document unavailable".to_string());
    };
    let textarea = document
        .create_element("textarea")
        .map_err(|_| "Failed to create textarea".to_string())?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| "Failed to cast to textarea".to_string())?;

    textarea.set_value(text);
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("opacity", "0");

    let body = document
        .body()
        .ok_or_else(|| "No body element".to_string())?;
    body.append_child(&textarea)
        .map_err(|_| "Failed to append textarea".to_string())?;
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| "Document does not support execCommand".to_string())
        .and_then(|html_doc| {
            html_doc
                .exec_command("copy")
                .map_err(|err| dom::js_error_message(&err))
        });
    let _ = body.remove_child(&textarea);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err("copy command was rejected".to_string()),
        Err(err) => Err(err),
    }
}

/// Copy `text`, trying the async clipboard first and the selection fallback second.
///
/// # Errors
/// Returns the fallback's error when both strategies fail.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_text(text: &str) -> Result<CopyOutcome, String> {
    match clipboard_write(text).await {
        Ok(()) => Ok(CopyOutcome::Clipboard),
        Err(err) => {
            log::info!("Clipboard API failed ({err}), trying fallback method");
            fallback_copy(text).map(|()| CopyOutcome::Fallback)
        }
    }
}

/// Last-resort notice when nothing could be copied.
pub fn alert_manual_copy() {
    if let Some(win) = dom::window() {
        let _ = win.alert_with_message(MANUAL_COPY_ALERT);
    }
}
