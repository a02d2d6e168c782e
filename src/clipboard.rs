use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::catalog::Note;

pub const COPY_SUCCESS_TEXT: &str = "已複製";
pub const COPY_FAILURE_TEXT: &str = "複製失敗";

pub fn export_text(note: &Note) -> String {
    format!(
        "{}\n\n{}\n\nTags: {}",
        note.title,
        note.content,
        note.tags.join(", ")
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    ClipboardApi,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable,
    Rejected(String),
    FallbackFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "no window or document to copy from"),
            ClipboardError::Rejected(reason) => write!(f, "clipboard write rejected: {reason}"),
            ClipboardError::FallbackFailed(reason) => write!(f, "fallback copy failed: {reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFeedback {
    Copied,
    Failed,
}

impl CopyFeedback {
    /// With `optimistic` set a failed copy is still reported as copied.
    pub fn for_result(result: &Result<CopyMethod, ClipboardError>, optimistic: bool) -> Self {
        match result {
            Ok(_) => CopyFeedback::Copied,
            Err(_) if optimistic => CopyFeedback::Copied,
            Err(_) => CopyFeedback::Failed,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            CopyFeedback::Copied => COPY_SUCCESS_TEXT,
            CopyFeedback::Failed => COPY_FAILURE_TEXT,
        }
    }
}

/// Writes `text` with the async Clipboard API when the page is a secure
/// context, otherwise (or when that write is rejected) through a hidden
/// textarea and `execCommand("copy")`.
pub async fn copy_text(text: &str) -> Result<CopyMethod, ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();
    let has_api = js_sys::Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);

    if has_api && window.is_secure_context() {
        match JsFuture::from(navigator.clipboard().write_text(text)).await {
            Ok(_) => return Ok(CopyMethod::ClipboardApi),
            Err(err) => {
                let rejected = ClipboardError::Rejected(describe(err));
                log::warn!("{rejected}; trying fallback");
            }
        }
    }

    fallback_copy(&window, text)?;
    Ok(CopyMethod::Fallback)
}

fn fallback_copy(window: &web_sys::Window, text: &str) -> Result<(), ClipboardError> {
    let fail = |err: JsValue| ClipboardError::FallbackFailed(describe(err));
    let document = window.document().ok_or(ClipboardError::Unavailable)?;
    let body = document.body().ok_or(ClipboardError::Unavailable)?;

    let textarea: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(fail)?
        .dyn_into()
        .map_err(|el| fail(el.into()))?;
    textarea.set_value(text);
    textarea.set_read_only(true);
    let style = textarea.style();
    style.set_property("position", "fixed").map_err(fail)?;
    style.set_property("left", "-999999px").map_err(fail)?;
    style.set_property("top", "-999999px").map_err(fail)?;

    body.append_child(&textarea).map_err(fail)?;
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_into::<HtmlDocument>()
        .map_err(|doc| fail(doc.into()))
        .and_then(|doc| doc.exec_command("copy").map_err(fail));

    if let Ok(Some(selection)) = window.get_selection() {
        let _ = selection.remove_all_ranges();
    }
    let _ = body.remove_child(&textarea);

    if copied? {
        Ok(())
    } else {
        Err(ClipboardError::FallbackFailed(
            "execCommand(\"copy\") returned false".to_string(),
        ))
    }
}
