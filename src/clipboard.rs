//! Clipboard Access
//!
//! Thin wrapper over `navigator.clipboard.writeText`. The clipboard is
//! missing outside secure contexts, so it is looked up as a plain
//! property before use.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

use crate::error::ClipboardError;

/// Write plain text to the system clipboard
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let property = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    let clipboard = clipboard_from(property)?;

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe_js_error(e)))
}

/// `navigator.clipboard` is `undefined` on insecure pages and some webviews
fn clipboard_from(value: JsValue) -> Result<Clipboard, ClipboardError> {
    if value.is_undefined() || value.is_null() {
        return Err(ClipboardError::Unavailable);
    }
    value
        .dyn_into::<Clipboard>()
        .map_err(|_| ClipboardError::Unavailable)
}

/// Prefer the DOMException/Error message over the raw debug dump
fn describe_js_error(value: JsValue) -> String {
    match value.dyn_into::<js_sys::Error>() {
        Ok(err) => String::from(err.message()),
        Err(other) => format!("{:?}", other),
    }
}

// JS values only exist on wasm32; run with `wasm-pack test --node`
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_missing_clipboard_is_unavailable() {
        assert_eq!(clipboard_from(JsValue::UNDEFINED).err(), Some(ClipboardError::Unavailable));
        assert_eq!(clipboard_from(JsValue::NULL).err(), Some(ClipboardError::Unavailable));
    }

    #[wasm_bindgen_test]
    fn test_non_clipboard_value_is_unavailable() {
        let value: JsValue = js_sys::Object::new().into();
        assert_eq!(clipboard_from(value).err(), Some(ClipboardError::Unavailable));
    }

    #[wasm_bindgen_test]
    fn test_error_message_is_extracted() {
        let err: JsValue = js_sys::Error::new("Write permission denied.").into();
        assert_eq!(describe_js_error(err), "Write permission denied.");
    }
}
