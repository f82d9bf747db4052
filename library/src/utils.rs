use js_sys::Error as JsError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::ClientError;

/// Print Rust panics to the browser console instead of an opaque `unreachable` trap.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub(crate) fn global_window() -> Result<Window, ClientError> {
    web_sys::window().ok_or(ClientError::NoWindow)
}

/// Best effort description of a value thrown or rejected by JS.
pub fn js_error_message(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    match error.dyn_ref::<JsError>() {
        Some(error) => String::from(error.message()),
        None => format!("{error:?}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_js_error_message_reads_strings_and_errors() {
        assert_eq!(js_error_message(&JsValue::from_str("offline")), "offline");
        let error = JsError::new("Failed to fetch");
        assert_eq!(js_error_message(&error.into()), "Failed to fetch");
    }
}
