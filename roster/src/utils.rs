use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, UrlSearchParams, Window};

pub(crate) fn global_window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub(crate) fn global_document() -> Result<Document, JsValue> {
    global_window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

/// Create an element and cast it to its concrete `web-sys` type.
pub(crate) fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has an unexpected element type")))
}

/// Value of a query parameter of the current page, if present.
pub(crate) fn query_param(name: &str) -> Option<String> {
    let search = global_window().ok()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get(name)
}
