use wasm_bindgen::JsValue;

/// Lifts JS exceptions into [`anyhow::Error`].
///
/// `JsValue` is neither `Send` nor `std::error::Error`, so `?` cannot
/// convert it on its own.
pub trait Throws<T> {
    fn throws(self, what: &str) -> anyhow::Result<T>;
}

impl<T> Throws<T> for Result<T, JsValue> {
    fn throws(self, what: &str) -> anyhow::Result<T> {
        self.map_err(|e| anyhow::anyhow!("{}: {}", what, describe(&e)))
    }
}

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
