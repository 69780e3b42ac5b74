//! Structured error types for sheetmap.
//!
//! Every fallible operation in the crate returns [`Result`]; the wasm layer
//! converts errors into `JsValue` strings at the boundary.

/// All errors that can occur while fetching, decoding and displaying sheet data.
#[derive(Debug, thiserror::Error)]
pub enum SheetMapError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// The response body is not a readable CSV table.
    #[error("CSV: {0}")]
    Csv(String),

    /// The data source string is neither a sheet link, a sheet key nor a URL.
    #[error("Invalid data source: {0}")]
    Source(String),

    /// A required DOM element is missing from the host page.
    #[error("DOM: {0}")]
    Dom(String),

    /// A call into Leaflet (or another page script) threw.
    #[error("JavaScript: {0}")]
    Js(String),

    /// JSON serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetMapError>;

#[cfg(target_arch = "wasm32")]
impl From<SheetMapError> for wasm_bindgen::JsValue {
    fn from(e: SheetMapError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SheetMapError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for SheetMapError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for SheetMapError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Js(e.to_string())
    }
}
