//! sheetmap - spreadsheet-driven point layers for Leaflet
//!
//! Renders the rows of a Google Sheet as markers on a Leaflet map via
//! WebAssembly:
//! - One-shot fetch of a "shareable link" sheet through its CSV export
//! - Whole-layer replacement on every refresh, viewport fitted to the points
//! - Marker clicks fill a leaflet-sidebar-v2 panel with escaped attribute text
//! - Background map clicks close the panel
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SheetMap } from 'sheetmap';
//! await init();
//! const sheetMap = new SheetMap({ zoomPosition: 'bottomleft' });
//! sheetMap.load(pointsUrl, (count, error) => console.log(count ?? error));
//! ```

// Data modules
pub mod config;
pub mod coords;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod layer;
pub mod panel;
pub mod sheets;
pub mod types;

// Browser modules (Leaflet + DOM)
#[cfg(target_arch = "wasm32")]
pub mod map;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::SheetMap;

pub use types::*;

/// Parse CSV text into an array of row objects keyed by header
///
/// # Errors
/// Returns an error if the CSV has an unterminated quoted field.
#[wasm_bindgen(js_name = "parseCsvRows")]
pub fn parse_csv_rows(text: &str) -> Result<JsValue, JsValue> {
    let rows = csv::parse_rows(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    serde::Serialize::serialize(&rows, &serializer)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Resolve a shareable sheet link, sheet key or URL to the CSV URL fetched
///
/// # Errors
/// Returns an error if the input is neither a URL nor a sheet key.
#[wasm_bindgen(js_name = "sheetCsvUrl")]
pub fn sheet_csv_url(source: &str) -> Result<String, JsValue> {
    sheets::SheetSource::parse(source)
        .map(|s| s.csv_url())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
