//! Bindings to the page's Leaflet globals.
//!
//! Covers the slice of Leaflet used here plus two plugins:
//! `leaflet-sidebar-v2` (`L.control.sidebar`) and `Leaflet.awesome-markers`
//! (`L.AwesomeMarkers.icon`). Option objects are passed as `JsValue`s built
//! with `serde_wasm_bindgen`.

use js_sys::Function;
use wasm_bindgen::prelude::*;

// L.Map
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    /// `L.map(id, options)`; throws when the container is missing.
    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn map(container_id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &Function);
}

// Layers: anything with addTo / remove
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Layer)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, target: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Layer);

    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = TileLayer)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = FeatureGroup)]
    pub type FeatureGroup;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    pub fn feature_group() -> FeatureGroup;
}

// L.Marker and its icon
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Layer, js_namespace = L, js_name = Marker)]
    pub type LeafletMarker;

    /// `L.marker(latlng)`; throws on an invalid position.
    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue) -> Result<LeafletMarker, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMarker, event: &str, handler: &Function);

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &LeafletMarker, icon: &Icon);

    #[wasm_bindgen(js_namespace = L, js_name = Icon)]
    pub type Icon;

    /// `L.AwesomeMarkers.icon(options)`
    #[wasm_bindgen(js_namespace = ["L", "AwesomeMarkers"], js_name = icon)]
    pub fn awesome_icon(options: &JsValue) -> Icon;

    /// `L.DomEvent.stopPropagation(e)`
    #[wasm_bindgen(js_namespace = ["L", "DomEvent"], js_name = stopPropagation)]
    pub fn stop_propagation(event: &JsValue);
}

// Controls
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = Control)]
    pub type Control;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Control, map: &LeafletMap);

    /// `L.control.zoom(options)`
    #[wasm_bindgen(js_namespace = ["L", "control"], js_name = zoom)]
    pub fn zoom_control(options: &JsValue) -> Control;

    /// `L.Control.Sidebar` from leaflet-sidebar-v2.
    #[wasm_bindgen(extends = Control, js_namespace = ["L", "Control"], js_name = Sidebar)]
    pub type Sidebar;

    /// `L.control.sidebar(options)`; throws when the container is missing.
    #[wasm_bindgen(catch, js_namespace = ["L", "control"], js_name = sidebar)]
    pub fn sidebar(options: &JsValue) -> Result<Sidebar, JsValue>;

    /// Sidebar events: `opening`, `closing`, `content`.
    #[wasm_bindgen(method)]
    pub fn on(this: &Sidebar, event: &str, handler: &Function);

    #[wasm_bindgen(method, js_name = addPanel)]
    pub fn add_panel(this: &Sidebar, panel: &JsValue);

    #[wasm_bindgen(method)]
    pub fn open(this: &Sidebar, panel_id: &str);

    #[wasm_bindgen(method)]
    pub fn close(this: &Sidebar, panel_id: &str);
}
