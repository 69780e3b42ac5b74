//! `SheetMap` - the WASM-exported entry point.
//!
//! Composes the whole page at construction time:
//! - Leaflet map with base tiles and zoom control
//! - Sidebar control with the info panel
//! - Background click handler that closes the panel
//! - Point layer manager whose markers open the panel
//!
//! ```javascript
//! import init, { SheetMap } from 'sheetmap';
//! await init();
//! const sheetMap = new SheetMap();
//! sheetMap.load("https://docs.google.com/spreadsheets/d/<key>/edit?usp=sharing");
//! ```

mod sidebar;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::config::MapOptions;
use crate::csv::parse_rows;
use crate::error::{Result, SheetMapError};
use crate::fetch;
use crate::layer::{LayerOptions, PointLayerManager};
use crate::map::{create_map, LeafletSurface, MarkerClickHandler};
use crate::panel::MapClick;
use crate::types::{MarkerProperties, Row};

use sidebar::{watch_widget, SidebarController};

type SharedLayers = Rc<RefCell<PointLayerManager<LeafletSurface>>>;
type SharedSidebar = Rc<RefCell<SidebarController>>;

/// The map page exported to JavaScript
#[wasm_bindgen]
pub struct SheetMap {
    layers: SharedLayers,
    sidebar: SharedSidebar,
    #[allow(dead_code)] // Kept alive for the lifetime of the map
    background_click: Closure<dyn FnMut(JsValue)>,
    #[allow(dead_code)] // Kept alive for the lifetime of the sidebar
    widget_events: Vec<Closure<dyn FnMut(JsValue)>>,
}

#[wasm_bindgen]
impl SheetMap {
    /// Build the map, sidebar and click handlers.
    ///
    /// `options` is an optional plain object overriding [`MapOptions`] fields.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> std::result::Result<SheetMap, JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let options: MapOptions = if options.is_undefined() || options.is_null() {
            MapOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(SheetMapError::from)?
        };
        Ok(Self::build(&options)?)
    }

    fn build(options: &MapOptions) -> Result<SheetMap> {
        let map = create_map(options)?;

        let sidebar: SharedSidebar = Rc::new(RefCell::new(SidebarController::new(
            &map,
            &options.sidebar,
            options.labels.clone(),
        )?));
        let widget_events = watch_widget(&sidebar);

        // Background click closes the panel. Marker clicks never get here:
        // their handler stops propagation first.
        let background_click = {
            let sidebar = Rc::clone(&sidebar);
            Closure::wrap(Box::new(move |_event: JsValue| {
                sidebar.borrow_mut().background_clicked();
            }) as Box<dyn FnMut(JsValue)>)
        };
        map.on("click", background_click.as_ref().unchecked_ref());

        let on_marker_click: MarkerClickHandler = {
            let sidebar = Rc::clone(&sidebar);
            Rc::new(move |props: &MarkerProperties, click: &mut MapClick| {
                sidebar.borrow_mut().marker_clicked(props, click);
            })
        };

        let layers = Rc::new(RefCell::new(PointLayerManager::new(
            LeafletSurface::new(map, on_marker_click),
            LayerOptions::from(options),
        )));

        log::info!("map ready in #{}", options.map_container);
        Ok(SheetMap {
            layers,
            sidebar,
            background_click,
            widget_events,
        })
    }

    /// Fetch rows from a shareable sheet link, sheet key or CSV URL and
    /// replace the point layer with them.
    ///
    /// `on_loaded`, when given, is called once with the marker count, or
    /// with an error message and `undefined` if loading failed.
    pub fn load(&self, source: String, on_loaded: Option<Function>) {
        let layers = Rc::clone(&self.layers);
        let sidebar = Rc::clone(&self.sidebar);
        fetch::fetch(source, move |result| {
            let outcome = Self::apply_rows(&layers, &sidebar, result);
            if let Some(callback) = on_loaded {
                let called = match outcome {
                    Ok(count) => callback.call1(&JsValue::NULL, &JsValue::from(count)),
                    Err(e) => callback.call2(
                        &JsValue::NULL,
                        &JsValue::UNDEFINED,
                        &JsValue::from_str(&e.to_string()),
                    ),
                };
                if let Err(thrown) = called {
                    log::error!("load callback threw: {}", SheetMapError::from(thrown));
                }
            }
        });
    }

    /// Replace the point layer with rows parsed from CSV text.
    #[wasm_bindgen(js_name = "loadCsv")]
    pub fn load_csv(&self, text: &str) -> std::result::Result<usize, JsValue> {
        Ok(Self::apply_rows(&self.layers, &self.sidebar, parse_rows(text))?)
    }

    /// Number of markers in the current layer.
    #[wasm_bindgen(js_name = "markerCount")]
    pub fn marker_count(&self) -> usize {
        self.layers.borrow().marker_count()
    }

    /// Rows of the current layer that had no usable position, as
    /// `[{ row, reason }]`.
    #[wasm_bindgen(js_name = "skippedRows")]
    pub fn skipped_rows(&self) -> std::result::Result<JsValue, JsValue> {
        let layers = self.layers.borrow();
        let skipped = layers.current().map(|l| l.skipped.as_slice()).unwrap_or(&[]);
        Ok(serde_wasm_bindgen::to_value(skipped).map_err(SheetMapError::from)?)
    }

    #[wasm_bindgen(js_name = "isPanelOpen")]
    pub fn is_panel_open(&self) -> bool {
        self.sidebar.borrow().is_open()
    }

    #[wasm_bindgen(js_name = "closePanel")]
    pub fn close_panel(&self) {
        self.sidebar.borrow_mut().close();
    }

    /// Refresh the point layer, or show the no-data state when the rows
    /// could not be obtained.
    fn apply_rows(
        layers: &SharedLayers,
        sidebar: &SharedSidebar,
        rows: Result<Vec<Row>>,
    ) -> Result<usize> {
        let refreshed = rows.and_then(|rows| {
            let mut layers = layers.borrow_mut();
            layers.refresh(&rows).map(|layer| layer.len())
        });
        if let Err(e) = &refreshed {
            log::error!("could not load sheet: {e}");
            sidebar.borrow_mut().show_no_data(&e.to_string());
        }
        refreshed
    }
}
