//! Leaflet map surface (wasm32 only).
//!
//! [`create_map`] builds the map with its base tiles and zoom control;
//! [`LeafletSurface`] implements [`MapSurface`] on top of it, turning each
//! [`PointLayer`] into an `L.featureGroup` of awesome-markers.

pub mod leaflet;

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::MapOptions;
use crate::error::{Result, SheetMapError};
use crate::layer::{LayerId, MapSurface};
use crate::panel::MapClick;
use crate::types::{LatLng, LatLngBounds, MarkerProperties, PointLayer};

use leaflet::{FeatureGroup, LeafletMap};

/// Called with the properties of a clicked marker. The Leaflet event stops
/// bubbling to the map when the handler stops the [`MapClick`].
pub type MarkerClickHandler = Rc<dyn Fn(&MarkerProperties, &mut MapClick)>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapInit {
    zoom_control: bool,
}

#[derive(Serialize)]
struct ControlInit<'a> {
    position: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerInit<'a> {
    attribution: &'a str,
    subdomains: &'a str,
    max_zoom: u8,
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Look up a required element of the host page.
pub(crate) fn require_element(id: &str) -> Result<web_sys::Element> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| SheetMapError::Dom(format!("element #{id} not found")))
}

/// Build the map in `options.map_container` with tiles and a zoom control.
pub fn create_map(options: &MapOptions) -> Result<LeafletMap> {
    require_element(&options.map_container)?;

    let map = leaflet::map(
        &options.map_container,
        &to_js(&MapInit {
            zoom_control: false,
        })?,
    )?;

    leaflet::zoom_control(&to_js(&ControlInit {
        position: &options.zoom_position,
    })?)
    .add_to(&map);

    let tiles = &options.tiles;
    leaflet::tile_layer(
        &tiles.url_template,
        &to_js(&TileLayerInit {
            attribution: &tiles.attribution,
            subdomains: &tiles.subdomains,
            max_zoom: tiles.max_zoom,
        })?,
    )
    .add_to(map.as_ref());

    let view = options.default_view;
    map.set_view(&to_js(&view.center.to_array())?, f64::from(view.zoom));
    Ok(map)
}

struct LiveGroup {
    group: FeatureGroup,
    // Dropped with the group so detached markers release their handlers.
    _handlers: Vec<Closure<dyn FnMut(JsValue)>>,
}

/// [`MapSurface`] backed by a Leaflet map.
pub struct LeafletSurface {
    map: LeafletMap,
    on_marker_click: MarkerClickHandler,
    next_id: u32,
    groups: HashMap<LayerId, LiveGroup>,
}

impl LeafletSurface {
    pub fn new(map: LeafletMap, on_marker_click: MarkerClickHandler) -> Self {
        Self {
            map,
            on_marker_click,
            next_id: 0,
            groups: HashMap::new(),
        }
    }

    pub fn map(&self) -> &LeafletMap {
        &self.map
    }
}

impl MapSurface for LeafletSurface {
    fn add_layer(&mut self, layer: &PointLayer) -> Result<LayerId> {
        let group = leaflet::feature_group();
        let mut handlers = Vec::with_capacity(layer.len());

        for m in &layer.markers {
            let marker = leaflet::marker(&to_js(&m.position.to_array())?)?;
            marker.add_to(group.as_ref());

            let props = m.properties.clone();
            let on_click = Rc::clone(&self.on_marker_click);
            let handler = Closure::wrap(Box::new(move |event: JsValue| {
                let mut click = MapClick::new();
                on_click(&props, &mut click);
                if click.is_propagation_stopped() {
                    leaflet::stop_propagation(&event);
                }
            }) as Box<dyn FnMut(JsValue)>);
            marker.on("click", handler.as_ref().unchecked_ref());
            handlers.push(handler);

            marker.set_icon(&leaflet::awesome_icon(&to_js(&m.icon)?));
        }

        group.add_to(self.map.as_ref());

        let id = LayerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.groups.insert(
            id,
            LiveGroup {
                group,
                _handlers: handlers,
            },
        );
        Ok(id)
    }

    fn remove_layer(&mut self, id: LayerId) {
        if let Some(live) = self.groups.remove(&id) {
            live.group.remove();
        }
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        match to_js(&bounds.to_array()) {
            Ok(bounds) => self.map.fit_bounds(&bounds),
            Err(e) => log::error!("fitBounds skipped: {e}"),
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        match to_js(&center.to_array()) {
            Ok(center) => self.map.set_view(&center, f64::from(zoom)),
            Err(e) => log::error!("setView skipped: {e}"),
        }
    }
}
