//! Map, panel and column configuration.
//!
//! `MapOptions` is deserialized from the plain object passed to
//! `new SheetMap(options)`. Every field has a default, so `{}` or `undefined`
//! reproduces the stock page: Carto Positron tiles, a right-hand sidebar with
//! the `my-info-panel` panel, and the Swedish documentation-registry columns.

use serde::{Deserialize, Serialize};

use crate::types::{LatLng, MarkerIcon};

/// Top-level viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    /// Id of the element Leaflet renders the map into.
    pub map_container: String,
    pub tiles: TileOptions,
    /// Corner for the zoom control (`topleft`, `bottomleft`, ...).
    pub zoom_position: String,
    pub sidebar: SidebarOptions,
    /// View used when there is nothing to fit the viewport to.
    pub default_view: ViewOptions,
    pub columns: ColumnMap,
    pub labels: PanelLabels,
    pub icon: MarkerIcon,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            map_container: "map".to_string(),
            tiles: TileOptions::default(),
            zoom_position: "bottomleft".to_string(),
            sidebar: SidebarOptions::default(),
            default_view: ViewOptions::default(),
            columns: ColumnMap::default(),
            labels: PanelLabels::default(),
            icon: MarkerIcon::default(),
        }
    }
}

/// Base tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileOptions {
    pub url_template: String,
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            url_template:
                "https://cartodb-basemaps-{s}.global.ssl.fastly.net/light_all/{z}/{x}/{y}{r}.png"
                    .to_string(),
            attribution: "&copy; <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> \
                          &copy; <a href='http://cartodb.com/attributions'>CartoDB</a>"
                .to_string(),
            subdomains: "abcd".to_string(),
            max_zoom: 19,
        }
    }
}

/// Sidebar control and the element ids inside its panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidebarOptions {
    pub container: String,
    /// `left` or `right`.
    pub position: String,
    pub close_button: bool,
    pub panel_id: String,
    pub title_element: String,
    pub content_element: String,
    /// Title shown before any marker is clicked.
    pub placeholder_title: String,
    /// Title shown when the sheet could not be loaded.
    pub no_data_title: String,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            container: "sidebar".to_string(),
            position: "right".to_string(),
            close_button: true,
            panel_id: "my-info-panel".to_string(),
            title_element: "sidebar-title".to_string(),
            content_element: "sidebar-content".to_string(),
            placeholder_title: "Ingen dokumentation vald".to_string(),
            no_data_title: "Kunde inte hämta dokumentationen".to_string(),
        }
    }
}

/// Map centre and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(62.0, 15.0),
            zoom: 5,
        }
    }
}

/// Sheet column headers read for each marker. Matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnMap {
    pub latitude: String,
    pub longitude: String,
    pub institution: String,
    pub dokumentation: String,
    pub url: String,
    pub kontaktperson: String,
    pub mejl: String,
    pub telefon: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            latitude: "Latitud".to_string(),
            longitude: "Longitud".to_string(),
            institution: "Institution".to_string(),
            dokumentation: "Dokumentationens namn".to_string(),
            url: "Dokumentationens webbplats".to_string(),
            kontaktperson: "Kontaktperson".to_string(),
            mejl: "Mejl till kontaktperson (om det ska synas)".to_string(),
            telefon: "Telefonnr till kontaktperson (om det ska synas)".to_string(),
        }
    }
}

/// Labels for the panel body lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelLabels {
    pub dokumentation: String,
    pub url: String,
    pub kontaktperson: String,
    pub mejl: String,
    pub telefon: String,
    /// Label for the error detail shown when the sheet could not be loaded.
    pub error: String,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self {
            dokumentation: "Dokumentation".to_string(),
            url: "Webbplats".to_string(),
            kontaktperson: "Kontaktperson".to_string(),
            mejl: "Mejladress".to_string(),
            telefon: "Telefon".to_string(),
            error: "Fel".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let options: MapOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, MapOptions::default());
        assert_eq!(options.columns.latitude, "Latitud");
        assert_eq!(options.sidebar.panel_id, "my-info-panel");
        assert_eq!(options.tiles.max_zoom, 19);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let options: MapOptions = serde_json::from_str(
            r#"{
                "zoomPosition": "topright",
                "columns": { "mejl": "E-post" },
                "defaultView": { "zoom": 7 }
            }"#,
        )
        .unwrap();
        assert_eq!(options.zoom_position, "topright");
        assert_eq!(options.columns.mejl, "E-post");
        assert_eq!(options.columns.telefon, ColumnMap::default().telefon);
        assert_eq!(options.default_view.zoom, 7);
        assert_eq!(options.default_view.center, ViewOptions::default().center);
    }
}
