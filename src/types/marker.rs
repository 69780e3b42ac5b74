use serde::{Deserialize, Serialize};

use super::{LatLng, LatLngBounds};

/// Attributes a marker carries from its row, shown in the side panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerProperties {
    pub institution: String,
    pub dokumentation: String,
    pub url: String,
    pub kontaktperson: String,
    pub mejl: String,
    pub telefon: String,
}

/// Options for an `L.AwesomeMarkers.icon`; serializes directly into the
/// object the plugin expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerIcon {
    /// Glyph name without prefix, e.g. `info-sign`.
    pub icon: String,
    pub icon_color: String,
    pub marker_color: String,
    /// Icon font prefix (`glyphicon`, `fa`).
    pub prefix: String,
    pub extra_classes: String,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            icon: "info-sign".to_string(),
            icon_color: "white".to_string(),
            marker_color: "green".to_string(),
            prefix: "glyphicon".to_string(),
            extra_classes: "fa-rotate-0".to_string(),
        }
    }
}

/// A point built from one sheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Zero-based index of the source row among the data rows.
    pub row: usize,
    pub position: LatLng,
    pub properties: MarkerProperties,
    pub icon: MarkerIcon,
}

/// A row that produced no marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: String,
}

/// One complete marker collection, built wholesale from a row set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PointLayer {
    pub markers: Vec<Marker>,
    pub skipped: Vec<SkippedRow>,
}

impl PointLayer {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Bounds of every marker, `None` when the layer is empty.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(|m| m.position))
    }

    /// The layer as a GeoJSON `FeatureCollection` of points.
    pub fn to_geojson(&self) -> serde_json::Value {
        let features: Vec<serde_json::Value> = self
            .markers
            .iter()
            .map(|m| {
                serde_json::json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [m.position.lng, m.position.lat],
                    },
                    "properties": m.properties,
                })
            })
            .collect();
        serde_json::json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
