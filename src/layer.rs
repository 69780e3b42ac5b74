//! Point layer management.
//!
//! [`PointLayerManager`] owns the single live marker collection. Each
//! [`refresh`](PointLayerManager::refresh) removes the previous collection
//! from the map before the new one is attached, so the map never shows two
//! collections. The map itself is reached through [`MapSurface`]: Leaflet on
//! wasm32, a recorder in tests.

use crate::config::{ColumnMap, MapOptions, ViewOptions};
use crate::coords::row_position;
use crate::error::Result;
use crate::types::{Marker, MarkerIcon, MarkerProperties, PointLayer, Row, SkippedRow};
use crate::types::{LatLng, LatLngBounds};

/// Handle for a collection attached to a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u32);

/// The map operations the layer manager needs.
pub trait MapSurface {
    /// Attach a marker collection and return its handle.
    fn add_layer(&mut self, layer: &PointLayer) -> Result<LayerId>;

    /// Remove a collection's visual elements and release it.
    fn remove_layer(&mut self, id: LayerId);

    /// Adjust the viewport so `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: LatLngBounds);

    fn set_view(&mut self, center: LatLng, zoom: u8);
}

/// How rows become markers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOptions {
    pub columns: ColumnMap,
    pub icon: MarkerIcon,
    pub default_view: ViewOptions,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self::from(&MapOptions::default())
    }
}

impl From<&MapOptions> for LayerOptions {
    fn from(options: &MapOptions) -> Self {
        Self {
            columns: options.columns.clone(),
            icon: options.icon.clone(),
            default_view: options.default_view,
        }
    }
}

/// Copy the panel attributes of a row, verbatim.
pub fn marker_properties(row: &Row, columns: &ColumnMap) -> MarkerProperties {
    MarkerProperties {
        institution: row.value(&columns.institution).to_string(),
        dokumentation: row.value(&columns.dokumentation).to_string(),
        url: row.value(&columns.url).to_string(),
        kontaktperson: row.value(&columns.kontaktperson).to_string(),
        mejl: row.value(&columns.mejl).to_string(),
        telefon: row.value(&columns.telefon).to_string(),
    }
}

/// Build a marker collection from rows, in row order.
///
/// Rows without a usable position are left out and listed in
/// [`PointLayer::skipped`].
pub fn build_layer(rows: &[Row], options: &LayerOptions) -> PointLayer {
    let mut layer = PointLayer {
        markers: Vec::with_capacity(rows.len()),
        skipped: Vec::new(),
    };
    for (index, row) in rows.iter().enumerate() {
        match row_position(row, &options.columns) {
            Ok(position) => layer.markers.push(Marker {
                row: index,
                position,
                properties: marker_properties(row, &options.columns),
                icon: options.icon.clone(),
            }),
            Err(reason) => layer.skipped.push(SkippedRow {
                row: index,
                reason: reason.to_string(),
            }),
        }
    }
    layer
}

struct LiveLayer {
    id: LayerId,
    layer: PointLayer,
}

/// Owner of the current marker collection.
pub struct PointLayerManager<S: MapSurface> {
    surface: S,
    options: LayerOptions,
    current: Option<LiveLayer>,
}

impl<S: MapSurface> PointLayerManager<S> {
    pub fn new(surface: S, options: LayerOptions) -> Self {
        Self {
            surface,
            options,
            current: None,
        }
    }

    /// Replace the current collection with one built from `rows` and fit the
    /// viewport to it. An empty collection resets the view to the default.
    pub fn refresh(&mut self, rows: &[Row]) -> Result<&PointLayer> {
        if let Some(previous) = self.current.take() {
            self.surface.remove_layer(previous.id);
            log::debug!(
                "removed point layer {:?} ({} markers)",
                previous.id,
                previous.layer.len()
            );
        }

        let layer = build_layer(rows, &self.options);
        for skipped in &layer.skipped {
            log::warn!("row {} skipped: {}", skipped.row + 1, skipped.reason);
        }

        let id = self.surface.add_layer(&layer)?;
        match layer.bounds() {
            Some(bounds) => self.surface.fit_bounds(bounds),
            None => {
                let view = self.options.default_view;
                self.surface.set_view(view.center, view.zoom);
            }
        }
        log::info!(
            "point layer {:?}: {} markers, {} rows skipped",
            id,
            layer.len(),
            layer.skipped.len()
        );

        let live = self.current.insert(LiveLayer { id, layer });
        Ok(&live.layer)
    }

    /// Remove the current collection, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.remove_layer(previous.id);
        }
    }

    pub fn current(&self) -> Option<&PointLayer> {
        self.current.as_ref().map(|live| &live.layer)
    }

    pub fn current_id(&self) -> Option<LayerId> {
        self.current.as_ref().map(|live| live.id)
    }

    pub fn marker_count(&self) -> usize {
        self.current().map_or(0, PointLayer::len)
    }

    pub fn options(&self) -> &LayerOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
