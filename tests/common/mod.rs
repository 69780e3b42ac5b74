//! Common test utilities: a recording map surface and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use sheetmap::error::{Result, SheetMapError};
use sheetmap::layer::{LayerId, LayerOptions, MapSurface, PointLayerManager};
use sheetmap::types::{LatLng, LatLngBounds, PointLayer};

// Re-export fixtures for convenience
pub use super::fixtures::*;

/// Everything a [`RecordingSurface`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Add(LayerId, usize),
    Remove(LayerId),
    FitBounds(LatLngBounds),
    SetView(LatLng, u8),
}

/// A [`MapSurface`] that keeps the positions of attached layers in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u32,
    /// Layers currently on the map, with their marker positions.
    pub live: Vec<(LayerId, Vec<LatLng>)>,
    pub calls: Vec<SurfaceCall>,
    /// Make the next `add_layer` fail.
    pub fail_next_add: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions of every marker on the map, across all live layers.
    pub fn visible_markers(&self) -> Vec<LatLng> {
        self.live
            .iter()
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }

    pub fn last_fit(&self) -> Option<LatLngBounds> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::FitBounds(b) => Some(*b),
            _ => None,
        })
    }

    pub fn last_view(&self) -> Option<(LatLng, u8)> {
        self.calls.iter().rev().find_map(|c| match c {
            SurfaceCall::SetView(center, zoom) => Some((*center, *zoom)),
            _ => None,
        })
    }
}

impl MapSurface for RecordingSurface {
    fn add_layer(&mut self, layer: &PointLayer) -> Result<LayerId> {
        if self.fail_next_add {
            self.fail_next_add = false;
            return Err(SheetMapError::Js("L.featureGroup is not a function".to_string()));
        }
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.live
            .push((id, layer.markers.iter().map(|m| m.position).collect()));
        self.calls.push(SurfaceCall::Add(id, layer.len()));
        Ok(id)
    }

    fn remove_layer(&mut self, id: LayerId) {
        self.live.retain(|(live, _)| *live != id);
        self.calls.push(SurfaceCall::Remove(id));
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.calls.push(SurfaceCall::FitBounds(bounds));
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.calls.push(SurfaceCall::SetView(center, zoom));
    }
}

/// A manager over a fresh recording surface with the stock columns.
pub fn recording_manager() -> PointLayerManager<RecordingSurface> {
    PointLayerManager::new(RecordingSurface::new(), LayerOptions::default())
}

/// Assert two positions are equal to within floating point parsing noise.
pub fn assert_latlng_eq(actual: LatLng, expected: LatLng) {
    assert!(
        (actual.lat - expected.lat).abs() < 1e-9 && (actual.lng - expected.lng).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}
