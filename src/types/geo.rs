use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `[lat, lng]`, the array form Leaflet accepts anywhere a `LatLng` is expected.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

/// Axis-aligned bounds around a set of positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Degenerate bounds covering a single position.
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Bounds covering every position, or `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// `[[south, west], [north, east]]`, Leaflet's `LatLngBoundsExpression`.
    pub fn to_array(self) -> [[f64; 2]; 2] {
        [self.south_west.to_array(), self.north_east.to_array()]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty_set_is_none() {
        assert!(LatLngBounds::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let points = vec![
            LatLng::new(59.3, 18.1),
            LatLng::new(55.6, 13.0),
            LatLng::new(67.9, 20.2),
        ];
        let bounds = LatLngBounds::from_points(points.iter().copied()).unwrap();
        assert_eq!(bounds.south_west, LatLng::new(55.6, 13.0));
        assert_eq!(bounds.north_east, LatLng::new(67.9, 20.2));
        for p in points {
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn test_single_point_bounds_collapse() {
        let p = LatLng::new(59.3, 18.1);
        let bounds = LatLngBounds::from_points([p]);
        assert_eq!(bounds, Some(LatLngBounds::from_point(p)));
        assert_eq!(bounds.map(|b| b.center()), Some(p));
    }

    #[test]
    fn test_leaflet_array_order() {
        let bounds = LatLngBounds {
            south_west: LatLng::new(1.0, 2.0),
            north_east: LatLng::new(3.0, 4.0),
        };
        assert_eq!(bounds.to_array(), [[1.0, 2.0], [3.0, 4.0]]);
    }
}
