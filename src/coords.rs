//! Coordinate parsing for sheet cells.
//!
//! Sheets maintained by hand mix `59.3293`, ` 59.3293 ` and the Swedish
//! decimal comma `59,3293`. All three are accepted. Anything that does not
//! parse to a finite number in range is reported so the row can be skipped.

use crate::config::ColumnMap;
use crate::types::{LatLng, Row};

/// Why a row has no usable position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("column '{0}' is missing or empty")]
    Missing(String),

    #[error("column '{column}' is not a number: '{value}'")]
    NotANumber { column: String, value: String },

    #[error("column '{column}' is out of range: {value}")]
    OutOfRange { column: String, value: f64 },
}

/// Which coordinate a cell holds; decides the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

/// Parse one coordinate cell.
pub fn parse_coordinate(
    column: &str,
    raw: &str,
    axis: Axis,
) -> std::result::Result<f64, CoordinateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoordinateError::Missing(column.to_string()));
    }

    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else if trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let value: f64 = normalized
        .parse()
        .map_err(|_| CoordinateError::NotANumber {
            column: column.to_string(),
            value: trimmed.to_string(),
        })?;

    if !value.is_finite() || value.abs() > axis.limit() {
        return Err(CoordinateError::OutOfRange {
            column: column.to_string(),
            value,
        });
    }
    Ok(value)
}

/// Position of a row, read from the configured latitude and longitude columns.
pub fn row_position(row: &Row, columns: &ColumnMap) -> std::result::Result<LatLng, CoordinateError> {
    let lat = parse_coordinate(
        &columns.latitude,
        row.value(&columns.latitude),
        Axis::Latitude,
    )?;
    let lng = parse_coordinate(
        &columns.longitude,
        row.value(&columns.longitude),
        Axis::Longitude,
    )?;
    Ok(LatLng::new(lat, lng))
}
