//! Coordinate validation shared by both request shapes.

use serde_json::Value;

use crate::config::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error_handling::ValidationError;

/// A coordinate as it arrived, before validation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum RawCoordinate<'a> {
    Absent,
    Text(&'a str),
    Json(&'a Value),
}

impl<'a> RawCoordinate<'a> {
    pub(crate) fn from_text(value: Option<&'a str>) -> Self {
        value.map_or(RawCoordinate::Absent, RawCoordinate::Text)
    }

    pub(crate) fn from_json(value: Option<&'a Value>) -> Self {
        value.map_or(RawCoordinate::Absent, RawCoordinate::Json)
    }

    fn is_missing(&self) -> bool {
        match self {
            RawCoordinate::Absent => true,
            RawCoordinate::Text(s) => s.trim().is_empty(),
            RawCoordinate::Json(Value::Null) => true,
            RawCoordinate::Json(Value::String(s)) => s.trim().is_empty(),
            RawCoordinate::Json(_) => false,
        }
    }

    /// Numeric value, if the input is a finite number or numeric string.
    fn to_f64(self) -> Option<f64> {
        let value = match self {
            RawCoordinate::Absent => None,
            RawCoordinate::Text(s) => s.trim().parse::<f64>().ok(),
            RawCoordinate::Json(Value::Number(n)) => n.as_f64(),
            RawCoordinate::Json(Value::String(s)) => s.trim().parse::<f64>().ok(),
            RawCoordinate::Json(_) => None,
        };
        value.filter(|v| v.is_finite())
    }
}

/// Validates a latitude/longitude pair.
///
/// Presence of both is checked first. Latitude is then checked on its own;
/// longitude is only looked at once latitude has passed.
pub(crate) fn validate_coordinates(
    latitude: RawCoordinate<'_>,
    longitude: RawCoordinate<'_>,
) -> Result<(f64, f64), ValidationError> {
    if latitude.is_missing() || longitude.is_missing() {
        return Err(ValidationError::MissingCoordinates);
    }

    let lat = latitude
        .to_f64()
        .filter(|v| LATITUDE_RANGE.contains(v))
        .ok_or(ValidationError::InvalidLatitude)?;
    let lng = longitude
        .to_f64()
        .filter(|v| LONGITUDE_RANGE.contains(v))
        .ok_or(ValidationError::InvalidLongitude)?;

    Ok((lat, lng))
}
