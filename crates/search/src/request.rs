//! Search request values.

use nearport_geo::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// How distance from the origin is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMode {
    /// Great-circle (Haversine) distance
    StraightLine,
    /// Road-network routed distance
    Driving,
}

/// One airport search: constructed per user action, consumed once.
///
/// The origin and mode travel inside the request rather than as ambient
/// state, so nothing couples the UI's selection handling to the search
/// core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Resolved origin coordinate (typically from geocoding)
    pub origin: Coordinate,
    /// Search radius in kilometers
    pub radius_km: u32,
    /// Distance measurement mode
    pub mode: DistanceMode,
}

impl SearchRequest {
    /// Creates a validated search request.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidRequest`] if the origin is out of
    /// range or the radius is zero.
    pub fn new(origin: Coordinate, radius_km: u32, mode: DistanceMode) -> Result<Self, SearchError> {
        if !origin.is_valid() {
            return Err(SearchError::InvalidRequest(format!(
                "origin out of range: ({}, {})",
                origin.latitude, origin.longitude
            )));
        }
        if radius_km == 0 {
            return Err(SearchError::InvalidRequest(
                "radius must be at least 1 km".to_string(),
            ));
        }

        Ok(Self {
            origin,
            radius_km,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = SearchRequest::new(
            Coordinate::new(51.5074, -0.1278),
            50,
            DistanceMode::StraightLine,
        );
        assert!(request.is_ok());
    }

    #[test]
    fn test_zero_radius_rejected() {
        let result = SearchRequest::new(Coordinate::new(0.0, 0.0), 0, DistanceMode::Driving);
        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result =
            SearchRequest::new(Coordinate::new(120.0, 0.0), 50, DistanceMode::StraightLine);
        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
    }
}
