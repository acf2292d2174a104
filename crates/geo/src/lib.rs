//! Geographic primitives for Nearport.
//!
//! This crate provides:
//! - The [`Coordinate`] value type with range validation
//! - Haversine great-circle distance calculations
//!
//! # Example
//!
//! ```
//! use nearport_geo::{haversine_km, Coordinate};
//!
//! let london = Coordinate::new(51.5074, -0.1278);
//! let paris = Coordinate::new(48.8566, 2.3522);
//!
//! let distance_km = haversine_km(&london, &paris);
//! assert!((distance_km - 344.0).abs() < 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod haversine;

pub use error::{GeoError, Result};
pub use haversine::{haversine_distance, haversine_km, round_km, EARTH_RADIUS_KM};

/// A geographic coordinate with latitude and longitude.
///
/// Immutable after construction; all distance functions take coordinates
/// by reference.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Validating constructor for coordinates from untrusted input.
    ///
    /// # Errors
    /// Returns [`GeoError::InvalidCoordinate`] if either component is
    /// non-finite or out of range.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({latitude}, {longitude})"
            )))
        }
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(51.5074, -0.1278);
        assert_eq!(coord.latitude, 51.5074);
        assert_eq!(coord.longitude, -0.1278);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(Coordinate::checked(51.5, -0.1).is_ok());
        assert!(Coordinate::checked(-95.0, 0.0).is_err());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (51.5074, -0.1278).into();
        assert_eq!(coord.latitude, 51.5074);
    }
}
