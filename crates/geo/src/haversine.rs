//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two
//! points on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in
/// kilometers, unrounded.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in kilometers
///
/// # Example
/// ```
/// use nearport_geo::{haversine_distance, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = haversine_distance(&berlin, &paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[inline]
#[must_use]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometers, rounded to one decimal place.
///
/// This is the contract value used for radius filtering and ranking:
/// a user-facing "50 km" radius admits an airport whose exact distance is
/// 50.04 km, because the displayed distance rounds to 50.0.
#[inline]
#[must_use]
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    round_km(haversine_distance(from, to))
}

/// Rounds a distance in kilometers to one decimal place, half away from
/// zero. This is the rounding applied to every distance shown to a user
/// or compared against a search radius.
#[inline]
#[must_use]
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Test data: known distances between cities
    const BERLIN: Coordinate = Coordinate {
        latitude: 52.5200,
        longitude: 13.4050,
    };
    const PARIS: Coordinate = Coordinate {
        latitude: 48.8566,
        longitude: 2.3522,
    };
    const LONDON: Coordinate = Coordinate {
        latitude: 51.5074,
        longitude: -0.1278,
    };
    const NEW_YORK: Coordinate = Coordinate {
        latitude: 40.7128,
        longitude: -74.0060,
    };

    #[test]
    fn test_berlin_to_paris() {
        let distance = haversine_distance(&BERLIN, &PARIS);
        // Expected: ~878 km
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {distance}");
    }

    #[test]
    fn test_london_to_new_york() {
        let distance = haversine_distance(&LONDON, &NEW_YORK);
        // Expected: ~5,570 km
        assert!((distance - 5570.0).abs() < 30.0, "London-NYC: {distance}");
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(haversine_km(&BERLIN, &BERLIN), 0.0);
    }

    #[test]
    fn test_quarter_circumference() {
        // Equator to a point 90 degrees of longitude away: a quarter of the
        // circumference at radius 6371 km.
        let origin = Coordinate::new(0.0, 0.0);
        let quarter = Coordinate::new(0.0, 90.0);
        assert_eq!(haversine_km(&origin, &quarter), 10007.5);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        let km = haversine_km(&BERLIN, &PARIS);
        assert_eq!(km, (km * 10.0).round() / 10.0);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let d1 = haversine_km(&a, &b);
            let d2 = haversine_km(&b, &a);
            prop_assert_eq!(d1, d2);
        }

        #[test]
        fn prop_non_negative_and_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            let d = haversine_distance(&a, &b);
            // No two points on the sphere are further apart than half the
            // circumference.
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }
    }
}
