//! Geocoding via the Nominatim search API

use crate::client::NearportClient;
use crate::error::ApiResult;
use nearport_geo::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum number of location candidates requested per query
const GEOCODE_RESULT_LIMIT: &str = "5";

/// Geocoding API interface
#[derive(Clone)]
pub struct GeocodingApi {
    client: NearportClient,
}

/// One resolved location for a free-text query.
///
/// Ephemeral: held only until the caller picks an origin for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    /// Human-readable place name
    pub display_name: String,
    /// Resolved position
    pub coordinate: Coordinate,
}

/// Raw Nominatim search result; `lat`/`lon` arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl GeocodingApi {
    /// Create a new geocoding API interface
    pub(crate) fn new(client: NearportClient) -> Self {
        Self { client }
    }

    /// Resolve a free-text query to an ordered list of location candidates.
    ///
    /// An empty list is a valid outcome meaning no match. Results whose
    /// coordinates fail to parse are dropped with a warning.
    ///
    /// # Errors
    /// Returns an error if the geocoding service is unreachable or replies
    /// with a non-success status.
    pub async fn geocode(&self, query: &str) -> ApiResult<Vec<LocationCandidate>> {
        let url = format!(
            "{}/search",
            self.client.config().geocoder_url.trim_end_matches('/')
        );

        let places: Vec<NominatimPlace> = self
            .client
            .get_json(
                &url,
                &[
                    ("q", query),
                    ("format", "json"),
                    ("limit", GEOCODE_RESULT_LIMIT),
                    ("addressdetails", "1"),
                ],
            )
            .await?;

        Ok(places.into_iter().filter_map(candidate_from_place).collect())
    }
}

fn candidate_from_place(place: NominatimPlace) -> Option<LocationCandidate> {
    let latitude: f64 = place.lat.parse().ok()?;
    let longitude: f64 = place.lon.parse().ok()?;

    match Coordinate::checked(latitude, longitude) {
        Ok(coordinate) => Some(LocationCandidate {
            display_name: place.display_name,
            coordinate,
        }),
        Err(error) => {
            warn!(place = %place.display_name, error = %error, "dropping geocoding result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nominatim_response() {
        let json = r#"[
            {
                "place_id": 258894425,
                "display_name": "London, Greater London, England, United Kingdom",
                "lat": "51.5074456",
                "lon": "-0.1277653",
                "class": "place",
                "type": "city"
            },
            {
                "place_id": 300000001,
                "display_name": "London, Ontario, Canada",
                "lat": "42.9836747",
                "lon": "-81.2496068"
            }
        ]"#;

        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        let candidates: Vec<LocationCandidate> =
            places.into_iter().filter_map(candidate_from_place).collect();

        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].display_name.starts_with("London, Greater London"));
        assert!((candidates[0].coordinate.latitude - 51.5074).abs() < 0.001);
    }

    #[test]
    fn test_empty_response_is_valid() {
        let places: Vec<NominatimPlace> = serde_json::from_str("[]").unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_unparsable_coordinates_dropped() {
        let place = NominatimPlace {
            display_name: "Nowhere".to_string(),
            lat: "not-a-number".to_string(),
            lon: "0.0".to_string(),
        };
        assert!(candidate_from_place(place).is_none());
    }
}
