//! Road routing via the OSRM route API

use crate::client::NearportClient;
use crate::error::ApiError;
use nearport_geo::Coordinate;
use nearport_search::RoutingProvider;
use serde::Deserialize;

/// Routing API interface
#[derive(Clone)]
pub struct RoutingApi {
    client: NearportClient,
}

/// OSRM route response; only the total distance is consumed.
#[derive(Debug, Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Route length in meters
    distance: f64,
}

impl RoutingApi {
    /// Create a new routing API interface
    pub(crate) fn new(client: NearportClient) -> Self {
        Self { client }
    }
}

impl RoutingProvider for RoutingApi {
    type Error = ApiError;

    async fn route_distance_meters(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> Result<Option<f64>, ApiError> {
        let url = route_url(&self.client.config().routing_url, from, to);

        let response: OsrmResponse = self
            .client
            .get_json(&url, &[("overview", "false")])
            .await?;

        // An empty routes array means no drivable route, which is a valid
        // outcome rather than an error.
        Ok(response.routes.first().map(|route| route.distance))
    }
}

/// Builds the OSRM route URL. The wire format is longitude,latitude,
/// reversed relative to the rest of the codebase.
fn route_url(base: &str, from: &Coordinate, to: &Coordinate) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}",
        base.trim_end_matches('/'),
        from.longitude,
        from.latitude,
        to.longitude,
        to.latitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_url_is_longitude_first() {
        let from = Coordinate::new(51.5074, -0.1278);
        let to = Coordinate::new(51.5053, 0.0553);

        let url = route_url("https://router.project-osrm.org", &from, &to);

        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/driving/-0.1278,51.5074;0.0553,51.5053"
        );
    }

    #[test]
    fn test_route_url_trims_trailing_slash() {
        let from = Coordinate::new(0.0, 0.0);
        let to = Coordinate::new(1.0, 1.0);

        let url = route_url("https://router.project-osrm.org/", &from, &to);
        assert!(url.starts_with("https://router.project-osrm.org/route/v1/driving/"));
    }

    #[test]
    fn test_deserialize_osrm_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [
                { "distance": 14532.6, "duration": 1290.4, "legs": [] }
            ],
            "waypoints": []
        }"#;

        let response: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.routes[0].distance, 14532.6);
    }

    #[test]
    fn test_missing_routes_means_unreachable() {
        let response: OsrmResponse = serde_json::from_str(r#"{"code": "NoRoute"}"#).unwrap();
        assert!(response.routes.first().is_none());
    }
}
