//! Collaborator traits for the external services a search depends on.
//!
//! The search core never talks to the network itself; callers hand it
//! implementations of these traits. `nearport-api-client` provides the
//! production implementations; tests use in-memory stubs.

use std::future::Future;

use nearport_geo::Coordinate;

/// Source of the raw airport catalog text.
pub trait DatasetProvider {
    /// Error type of a failed fetch.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches the full catalog dump. Called once per search; the core
    /// performs no caching across searches.
    fn fetch_catalog(&self) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Road-routing service measuring driven distance between two points.
pub trait RoutingProvider {
    /// Error type of a failed routing call.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the driven route length in meters, or `Ok(None)` when the
    /// destination is unreachable by road. Absence of a route is a valid,
    /// non-error outcome.
    fn route_distance_meters(
        &self,
        from: &Coordinate,
        to: &Coordinate,
    ) -> impl Future<Output = Result<Option<f64>, Self::Error>> + Send;
}
