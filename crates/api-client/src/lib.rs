//! HTTP clients for the external services Nearport searches rely on.
//!
//! Three public collaborators are wrapped here:
//!
//! - **Geocoding** (Nominatim): free-text query to location candidates
//! - **Dataset** (OurAirports): the raw airport catalog CSV
//! - **Routing** (OSRM): driven road distance between two coordinates
//!
//! The dataset and routing clients implement the collaborator traits from
//! `nearport-search`, so a fully wired search is:
//!
//! ```rust,no_run
//! use nearport_api_client::NearportClient;
//! use nearport_geo::Coordinate;
//! use nearport_search::{search, DistanceMode, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NearportClient::new()?;
//!
//!     let candidates = client.geocoding().geocode("London").await?;
//!     let origin = candidates.first().map(|c| c.coordinate)
//!         .unwrap_or(Coordinate::new(51.5074, -0.1278));
//!
//!     let request = SearchRequest::new(origin, 50, DistanceMode::StraightLine)?;
//!     let airports = search(&request, &client.dataset(), &client.routing()).await?;
//!
//!     for ranked in airports {
//!         println!("{} ({}) {} km", ranked.airport.name, ranked.airport.iata_code, ranked.distance_km);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::NearportClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::NearportClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{DatasetApi, GeocodingApi, LocationCandidate, RoutingApi};
    pub use crate::error::{ApiError, ApiResult};
}
