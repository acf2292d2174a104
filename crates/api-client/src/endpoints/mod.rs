//! Per-service API interfaces
//!
//! Each collaborator service gets a small API struct holding a clone of
//! the shared [`NearportClient`](crate::NearportClient).

mod dataset;
mod geocoding;
mod routing;

pub use dataset::DatasetApi;
pub use geocoding::{GeocodingApi, LocationCandidate};
pub use routing::RoutingApi;
