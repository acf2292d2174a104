//! Airport proximity search core for Nearport.
//!
//! This crate provides:
//! - The [`SearchRequest`] value describing one search
//! - Proximity ranking by great-circle or driven road distance
//! - Collaborator traits for the dataset and routing services
//! - The orchestrator tying fetch, parse, filter and rank together
//!
//! The crate is a pure computation/orchestration library: it reads no
//! environment, keeps no state across searches, and is driven entirely by
//! the request value and the collaborators handed to [`search`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod orchestrator;
mod providers;
mod rank;
mod request;

pub use error::SearchError;
pub use orchestrator::search;
pub use providers::{DatasetProvider, RoutingProvider};
pub use rank::{
    rank, rank_driving, rank_straight_line, RankedAirport, MAX_ROUTING_CANDIDATES,
    ROUTING_CALL_DELAY, ROUTING_RADIUS_BUFFER,
};
pub use request::{DistanceMode, SearchRequest};
