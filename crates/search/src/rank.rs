//! Proximity ranking of commercial airport candidates.
//!
//! Straight-line ranking is pure math over the candidate list. Driving
//! ranking talks to a routing collaborator once per shortlisted candidate,
//! strictly serialized with a fixed pause between calls so the public
//! routing service is never fanned out against.

use std::cmp::Ordering;
use std::time::Duration;

use nearport_catalog::AirportRecord;
use nearport_geo::{haversine_km, round_km, Coordinate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::providers::RoutingProvider;
use crate::request::{DistanceMode, SearchRequest};

/// Multiplier applied to the requested radius when pre-filtering driving
/// candidates; compensates for road detours relative to the great-circle
/// distance.
pub const ROUTING_RADIUS_BUFFER: f64 = 1.5;

/// Maximum number of candidates routed per search; bounds the volume of
/// external routing calls.
pub const MAX_ROUTING_CANDIDATES: usize = 20;

/// Fixed pause between consecutive routing calls. Fixed pacing, not an
/// adaptive back-off.
pub const ROUTING_CALL_DELAY: Duration = Duration::from_millis(100);

/// An airport together with its computed distance from the search origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAirport {
    /// The airport
    pub airport: AirportRecord,
    /// Distance from the origin in kilometers, rounded to one decimal.
    /// Never exceeds the requested radius.
    pub distance_km: f64,
}

/// Ranks candidates for a request, dispatching on its distance mode.
///
/// The routing collaborator is only consulted in driving mode.
pub async fn rank<R: RoutingProvider>(
    request: &SearchRequest,
    candidates: Vec<AirportRecord>,
    routing: &R,
) -> Vec<RankedAirport> {
    match request.mode {
        DistanceMode::StraightLine => {
            rank_straight_line(&request.origin, request.radius_km, candidates)
        }
        DistanceMode::Driving => {
            rank_driving(&request.origin, request.radius_km, candidates, routing).await
        }
    }
}

/// Ranks candidates by great-circle distance.
///
/// Keeps candidates whose rounded distance is within the radius, sorted
/// ascending. The sort is stable, so ties keep input order.
#[must_use]
pub fn rank_straight_line(
    origin: &Coordinate,
    radius_km: u32,
    candidates: Vec<AirportRecord>,
) -> Vec<RankedAirport> {
    let radius = f64::from(radius_km);

    let mut ranked: Vec<RankedAirport> = candidates
        .into_iter()
        .map(|airport| {
            let distance_km = haversine_km(origin, &airport.coordinate);
            RankedAirport {
                airport,
                distance_km,
            }
        })
        .filter(|r| r.distance_km <= radius)
        .collect();

    sort_by_distance(&mut ranked);
    ranked
}

/// Ranks candidates by driven road distance.
///
/// Candidates are pre-filtered by straight-line distance against
/// `radius * `[`ROUTING_RADIUS_BUFFER`], sorted nearest-first and capped at
/// [`MAX_ROUTING_CANDIDATES`] before any routing call is made. Calls are
/// issued one at a time with [`ROUTING_CALL_DELAY`] before each call after
/// the first. A candidate whose routing call fails or that has no drivable
/// route is dropped; partial results are acceptable.
pub async fn rank_driving<R: RoutingProvider>(
    origin: &Coordinate,
    radius_km: u32,
    candidates: Vec<AirportRecord>,
    routing: &R,
) -> Vec<RankedAirport> {
    let radius = f64::from(radius_km);

    let mut shortlist: Vec<(f64, AirportRecord)> = candidates
        .into_iter()
        .map(|airport| (haversine_km(origin, &airport.coordinate), airport))
        .filter(|(straight_km, _)| *straight_km <= radius * ROUTING_RADIUS_BUFFER)
        .collect();
    shortlist.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    shortlist.truncate(MAX_ROUTING_CANDIDATES);

    debug!(shortlisted = shortlist.len(), "routing driving candidates");

    let mut ranked = Vec::new();
    for (index, (_, airport)) in shortlist.into_iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(ROUTING_CALL_DELAY).await;
        }

        let routed = routing
            .route_distance_meters(origin, &airport.coordinate)
            .await;

        match routed {
            Ok(Some(meters)) => {
                let distance_km = round_km(meters / 1000.0);
                if distance_km <= radius {
                    ranked.push(RankedAirport {
                        airport,
                        distance_km,
                    });
                }
            }
            Ok(None) => {
                warn!(airport = %airport.name, "no drivable route, dropping candidate");
            }
            Err(error) => {
                warn!(
                    airport = %airport.name,
                    error = %error,
                    "routing call failed, dropping candidate"
                );
            }
        }
    }

    sort_by_distance(&mut ranked);
    ranked
}

fn sort_by_distance(ranked: &mut [RankedAirport]) {
    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
}
