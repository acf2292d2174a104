//! Search orchestration: fetch, parse, filter, rank.

use nearport_catalog::{filter_commercial, parse};
use tracing::{debug, error};

use crate::error::SearchError;
use crate::providers::{DatasetProvider, RoutingProvider};
use crate::rank::{rank, RankedAirport};
use crate::request::SearchRequest;

/// Runs one airport search end to end.
///
/// The catalog is fetched once per call; there is no caching across
/// searches and no retrying at this layer. Each step runs to completion
/// before the next starts.
///
/// # Errors
/// Any fetch or parse failure is logged with full detail and surfaced as
/// the single generic [`SearchError::Failed`]; the caller never receives
/// provider-specific diagnostics. Per-candidate routing failures do not
/// reach this level at all; they only shrink the result set.
pub async fn search<D, R>(
    request: &SearchRequest,
    dataset: &D,
    routing: &R,
) -> Result<Vec<RankedAirport>, SearchError>
where
    D: DatasetProvider,
    R: RoutingProvider,
{
    let text = dataset.fetch_catalog().await.map_err(|e| {
        error!(error = %e, "airport catalog fetch failed");
        SearchError::Failed
    })?;

    let records = parse(&text).map_err(|e| {
        error!(error = %e, "airport catalog parse failed");
        SearchError::Failed
    })?;

    let candidates = filter_commercial(&records);
    debug!(
        rows = records.len(),
        candidates = candidates.len(),
        radius_km = request.radius_km,
        mode = ?request.mode,
        "ranking airport candidates"
    );

    Ok(rank(request, candidates, routing).await)
}
