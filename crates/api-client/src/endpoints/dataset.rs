//! Airport catalog retrieval from the OurAirports dump

use crate::client::NearportClient;
use crate::error::ApiError;
use nearport_search::DatasetProvider;
use tracing::debug;

/// Airport catalog API interface
///
/// Fetches the full raw CSV text of the catalog; there is no incremental
/// or paged fetch, and no caching here (the orchestrator fetches once per
/// search by contract).
#[derive(Clone)]
pub struct DatasetApi {
    client: NearportClient,
}

impl DatasetApi {
    /// Create a new dataset API interface
    pub(crate) fn new(client: NearportClient) -> Self {
        Self { client }
    }
}

impl DatasetProvider for DatasetApi {
    type Error = ApiError;

    async fn fetch_catalog(&self) -> Result<String, ApiError> {
        let text = self
            .client
            .get_text(&self.client.config().dataset_url)
            .await?;

        debug!(bytes = text.len(), "fetched airport catalog");
        Ok(text)
    }
}
