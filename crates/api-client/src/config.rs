//! Configuration for the Nearport API clients
//!
//! Supports environment-based configuration with public-service defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default Nominatim geocoding endpoint
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default OurAirports catalog dump
const DEFAULT_DATASET_URL: &str =
    "https://davidmegginson.github.io/ourairports-data/airports.csv";

/// Default OSRM routing endpoint
const DEFAULT_ROUTING_URL: &str = "https://router.project-osrm.org";

/// Default User-Agent; Nominatim's usage policy requires an identifying one
const DEFAULT_USER_AGENT: &str = "nearport/0.3";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the geocoding service
    pub geocoder_url: String,
    /// Full URL of the airport catalog dump
    pub dataset_url: String,
    /// Base URL of the routing service
    pub routing_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            routing_url: DEFAULT_ROUTING_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables, falling back to the
    /// public services when unset:
    /// - `NEARPORT_GEOCODER_URL`: geocoding service base URL
    /// - `NEARPORT_DATASET_URL`: airport catalog URL
    /// - `NEARPORT_ROUTING_URL`: routing service base URL
    /// - `NEARPORT_USER_AGENT`: outbound User-Agent header
    /// - `NEARPORT_TIMEOUT_SECS`: request timeout in seconds
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the resulting configuration fails
    /// validation.
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();

        let config = Self {
            geocoder_url: env::var("NEARPORT_GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            dataset_url: env::var("NEARPORT_DATASET_URL").unwrap_or(defaults.dataset_url),
            routing_url: env::var("NEARPORT_ROUTING_URL").unwrap_or(defaults.routing_url),
            user_agent: env::var("NEARPORT_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout: env::var("NEARPORT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(defaults.timeout, Duration::from_secs),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if any URL is empty or not HTTP(S), or
    /// the user agent is empty.
    pub fn validate(&self) -> ApiResult<()> {
        for (name, url) in [
            ("geocoder_url", &self.geocoder_url),
            ("dataset_url", &self.dataset_url),
            ("routing_url", &self.routing_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(format!("{name} must be an HTTP(S) URL")));
            }
        }
        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("user_agent must not be empty"));
        }
        Ok(())
    }
}
