//! Rate source configuration
//!
//! The endpoint is fixed by default and may be overridden with
//! `MORTGAGE_RATES_URL`.

use std::env;
use std::time::Duration;

/// Default mortgage rate endpoint
pub const DEFAULT_RATES_ENDPOINT: &str =
    "https://developer.sbab.se/sandbox/api/interest-rates/2.0/mortgage-rates";

/// Environment variable that overrides the endpoint
pub const ENDPOINT_ENV_VAR: &str = "MORTGAGE_RATES_URL";

/// Where and how to fetch the rate table
#[derive(Debug, Clone, PartialEq)]
pub struct RateSourceConfig {
    /// Full URL of the rate table
    pub endpoint: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl RateSourceConfig {
    /// Configuration for `endpoint` with the transport's default timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    /// Default configuration with the endpoint taken from the environment.
    ///
    /// An unset or blank `MORTGAGE_RATES_URL` falls back to
    /// [`DEFAULT_RATES_ENDPOINT`]; surrounding whitespace is trimmed.
    pub fn from_env() -> Self {
        match env::var(ENDPOINT_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Bound the whole request, connect through body
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RATES_ENDPOINT)
    }
}
