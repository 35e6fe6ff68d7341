//! Rate repository: one GET against the configured endpoint, last good table held in memory

use super::{parse_rate_payload, RateSet};
use crate::config::RateSourceConfig;
use crate::error::{Failure, FetchErrorKind};
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Performs the HTTP request for the rate table.
///
/// Cheap to clone and `Send + 'static`, so a front end can run the fetch as a
/// background task and hand the outcome to [`RateRepository::record`].
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: Client,
    config: RateSourceConfig,
}

impl RateFetcher {
    /// Build a fetcher with its own HTTP client.
    ///
    /// The configured timeout, if any, applies to the whole request.
    pub fn new(config: RateSourceConfig) -> Result<Self, Failure> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Fetch and parse the rate table.
    ///
    /// A transport error, a non-2xx status or an unparseable body all fail as
    /// [`Failure::RateFetchError`].
    pub async fn fetch(&self) -> Result<RateSet, Failure> {
        debug!("Fetching mortgage rates from {}", self.config.endpoint);

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchErrorKind::Status(status).into());
        }

        let body = response.bytes().await?;
        parse_rate_payload(&body)
    }
}

/// Holds the most recent successful [`RateSet`] and the last failure, if any
#[derive(Debug)]
pub struct RateRepository {
    fetcher: RateFetcher,
    rates: Option<RateSet>,
    failure: Option<Failure>,
}

impl RateRepository {
    /// Empty repository fetching from `config`
    pub fn new(config: RateSourceConfig) -> Result<Self, Failure> {
        Ok(Self::with_fetcher(RateFetcher::new(config)?))
    }

    /// Empty repository around an existing fetcher
    pub fn with_fetcher(fetcher: RateFetcher) -> Self {
        Self {
            fetcher,
            rates: None,
            failure: None,
        }
    }

    /// Handle for running the fetch elsewhere
    pub fn fetcher(&self) -> RateFetcher {
        self.fetcher.clone()
    }

    /// `None` until the first successful load
    pub fn rates(&self) -> Option<&RateSet> {
        self.rates.as_ref()
    }

    /// Failure from the most recent load, cleared by the next success
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Fetch the table and record the outcome
    pub async fn load(&mut self) -> Result<&RateSet, &Failure> {
        let outcome = self.fetcher.fetch().await;
        self.record(outcome)
    }

    /// Store a fetch outcome.
    ///
    /// Success replaces the table wholesale and clears any failure. Failure
    /// keeps the previous table, absent if nothing has loaded yet.
    pub fn record(&mut self, outcome: Result<RateSet, Failure>) -> Result<&RateSet, &Failure> {
        match outcome {
            Ok(rates) => {
                info!("Loaded {} mortgage rates", rates.len());
                self.failure = None;
                Ok(&*self.rates.insert(rates))
            }
            Err(failure) => {
                warn!("Mortgage rate fetch failed: {:?}", failure);
                Err(&*self.failure.insert(failure))
            }
        }
    }
}
