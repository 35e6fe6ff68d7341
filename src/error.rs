//! Failure taxonomy for the rate pipeline

use reqwest::StatusCode;
use thiserror::Error;

/// User-facing message shown while a rate fetch failure is held
pub const RATE_FETCH_ERROR_MESSAGE: &str =
    "Fel vid hämtning av bolåneräntor. Vänligen försök igen senare.";

/// The only failure the core recognizes.
///
/// It is surfaced to the renderer and never retried. The session stays usable
/// with whatever selection it had before the failed load.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("failed to fetch mortgage rates")]
    RateFetchError(#[source] FetchErrorKind),
}

/// Underlying cause of a [`Failure::RateFetchError`]
#[derive(Debug, Error)]
pub enum FetchErrorKind {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl Failure {
    /// Localized message for display
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateFetchError(_) => RATE_FETCH_ERROR_MESSAGE,
        }
    }

    pub fn kind(&self) -> &FetchErrorKind {
        match self {
            Self::RateFetchError(kind) => kind,
        }
    }
}

impl From<FetchErrorKind> for Failure {
    fn from(kind: FetchErrorKind) -> Self {
        Self::RateFetchError(kind)
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        Self::RateFetchError(FetchErrorKind::Transport(err))
    }
}

impl From<serde_json::Error> for Failure {
    fn from(err: serde_json::Error) -> Self {
        Self::RateFetchError(FetchErrorKind::Payload(err))
    }
}
