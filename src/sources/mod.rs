//! Remote integration with the Korean Classics DB.
//!
//! [`AnnalsSource`] is the retrieval engine: it owns the HTTP client and the
//! endpoint configuration and exposes the two operations the tool layer
//! consumes - search ([`AnnalsSource::search`], [`AnnalsSource::search_advanced`])
//! and full-text resolution ([`AnnalsSource::fetch_article`]).

mod annals;
mod article;
pub mod kings;
mod query;

pub use annals::AnnalsSource;

/// Errors that can occur when talking to the remote service.
///
/// Every failure is scoped to a single call; there is no retry and no
/// process-wide degraded state.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Invalid request parameters; detected before any network access.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("API error: {0}")]
    Api(String),

    /// A response that could not be parsed (malformed XML envelope).
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}
