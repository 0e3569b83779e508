//! Error types for search requests

use thiserror::Error;

/// Why a search request did not produce a result list.
///
/// Carries rendered messages instead of the underlying transport errors so it
/// can travel inside iced messages, which must be `Clone`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("invalid search endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Short text for the error line under the search input
    pub fn summary(&self) -> &'static str {
        match self {
            SearchError::Network(_) => "Could not reach the search service",
            SearchError::Status(_) => "The search service returned an error",
            SearchError::Decode(_) => "The search service sent an unreadable reply",
            SearchError::InvalidEndpoint(_) => "The search endpoint is misconfigured",
        }
    }
}
