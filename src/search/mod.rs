pub mod client;
pub mod controller;

use std::time::Duration;

use serde::Deserialize;

/// One ranked match returned by the search API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    /// Display label (the disorder name)
    #[serde(rename = "disorder")]
    pub label: String,
    /// Backend-computed probability in [0, 1]
    #[serde(rename = "prob")]
    pub match_score: f64,
    /// Absolute URL, or a path relative to the API base URL
    #[serde(rename = "link")]
    pub detail_link: String,
}

/// Response body of `GET /api/?q=...`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Wait out the quiet period for one debounce generation.
///
/// Resolves to the generation it was armed with, so the caller can tell
/// whether a newer edit has superseded it in the meantime.
pub async fn quiet_period(generation: u64, delay: Duration) -> u64 {
    tokio::time::sleep(delay).await;
    generation
}
