use std::time::Duration;

use url::Url;

use crate::config::ApiConfig;
use crate::error::{Result, SearchError};
use crate::search::{SearchResponse, SearchResult};

/// HTTP client for the search API
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base: Url,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|_| SearchError::InvalidEndpoint(config.base_url.clone()))?;
        let endpoint = base
            .join(&config.endpoint)
            .map_err(|_| SearchError::InvalidEndpoint(config.endpoint.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base,
            endpoint,
        })
    }

    /// Full request URL for a query. The text is sent verbatim, only encoded.
    pub fn search_url(&self, query: &str) -> String {
        let mut endpoint = self.endpoint.clone();
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        format!("{}?q={}", endpoint, urlencoding::encode(query))
    }

    /// Run one search and parse the ranked results
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = self.search_url(query);
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        tracing::debug!("'{}' returned {} results", query, parsed.results.len());
        Ok(parsed.results)
    }

    /// Resolve a result's detail link against the API base URL.
    ///
    /// Absolute links pass through; anything unparseable is returned as-is.
    pub fn resolve_link(&self, link: &str) -> String {
        match self.base.join(link) {
            Ok(url) => url.to_string(),
            Err(_) => link.to_string(),
        }
    }
}
