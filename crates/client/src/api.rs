//! HTTP client for the chemistry API.
//!
//! Every endpoint is a `GET` under the configured base URL. A non-2xx
//! response becomes [`ApiError::Failed`] naming the operation; the
//! response body is not parsed.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::models::{
    Compound, CompoundQuery, HealthStatus, LiteratureQuery, PlatformStats, Publication, Reaction,
    ReactionQuery,
};

/// Errors from the chemistry API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decode, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot be extended with path segments.
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The API answered with a non-2xx status.
    #[error("Failed to {operation} (HTTP {status})")]
    Failed {
        /// Human-readable operation name, e.g. `"search compounds"`.
        operation: &'static str,
        status: u16,
    },
}

/// Client for a single chemistry API deployment.
#[derive(Debug, Clone)]
pub struct ChemistryApi {
    client: reqwest::Client,
    base_url: String,
}

impl ChemistryApi {
    /// Create a client for `base_url` with reqwest defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from [`ClientConfig`], applying its timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch("check health", self.request("/health")).await
    }

    /// `GET /stats`.
    pub async fn stats(&self) -> Result<PlatformStats, ApiError> {
        self.fetch("fetch stats", self.request("/stats")).await
    }

    /// `GET /compounds/search` with text, formula, weight range and limit.
    pub async fn search_compounds(
        &self,
        query: &CompoundQuery,
    ) -> Result<Vec<Compound>, ApiError> {
        let request = self.request("/compounds/search").query(query);
        self.fetch("search compounds", request).await
    }

    /// `GET /compounds/{id}`.
    pub async fn get_compound(&self, id: &str) -> Result<Compound, ApiError> {
        let url = self.segment_url(&["compounds", id])?;
        self.fetch("fetch compound", self.client.get(url)).await
    }

    /// `GET /reactions/search` with minimum yield, class and limit.
    pub async fn search_reactions(
        &self,
        query: &ReactionQuery,
    ) -> Result<Vec<Reaction>, ApiError> {
        let request = self.request("/reactions/search").query(query);
        self.fetch("search reactions", request).await
    }

    /// `GET /literature/search` with text, year and limit.
    pub async fn search_literature(
        &self,
        query: &LiteratureQuery,
    ) -> Result<Vec<Publication>, ApiError> {
        let request = self.request("/literature/search").query(query);
        self.fetch("search literature", request).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn segment_url(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send `request` and decode a JSON body, mapping non-2xx statuses to
    /// [`ApiError::Failed`].
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            operation,
            url = %response.url(),
            status = status.as_u16(),
            "Chemistry API response"
        );

        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "Chemistry API request failed");
            return Err(ApiError::Failed {
                operation,
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ChemistryApi::new("http://localhost:8000/api/v1/");
        assert_eq!(api.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(api.url("/health"), "http://localhost:8000/api/v1/health");
    }

    #[test]
    fn reserved_characters_stay_in_one_segment() {
        let api = ChemistryApi::new("http://localhost:8000/api/v1/");
        let url = api.segment_url(&["compounds", "a/b c"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/compounds/a%2Fb%20c"
        );
        let url = api.segment_url(&["compounds", "../x"]).unwrap();
        assert_eq!(url.path(), "/api/v1/compounds/..%2Fx");
    }

    #[test]
    fn unparsable_base_url_is_rejected() {
        let api = ChemistryApi::new("not a url");
        assert_matches!(
            api.segment_url(&["compounds", "x"]),
            Err(ApiError::InvalidBaseUrl(url)) if url == "not a url"
        );
    }

    #[test]
    fn failure_message_names_operation() {
        let err = ApiError::Failed {
            operation: "search compounds",
            status: 503,
        };
        assert_eq!(err.to_string(), "Failed to search compounds (HTTP 503)");
    }
}
