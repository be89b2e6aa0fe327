//! HTTP client for the TMDb v3 API.

use crate::api::MetadataApi;
use crate::error::{Result, TmdbError};
use crate::models::{MovieDetails, PersonCredits, PersonSearchResponse};
use async_trait::async_trait;
use marquee_core::TmdbConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// TMDb API client authenticated with an `api_key` query parameter.
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl TmdbClient {
    /// Create a client for the public TMDb endpoint.
    ///
    /// # Errors
    /// Returns error if the key is blank or the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client from the `[tmdb]` configuration section.
    ///
    /// # Errors
    /// Returns error if the key is blank or the HTTP client cannot be created.
    pub fn from_config(api_key: impl Into<String>, config: &TmdbConfig) -> Result<Self> {
        Self::with_base_url(api_key, &config.base_url, config.timeout_secs)
    }

    /// Create a client against a specific base URL.
    ///
    /// # Errors
    /// Returns error if the key is blank or the HTTP client cannot be created.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TmdbError::InvalidRequest(
                "TMDb API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TmdbError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Send a GET request and decode the JSON body.
    ///
    /// Non-success statuses are returned as errors, never retried.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, ?params, "TMDb request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| TmdbError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TmdbError::from_status(status.as_u16(), error_text));
        }

        response.json().await.map_err(|e| TmdbError::ParseError {
            endpoint: endpoint.to_string(),
            message: e.without_url().to_string(),
        })
    }
}

#[async_trait]
impl MetadataApi for TmdbClient {
    async fn search_person(&self, name: &str) -> Result<PersonSearchResponse> {
        self.get("/search/person", &[("query", name)]).await
    }

    async fn person_credits(&self, person_id: u64) -> Result<PersonCredits> {
        self.get(&format!("/person/{person_id}/movie_credits"), &[])
            .await
    }

    async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        self.get(
            &format!("/movie/{movie_id}"),
            &[("append_to_response", "credits")],
        )
        .await
    }
}
