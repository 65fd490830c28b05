//! EPO OPS client

use crate::response::{parse_claims_texts, parse_description_text, parse_search_results};
use crate::{parse_conditions, OpsError};
use priorart_domain::record::truncate_chars;
use priorart_domain::traits::SearchProvider;
use priorart_domain::PatentRecord;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Default OPS service root
pub const DEFAULT_ENDPOINT: &str = "https://ops.epo.org/3.2";

/// Default number of results to request
pub const DEFAULT_SIZE_LIMIT: usize = 50;

/// Full-text prefix used as the representative claim when a document has
/// no claims, in characters.
pub const FULLTEXT_PREFIX_CHARS: usize = 2000;

/// Configuration for the OPS adapter
///
/// Passed in explicitly; the CLI owns all environment wiring.
#[derive(Debug, Clone)]
pub struct OpsConfig {
    /// OPS service root URL
    pub endpoint: String,

    /// OAuth consumer key
    pub api_key: String,

    /// OAuth consumer secret
    pub api_secret: String,

    /// Default result-size limit
    pub size_limit: usize,
}

impl OpsConfig {
    /// Configuration for the public OPS service with the given credentials
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Token response from the OPS auth endpoint
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

/// Client for the EPO OPS published-data services
///
/// Each search performs an OAuth client-credentials exchange, one search
/// request, and per-result claims and description fetches. Nothing is
/// cached between calls.
pub struct OpsClient {
    config: OpsConfig,
    http: reqwest::Client,
}

impl OpsClient {
    /// Create a client from the given configuration
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use priorart_ops::{OpsClient, OpsConfig};
    ///
    /// let client = OpsClient::new(OpsConfig::new("key", "secret"));
    /// ```
    pub fn new(config: OpsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configured default result-size limit
    pub fn size_limit(&self) -> usize {
        self.config.size_limit
    }

    /// Exchange the consumer key and secret for a bearer token.
    async fn fetch_access_token(&self) -> Result<String, OpsError> {
        let url = format!("{}/auth/accesstoken", self.config.endpoint);

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(OpsError::Auth(format!("HTTP {}: {}", status, body)));
        }

        let token: AccessTokenResponse = response
            .json()
            .await
            .map_err(|e| OpsError::Auth(format!("Failed to parse token response: {}", e)))?;

        Ok(token.access_token)
    }

    /// Search OPS and return a simplified landscape table.
    ///
    /// For each hit the claims and description are retrieved; the
    /// representative claim is the first claim, or the first
    /// [`FULLTEXT_PREFIX_CHARS`] characters of the description when the
    /// document has no claims. Process conditions are extracted from the
    /// representative claim. Results preserve the provider's order; no
    /// score ranking is applied.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a failed token exchange, a
    /// non-success HTTP status, or an unparseable body. No retry, no
    /// backoff. Condition extraction never fails; unparseable text
    /// yields empty condition lists.
    pub async fn search_ops(&self, query: &str, size: usize) -> Result<Vec<PatentRecord>, OpsError> {
        let token = self.fetch_access_token().await?;

        let url = format!(
            "{}/rest-services/published-data/search/biblio",
            self.config.endpoint
        );
        let range = format!("1-{}", size);

        debug!(query, size, "running OPS search");
        let body = self
            .get_json(&token, &url, &[("q", query), ("Range", &range)])
            .await?;

        let hits = parse_search_results(&body);
        debug!(hits = hits.len(), "OPS search complete");

        let mut landscape = Vec::with_capacity(hits.len());
        for hit in hits {
            let claims = self.fetch_claims(&token, &hit.publication).await?;
            let fulltext = self.fetch_description(&token, &hit.publication).await?;

            let representative = match claims.first() {
                Some(first) => first.clone(),
                None => truncate_chars(&fulltext, FULLTEXT_PREFIX_CHARS),
            };

            let mut record = PatentRecord::new(hit.publication, &hit.title);
            record.classifications = hit.cpc_classes;
            record.conditions = Some(parse_conditions(&representative));
            landscape.push(record);
        }

        Ok(landscape)
    }

    /// Retrieve the claim texts for a publication; empty when the service
    /// has no full text for it.
    async fn fetch_claims(&self, token: &str, publication: &str) -> Result<Vec<String>, OpsError> {
        let url = format!(
            "{}/rest-services/published-data/publication/epodoc/{}/claims",
            self.config.endpoint, publication
        );

        match self.get_optional_json(token, &url).await? {
            Some(body) => Ok(parse_claims_texts(&body)),
            None => {
                warn!(publication, "no claims available");
                Ok(Vec::new())
            }
        }
    }

    /// Retrieve the description text for a publication; empty when the
    /// service has no full text for it.
    async fn fetch_description(&self, token: &str, publication: &str) -> Result<String, OpsError> {
        let url = format!(
            "{}/rest-services/published-data/publication/epodoc/{}/description",
            self.config.endpoint, publication
        );

        match self.get_optional_json(token, &url).await? {
            Some(body) => Ok(parse_description_text(&body)),
            None => {
                warn!(publication, "no description available");
                Ok(String::new())
            }
        }
    }

    async fn get_json(
        &self,
        token: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, OpsError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(OpsError::Api { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| OpsError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    /// Like `get_json`, but a 404 means "not published here" and maps to
    /// `None` instead of an error.
    async fn get_optional_json(&self, token: &str, url: &str) -> Result<Option<Value>, OpsError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(OpsError::Api { status, body });
        }

        let body = response
            .json()
            .await
            .map_err(|e| OpsError::InvalidResponse(format!("Failed to parse response: {}", e)))?;
        Ok(Some(body))
    }
}

impl SearchProvider for OpsClient {
    type Error = OpsError;

    fn search(&self, query: &str, size: usize) -> Result<Vec<PatentRecord>, Self::Error> {
        // Blocking wrapper for the async search
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| OpsError::Http(format!("Failed to create runtime: {}", e)))?;
        runtime.block_on(self.search_ops(query, size))
    }
}
