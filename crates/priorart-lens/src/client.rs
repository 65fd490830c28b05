//! Lens API client

use crate::LensError;
use priorart_claims::{split_claim_elements, HeuristicClaimPicker, TokenSetScorer};
use priorart_domain::record::MAX_RECORD_ELEMENTS;
use priorart_domain::traits::SearchProvider;
use priorart_domain::{ClaimPicker, PatentRecord, TextSimilarity};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Lens search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.lens.org/patent/search";

/// Default number of records to request
pub const DEFAULT_SIZE_LIMIT: usize = 50;

/// Fields requested from the Lens API for every search
const INCLUDE_FIELDS: &[&str] = &[
    "lens_id",
    "title",
    "abstract",
    "claims",
    "applicants",
    "cpc",
    "date_published",
];

/// Configuration for the Lens adapter
///
/// Passed in explicitly so tests can inject endpoints and the CLI owns
/// all environment wiring.
#[derive(Debug, Clone)]
pub struct LensConfig {
    /// Search endpoint URL
    pub endpoint: String,

    /// Bearer token for the Authorization header
    pub token: String,

    /// Default result-size limit
    pub size_limit: usize,
}

impl LensConfig {
    /// Configuration for the public Lens endpoint with the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// Request body for the Lens search endpoint
#[derive(Serialize)]
struct LensSearchRequest<'a> {
    query: &'a str,
    size: usize,
    include: &'a [&'a str],
}

/// Response from the Lens search endpoint
#[derive(Deserialize)]
struct LensSearchResponse {
    #[serde(default)]
    data: Vec<LensDocument>,
}

/// One document from a Lens response
#[derive(Deserialize)]
pub(crate) struct LensDocument {
    pub(crate) lens_id: String,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) date_published: Option<String>,
    #[serde(default)]
    pub(crate) claims: Option<Vec<String>>,
}

/// Client for The Lens patent search API
///
/// Issues one POST per search and reshapes the response into
/// [`PatentRecord`]s sorted by similarity score. The claim-picking and
/// scoring capabilities are generic so they can be swapped in tests.
pub struct LensClient<P = HeuristicClaimPicker, S = TokenSetScorer> {
    config: LensConfig,
    http: reqwest::Client,
    picker: P,
    scorer: S,
}

impl LensClient {
    /// Create a client with the standard capabilities
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use priorart_lens::{LensClient, LensConfig};
    ///
    /// let client = LensClient::new(LensConfig::new("my-token"));
    /// ```
    pub fn new(config: LensConfig) -> Self {
        Self::with_capabilities(config, HeuristicClaimPicker, TokenSetScorer)
    }
}

impl<P: ClaimPicker, S: TextSimilarity> LensClient<P, S> {
    /// Create a client with explicit picker and scorer capabilities
    pub fn with_capabilities(config: LensConfig, picker: P, scorer: S) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            picker,
            scorer,
        }
    }

    /// The configured default result-size limit
    pub fn size_limit(&self) -> usize {
        self.config.size_limit
    }

    /// Query the Lens API and return simplified patent records.
    ///
    /// For each returned document the representative claim is picked, its
    /// first [`MAX_RECORD_ELEMENTS`] elements are extracted, and, when
    /// `my_invention` is non-empty, a similarity score against the claim
    /// is computed (otherwise the score stays 0). Records come back
    /// sorted by score descending; the sort is stable, so with an empty
    /// invention the API's order is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success HTTP status, or
    /// a response body that does not parse. No retry, no backoff.
    pub async fn search_lens(
        &self,
        query: &str,
        size: usize,
        my_invention: &str,
    ) -> Result<Vec<PatentRecord>, LensError> {
        let request = LensSearchRequest {
            query,
            size,
            include: INCLUDE_FIELDS,
        };

        debug!(query, size, "posting Lens search");
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LensError::Api { status, body });
        }

        let parsed: LensSearchResponse = response
            .json()
            .await
            .map_err(|e| LensError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(documents = parsed.data.len(), "Lens search complete");
        Ok(assemble_records(
            parsed.data,
            my_invention,
            &self.picker,
            &self.scorer,
        ))
    }
}

impl<P: ClaimPicker, S: TextSimilarity> SearchProvider for LensClient<P, S> {
    type Error = LensError;

    fn search(&self, query: &str, size: usize) -> Result<Vec<PatentRecord>, Self::Error> {
        // Blocking wrapper for the async search; no invention text, so
        // scores stay 0 and the API's order is preserved
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LensError::Http(format!("Failed to create runtime: {}", e)))?;
        runtime.block_on(self.search_lens(query, size, ""))
    }
}

/// Reshape Lens documents into scored, sorted records.
pub(crate) fn assemble_records(
    docs: Vec<LensDocument>,
    my_invention: &str,
    picker: &impl ClaimPicker,
    scorer: &impl TextSimilarity,
) -> Vec<PatentRecord> {
    let mut records: Vec<PatentRecord> = docs
        .into_iter()
        .map(|doc| {
            let claims = doc.claims.unwrap_or_default();
            let picked = picker.pick(&claims);

            let mut elements = split_claim_elements(&picked);
            elements.truncate(MAX_RECORD_ELEMENTS);

            let score = if my_invention.is_empty() {
                0
            } else {
                scorer.score(my_invention, &picked)
            };

            let mut record = PatentRecord::new(doc.lens_id, doc.title.as_deref().unwrap_or(""));
            record.date_published = doc.date_published;
            record.score = score;
            record.elements = elements;
            record
        })
        .collect();

    // Stable sort keeps the API's order among equal scores
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lens_id: &str, claims: &[&str]) -> LensDocument {
        LensDocument {
            lens_id: lens_id.to_string(),
            title: Some(format!("Title for {}", lens_id)),
            date_published: Some("2020-01-01".to_string()),
            claims: Some(claims.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "total": 2,
            "data": [
                {
                    "lens_id": "084-132-315-942-X",
                    "title": "Gas barrier film",
                    "date_published": "2019-05-02",
                    "claims": ["A film comprising a substrate and a barrier layer"]
                },
                {
                    "lens_id": "121-333-444-555-Y"
                }
            ]
        }"#;

        let parsed: LensSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[0].lens_id, "084-132-315-942-X");
        assert!(parsed.data[1].title.is_none());
        assert!(parsed.data[1].claims.is_none());
    }

    #[test]
    fn test_request_serialization() {
        let request = LensSearchRequest {
            query: "gas barrier",
            size: 10,
            include: INCLUDE_FIELDS,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["query"], "gas barrier");
        assert_eq!(value["size"], 10);
        assert_eq!(value["include"][0], "lens_id");
        assert_eq!(value["include"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_assemble_scores_and_sorts() {
        let docs = vec![
            doc("low", &["a pump housing comprising an impeller and a seal"]),
            doc(
                "high",
                &["a coated film comprising a gas barrier layer, wherein the layer contains oxide"],
            ),
        ];

        let records = assemble_records(
            docs,
            "a coated film comprising a gas barrier layer, wherein the layer contains oxide",
            &HeuristicClaimPicker,
            &TokenSetScorer,
        );

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "high");
        assert_eq!(records[0].score, 100);
        assert!(records[0].score >= records[1].score);
    }

    #[test]
    fn test_assemble_empty_invention_keeps_order_and_zero_scores() {
        let docs = vec![
            doc("first", &["a widget comprising a frame and a wheel"]),
            doc("second", &["a gadget comprising a spring and a lever"]),
        ];

        let records = assemble_records(docs, "", &HeuristicClaimPicker, &TokenSetScorer);

        assert_eq!(records[0].id, "first");
        assert_eq!(records[1].id, "second");
        assert!(records.iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_assemble_caps_elements() {
        let long_claim = (0..12)
            .map(|i| format!("a part number {}", i))
            .collect::<Vec<_>>()
            .join("; ");
        let docs = vec![doc("many", &[long_claim.as_str()])];

        let records = assemble_records(docs, "", &HeuristicClaimPicker, &TokenSetScorer);
        assert_eq!(records[0].elements.len(), MAX_RECORD_ELEMENTS);
    }

    #[test]
    fn test_assemble_document_without_claims() {
        let docs = vec![LensDocument {
            lens_id: "bare".to_string(),
            title: None,
            date_published: None,
            claims: None,
        }];

        let records = assemble_records(docs, "an invention", &HeuristicClaimPicker, &TokenSetScorer);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert!(records[0].elements.is_empty());
        assert_eq!(records[0].score, 0);
    }
}
