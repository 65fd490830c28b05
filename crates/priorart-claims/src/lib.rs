//! Priorart Claim Processing Layer
//!
//! Implementations of the text capabilities from `priorart-domain`:
//! claim splitting, term normalization, representative-claim selection,
//! and token-set similarity scoring, plus the claim-chart comparator
//! built on top of them.
//!
//! # Capabilities
//!
//! - `TokenSetScorer`: `TextSimilarity` via token-set ratio
//! - `HeuristicClaimPicker`: `ClaimPicker` via independence wording
//! - `MockProvider`: deterministic `SearchProvider` for testing
//!
//! # Examples
//!
//! ```
//! use priorart_claims::{chart_and_diff, TokenSetScorer};
//!
//! let rows = chart_and_diff(
//!     "a b c comprising d e f",
//!     &["a b c comprising d e f".to_string()],
//!     &TokenSetScorer,
//! );
//! assert_eq!(rows[0].sim, 100);
//! ```

#![warn(missing_docs)]

pub mod chart;
pub mod normalize;
pub mod picker;
pub mod scorer;
pub mod split;

use priorart_domain::traits::SearchProvider;
use priorart_domain::PatentRecord;
use std::sync::{Arc, Mutex};

pub use chart::chart_and_diff;
pub use normalize::{claim_elements, normalize_term};
pub use picker::HeuristicClaimPicker;
pub use scorer::{token_set_ratio, TokenSetScorer};
pub use split::split_claim_elements;

/// Deterministic search provider for testing
///
/// Returns pre-configured records without making any network calls.
///
/// # Examples
///
/// ```
/// use priorart_claims::MockProvider;
/// use priorart_domain::{PatentRecord, SearchProvider};
///
/// let provider = MockProvider::new(vec![PatentRecord::new("doc-1", "A film")]);
/// let records = provider.search("any query", 10).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(provider.call_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    records: Vec<PatentRecord>,
    error: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that returns the given records for every query
    pub fn new(records: Vec<PatentRecord>) -> Self {
        Self {
            records,
            error: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a provider that fails every search with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            error: Some(message.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `search` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl SearchProvider for MockProvider {
    type Error = String;

    fn search(&self, _query: &str, size: usize) -> Result<Vec<PatentRecord>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(message) = &self.error {
            return Err(message.clone());
        }

        Ok(self.records.iter().take(size).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_returns_records() {
        let provider = MockProvider::new(vec![
            PatentRecord::new("doc-1", "First"),
            PatentRecord::new("doc-2", "Second"),
        ]);

        let records = provider.search("q", 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "doc-1");
    }

    #[test]
    fn test_mock_provider_honors_size() {
        let provider = MockProvider::new(vec![
            PatentRecord::new("doc-1", "First"),
            PatentRecord::new("doc-2", "Second"),
        ]);

        let records = provider.search("q", 1).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_mock_provider_failure() {
        let provider = MockProvider::failing("boom");
        let err = provider.search("q", 10).unwrap_err();
        assert_eq!(err, "boom");
    }

    #[test]
    fn test_mock_provider_counts_calls() {
        let provider = MockProvider::new(Vec::new());
        assert_eq!(provider.call_count(), 0);

        provider.search("a", 5).unwrap();
        provider.search("b", 5).unwrap();
        assert_eq!(provider.call_count(), 2);

        // Clones share the counter
        let clone = provider.clone();
        clone.search("c", 5).unwrap();
        assert_eq!(provider.call_count(), 3);
    }
}
