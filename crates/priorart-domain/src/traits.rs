//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between domain logic and the
//! concrete text-processing and provider integrations. Implementations
//! live in other crates.

use crate::record::PatentRecord;

/// Trait for fuzzy text similarity scoring
///
/// Implemented by `priorart-claims` (token-set ratio). The concrete
/// algorithm is swappable; callers only rely on the 0-100 range.
pub trait TextSimilarity {
    /// Score the similarity of two texts as an integer from 0 (disjoint)
    /// to 100 (identical).
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Trait for selecting the representative claim from a document's claims
///
/// The standard implementation is a heuristic (it keys on wording such as
/// "independent" or "claim 1" and on the absence of "dependent"), which is
/// a weak proxy for actual claim independence. This seam exists so the
/// heuristic can be replaced without touching call sites.
pub trait ClaimPicker {
    /// Pick one claim from `claims`; empty string when the list is empty.
    fn pick(&self, claims: &[String]) -> String;
}

/// Trait for patent search providers
///
/// Implemented by the provider adapters (`priorart-lens`, `priorart-ops`).
/// One contract for both integrations, so consumers can be tested against
/// fakes.
pub trait SearchProvider {
    /// Error type for search operations
    type Error;

    /// Run a search and return at most `size` simplified records.
    fn search(&self, query: &str, size: usize) -> Result<Vec<PatentRecord>, Self::Error>;
}
