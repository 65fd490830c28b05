//! Integration tests for the claim-processing pipeline
//!
//! Exercises splitting, normalization, and charting together, the way
//! the provider adapters and the CLI consume them.

use priorart_claims::{
    chart_and_diff, claim_elements, normalize_term, split_claim_elements, MockProvider,
    TokenSetScorer,
};
use priorart_domain::record::{MAX_CHART_ROWS, MAX_DIFF_ENTRIES};
use priorart_domain::{PatentRecord, SearchProvider};

const BARRIER_CLAIM: &str = "A gas barrier film comprising a polymer substrate, \
    and an inorganic oxide layer on the substrate; wherein the oxide layer \
    is deposited by sputtering, and the film transmits visible light";

#[test]
fn split_then_normalize_matches_claim_elements() {
    let manual: Vec<String> = split_claim_elements(BARRIER_CLAIM)
        .iter()
        .map(|t| normalize_term(t))
        .collect();

    assert_eq!(manual, claim_elements(BARRIER_CLAIM));
    assert!(!manual.is_empty());
}

#[test]
fn chart_of_identical_claim_is_exact_match() {
    let rows = chart_and_diff(
        BARRIER_CLAIM,
        &[BARRIER_CLAIM.to_string()],
        &TokenSetScorer,
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sim, 100);
    assert!(rows[0].missing.is_empty());
    assert!(rows[0].extra.is_empty());
    assert_eq!(
        rows[0].overlap.len(),
        claim_elements(BARRIER_CLAIM)
            .into_iter()
            .collect::<std::collections::BTreeSet<_>>()
            .len()
    );
}

#[test]
fn chart_ranks_closer_prior_art_higher() {
    let close = "A gas barrier film comprising a polymer substrate, \
        and an inorganic oxide layer on the substrate";
    let far = "A bicycle brake lever comprising a cast aluminum body, \
        and a pivot pin through the body";

    let rows = chart_and_diff(
        BARRIER_CLAIM,
        &[far.to_string(), close.to_string()],
        &TokenSetScorer,
    );

    assert_eq!(rows.len(), 2);
    assert!(rows[0].sim >= rows[1].sim);
    // The closer claim shares elements; the far one shares none
    assert!(!rows[0].overlap.is_empty());
    assert!(rows[1].overlap.is_empty());
}

#[test]
fn chart_output_is_bounded() {
    let priors: Vec<String> = (0..20)
        .map(|i| format!("a device number {i} comprising a part number {i}, and a cover"))
        .collect();

    let rows = chart_and_diff(BARRIER_CLAIM, &priors, &TokenSetScorer);

    assert!(rows.len() <= MAX_CHART_ROWS);
    for row in &rows {
        assert!(row.overlap.len() <= MAX_DIFF_ENTRIES);
        assert!(row.missing.len() <= MAX_DIFF_ENTRIES);
        assert!(row.extra.len() <= MAX_DIFF_ENTRIES);
    }
}

#[test]
fn mock_provider_feeds_chart() {
    // Records as a provider would build them, charted against a claim
    let mut record = PatentRecord::new("prior-1", "Barrier film");
    record.elements = split_claim_elements(BARRIER_CLAIM);

    let provider = MockProvider::new(vec![record]);
    let records = provider.search("gas barrier", 10).unwrap();

    let prior_claims: Vec<String> = records
        .iter()
        .map(|r| r.elements.join("; "))
        .collect();
    let rows = chart_and_diff(BARRIER_CLAIM, &prior_claims, &TokenSetScorer);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sim, 100);
}
