//! Claim chart construction

use crate::normalize::claim_elements;
use priorart_domain::record::{MAX_CHART_ROWS, MAX_DIFF_ENTRIES};
use priorart_domain::{ComparisonRow, TextSimilarity};
use std::collections::BTreeSet;

/// Compare a claim against a list of prior-art claims.
///
/// The user's claim is reduced to its normalized element set once. Each
/// prior claim gets a [`ComparisonRow`] holding the shared elements
/// (`overlap`), the user's elements the prior claim lacks (`missing`),
/// and the prior claim's elements the user's claim lacks (`extra`), each
/// list capped at [`MAX_DIFF_ENTRIES`]. The similarity score is computed
/// by `scorer` over the joined element sets.
///
/// Returns at most [`MAX_CHART_ROWS`] rows, highest score first; ties
/// keep their input order. An empty prior list yields an empty result.
///
/// # Examples
///
/// ```
/// use priorart_claims::{chart_and_diff, TokenSetScorer};
///
/// let claim = "a b c comprising d e f";
/// let rows = chart_and_diff(claim, &[claim.to_string()], &TokenSetScorer);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].sim, 100);
/// assert!(rows[0].missing.is_empty());
/// assert!(rows[0].extra.is_empty());
/// ```
pub fn chart_and_diff(
    my_claim: &str,
    prior_claims: &[String],
    scorer: &impl TextSimilarity,
) -> Vec<ComparisonRow> {
    let my_elems: BTreeSet<String> = claim_elements(my_claim).into_iter().collect();
    let my_joined = joined(&my_elems);

    let mut rows = Vec::with_capacity(prior_claims.len());
    for pc in prior_claims {
        let prior_elems: BTreeSet<String> = claim_elements(pc).into_iter().collect();

        let overlap = capped(my_elems.intersection(&prior_elems));
        let missing = capped(my_elems.difference(&prior_elems));
        let extra = capped(prior_elems.difference(&my_elems));
        let sim = scorer.score(&my_joined, &joined(&prior_elems));

        rows.push(ComparisonRow {
            sim,
            overlap,
            missing,
            extra,
        });
    }

    // Stable sort keeps input order among equal scores
    rows.sort_by(|a, b| b.sim.cmp(&a.sim));
    rows.truncate(MAX_CHART_ROWS);
    rows
}

fn joined(elems: &BTreeSet<String>) -> String {
    elems.iter().cloned().collect::<Vec<_>>().join(" ")
}

fn capped<'a>(elems: impl Iterator<Item = &'a String>) -> Vec<String> {
    elems.take(MAX_DIFF_ENTRIES).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenSetScorer;

    fn prior(claims: &[&str]) -> Vec<String> {
        claims.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_claim_scores_100() {
        let claim = "a first barrier layer comprising silicon oxide, wherein the layer is transparent";
        let rows = chart_and_diff(claim, &prior(&[claim]), &TokenSetScorer);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.sim, 100);
        assert!(row.missing.is_empty());
        assert!(row.extra.is_empty());

        let expected: BTreeSet<String> = claim_elements(claim).into_iter().collect();
        let overlap: BTreeSet<String> = row.overlap.iter().cloned().collect();
        assert_eq!(overlap, expected);
    }

    #[test]
    fn test_empty_prior_list() {
        let rows = chart_and_diff("a b c comprising d e f", &[], &TokenSetScorer);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_at_most_five_rows_sorted_descending() {
        let my_claim = "a coated film comprising a gas barrier layer, wherein the layer contains aluminum oxide";
        let priors = prior(&[
            "a coated film comprising a gas barrier layer, wherein the layer contains aluminum oxide",
            "a coated film comprising a gas barrier layer",
            "an adhesive tape comprising a backing layer",
            "a solar panel wherein the frame is extruded aluminum",
            "a packaging laminate comprising paperboard and polymer",
            "a lithium battery separator comprising a ceramic coating",
            "a window pane wherein the glazing is double layered",
        ]);

        let rows = chart_and_diff(my_claim, &priors, &TokenSetScorer);
        assert_eq!(rows.len(), 5);
        for pair in rows.windows(2) {
            assert!(pair[0].sim >= pair[1].sim);
        }
        assert_eq!(rows[0].sim, 100);
    }

    #[test]
    fn test_diff_lists_are_capped() {
        // Twelve elements a side, all distinct between the claims
        let my_claim: String = (0..12)
            .map(|i| format!("my element number {i}"))
            .collect::<Vec<_>>()
            .join("; ");
        let prior_claim: String = (0..12)
            .map(|i| format!("their element number {i}"))
            .collect::<Vec<_>>()
            .join("; ");

        let rows = chart_and_diff(&my_claim, &prior(&[prior_claim.as_str()]), &TokenSetScorer);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].overlap.len() <= MAX_DIFF_ENTRIES);
        assert_eq!(rows[0].missing.len(), MAX_DIFF_ENTRIES);
        assert_eq!(rows[0].extra.len(), MAX_DIFF_ENTRIES);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Two disjoint priors score equally against the claim
        let my_claim = "a widget comprising a sensor array";
        let priors = prior(&[
            "one two three; four five six",
            "one two three; four five six",
        ]);

        let rows = chart_and_diff(my_claim, &priors, &TokenSetScorer);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sim, rows[1].sim);
    }
}
