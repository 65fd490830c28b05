//! Term normalization for claim comparison

use crate::split::split_claim_elements;
use once_cell::sync::Lazy;
use regex::Regex;

/// Anything outside the retained character set becomes a space.
static NON_TERM_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9 \-_/]").unwrap());

/// Runs of whitespace collapse to a single space.
static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a term for comparison.
///
/// Lowercases, replaces characters outside `[a-z0-9 \-_/]` with spaces,
/// collapses whitespace runs, and trims. Total over all inputs and
/// idempotent: normalizing an already-normalized string returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use priorart_claims::normalize_term;
///
/// assert_eq!(normalize_term("  The Frame (metal)!  "), "the frame metal");
/// ```
pub fn normalize_term(s: &str) -> String {
    let lower = s.to_lowercase();
    let replaced = NON_TERM_CHARS.replace_all(&lower, " ");
    let collapsed = WHITESPACE_RUNS.replace_all(&replaced, " ");
    collapsed.trim().to_string()
}

/// Split a claim into normalized elements.
///
/// Combines [`split_claim_elements`] with [`normalize_term`] on each
/// retained fragment.
pub fn claim_elements(claim_text: &str) -> Vec<String> {
    split_claim_elements(claim_text)
        .iter()
        .map(|t| normalize_term(t))
        .collect()
}
