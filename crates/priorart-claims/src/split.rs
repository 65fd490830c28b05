//! Claim splitting heuristics

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum word count for a fragment to count as a claim element.
pub const MIN_ELEMENT_WORDS: usize = 3;

/// Separator phrases that delimit claim elements, case-insensitive.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:;|, and |, or | comprising | wherein | wherein the | including )")
        .unwrap()
});

/// Characters stripped from both ends of each fragment.
const FRAGMENT_TRIM: &[char] = &[' ', ',', ';', '.'];

/// Split a claim into coarse elements.
///
/// Splits on the fixed separator set, trims punctuation from each
/// fragment, and keeps only fragments with at least
/// [`MIN_ELEMENT_WORDS`] whitespace-separated words. Output follows
/// source order; empty input yields an empty vector.
///
/// # Examples
///
/// ```
/// use priorart_claims::split_claim_elements;
///
/// let elems =
///     split_claim_elements("A widget comprising a frame and a wheel, wherein the frame is metal");
/// assert_eq!(elems, vec!["a frame and a wheel", "the frame is metal"]);
/// ```
pub fn split_claim_elements(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .map(|p| p.trim_matches(FRAGMENT_TRIM))
        .filter(|p| p.split_whitespace().count() >= MIN_ELEMENT_WORDS)
        .map(str::to_string)
        .collect()
}
