//! Representative-claim selection

use once_cell::sync::Lazy;
use priorart_domain::ClaimPicker;
use regex::Regex;

/// Wording that suggests a claim is independent.
static INDEPENDENT_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)independent|claim\s*1").unwrap());

/// Picks the first claim that looks independent.
///
/// A claim qualifies when its text mentions "independent" or "claim 1",
/// or when it does not contain "dependent" at all. Falls back to the
/// first claim in the list, then to the empty string.
///
/// Matching on the absence of "dependent" is a weak proxy for actual
/// claim independence and can misclassify; callers depend on the
/// [`ClaimPicker`] trait so this heuristic can be swapped out.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClaimPicker;

impl ClaimPicker for HeuristicClaimPicker {
    fn pick(&self, claims: &[String]) -> String {
        for c in claims {
            if INDEPENDENT_HINT.is_match(c) || !c.to_lowercase().contains("dependent") {
                return c.clone();
            }
        }
        claims.first().cloned().unwrap_or_default()
    }
}
