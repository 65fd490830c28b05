//! Token-set similarity scoring

use priorart_domain::TextSimilarity;
use std::collections::BTreeSet;

/// Token-set ratio scorer.
///
/// Splits both inputs into whitespace token sets and scores the
/// normalized edit similarity of the sorted set combinations, so word
/// order and repetition do not matter. Identical inputs score 100;
/// an empty input scores 0 against anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetScorer;

impl TextSimilarity for TokenSetScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        token_set_ratio(a, b)
    }
}

/// Score two texts on their whitespace token sets.
///
/// Builds the sorted intersection and the two sorted one-sided
/// differences, then takes the best normalized Levenshtein similarity
/// among (intersection vs intersection + a-only), (intersection vs
/// intersection + b-only), and the two combined strings. A large shared
/// token set therefore dominates unshared trailing tokens.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0;
    }

    let intersection = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let combined_a = concat_tokens(&intersection, &only_a);
    let combined_b = concat_tokens(&intersection, &only_b);

    let best = [
        strsim::normalized_levenshtein(&intersection, &combined_a),
        strsim::normalized_levenshtein(&intersection, &combined_b),
        strsim::normalized_levenshtein(&combined_a, &combined_b),
    ]
    .into_iter()
    .fold(0.0_f64, f64::max);

    (best * 100.0).round() as u8
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat_tokens(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (_, true) => base.to_string(),
        (true, false) => rest.to_string(),
        (false, false) => format!("{} {}", base, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_100() {
        assert_eq!(token_set_ratio("a b c d e f", "a b c d e f"), 100);
    }

    #[test]
    fn test_word_order_does_not_matter() {
        assert_eq!(token_set_ratio("barrier gas film", "film gas barrier"), 100);
    }

    #[test]
    fn test_repetition_does_not_matter() {
        assert_eq!(token_set_ratio("layer layer layer film", "film layer"), 100);
    }

    #[test]
    fn test_disjoint_texts_score_low() {
        let score = token_set_ratio("alpha beta gamma", "delta epsilon zeta");
        assert!(score < 50, "disjoint sets scored {}", score);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(token_set_ratio("", ""), 0);
        assert_eq!(token_set_ratio("", "something here"), 0);
        assert_eq!(token_set_ratio("something here", ""), 0);
    }

    #[test]
    fn test_subset_scores_high() {
        // Shared tokens dominate: one side is a strict subset
        let score = token_set_ratio("a barrier film", "a barrier film with two layers");
        assert!(score >= 50, "subset scored only {}", score);
    }

    #[test]
    fn test_scorer_trait_delegates() {
        let scorer = TokenSetScorer;
        assert_eq!(scorer.score("same text", "same text"), 100);
    }
}
