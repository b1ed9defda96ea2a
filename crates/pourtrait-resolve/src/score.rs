//! Blended similarity scoring.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Weight of the character-level sequence ratio in the blend.
pub const RATIO_WEIGHT: f64 = 0.7;
/// Weight of the whole-token overlap in the blend.
pub const OVERLAP_WEIGHT: f64 = 0.3;

/// Blended similarity between two normalized strings, in `[0.0, 1.0]`.
///
/// The sequence part rewards near-miss spellings at the character level;
/// the overlap part rewards shared whole words regardless of order. A
/// misspelled word contributes nothing to the overlap, so a single typo
/// still scores well on the blend while unrelated text does not.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    RATIO_WEIGHT * sequence_ratio(a, b) + OVERLAP_WEIGHT * token_overlap(a, b)
}

/// Normalized indel ratio: twice the longest common subsequence length
/// over the combined length, in `[0.0, 1.0]`.
#[must_use]
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    fuzz::ratio(a.chars(), b.chars())
}

/// Jaccard overlap of whitespace-delimited token sets, in `[0.0, 1.0]`.
///
/// The denominator is floored at one, so two empty strings score zero
/// instead of dividing by zero.
#[must_use]
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let a_tokens: BTreeSet<&str> = a.split_whitespace().collect();
    let b_tokens: BTreeSet<&str> = b.split_whitespace().collect();
    let shared = a_tokens.intersection(&b_tokens).count();
    let union = a_tokens.union(&b_tokens).count();
    shared as f64 / union.max(1) as f64
}
