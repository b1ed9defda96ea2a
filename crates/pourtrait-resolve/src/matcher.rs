//! Single-catalog matching with a two-tier confidence policy.

use pourtrait_model::{Confidence, Matchable};

use crate::normalize::normalize;
use crate::score::similarity;

/// Score floors separating the match outcomes.
///
/// - At or above `exact`: [`Confidence::Exact`]
/// - `corrected` to `exact`: [`Confidence::Corrected`]
/// - Below `corrected`: no match
///
/// Deployments have disagreed about where the corrected floor sits, so
/// the floors are plain fields rather than buried literals; the defaults
/// are the canonical 0.80 and 0.65.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// Minimum score for an exact-tier match (default: 0.80).
    pub exact: f64,
    /// Minimum score for a corrected-tier match (default: 0.65).
    pub corrected: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            exact: 0.80,
            corrected: 0.65,
        }
    }
}

impl MatchThresholds {
    /// Categorizes a similarity score into a confidence tier.
    ///
    /// Returns `None` if the score is below the corrected floor.
    #[must_use]
    pub fn classify(&self, score: f64) -> Option<Confidence> {
        if score >= self.exact {
            Some(Confidence::Exact)
        } else if score >= self.corrected {
            Some(Confidence::Corrected)
        } else {
            None
        }
    }
}

/// A catalog entry that claimed an input line.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMatch<'a, M> {
    pub entry: &'a M,
    pub confidence: Confidence,
    /// Blended similarity of the fuzzy pass; 1.0 for name-equality hits.
    pub score: f64,
}

/// Finds the entry for `raw` in one catalog, if any clears the floors.
///
/// The exact pass compares the case-folded raw line against each primary
/// name and returns without scoring anything else on a hit. The fuzzy
/// pass scores the normalized line against each entry's normalized
/// primary-plus-secondary text and keeps the best score, first seen
/// winning ties, then classifies it against the thresholds.
pub fn match_catalog<'a, M: Matchable>(
    raw: &str,
    entries: &'a [M],
    thresholds: MatchThresholds,
) -> Option<CatalogMatch<'a, M>> {
    let folded = raw.to_lowercase();
    for entry in entries {
        if entry.primary_name().to_lowercase() == folded {
            return Some(CatalogMatch {
                entry,
                confidence: Confidence::Exact,
                score: 1.0,
            });
        }
    }

    let needle = normalize(raw);
    let mut best: Option<(&M, f64)> = None;
    for entry in entries {
        let score = similarity(&needle, &comparison_text(entry));
        match best {
            Some((_, leader)) if score <= leader => {}
            _ => best = Some((entry, score)),
        }
    }

    let (entry, score) = best?;
    let confidence = thresholds.classify(score)?;
    Some(CatalogMatch {
        entry,
        confidence,
        score,
    })
}

/// Normalized comparison text for an entry: primary name, then the
/// secondary field when present, joined by a space.
fn comparison_text<M: Matchable>(entry: &M) -> String {
    match entry.secondary_name() {
        Some(secondary) => normalize(&format!("{} {}", entry.primary_name(), secondary)),
        None => normalize(entry.primary_name()),
    }
}
