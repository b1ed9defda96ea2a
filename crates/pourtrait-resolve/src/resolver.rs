//! Line resolution across the three catalogs.

use pourtrait_model::{Catalogs, Category, MatchedEntry, Matchable, ResolutionRecord};

use crate::hint::hint_order;
use crate::matcher::{MatchThresholds, match_catalog};
use crate::normalize::normalize;

/// Resolves free-text lines against a catalog snapshot.
///
/// The resolver holds nothing but the borrowed snapshot and the floors,
/// so the same line against the same snapshot always yields the same
/// record, and one snapshot can back any number of resolvers.
#[derive(Debug, Clone, Copy)]
pub struct DrinkResolver<'a> {
    catalogs: &'a Catalogs,
    thresholds: MatchThresholds,
}

impl<'a> DrinkResolver<'a> {
    /// Creates a resolver over a snapshot with the default floors.
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self {
            catalogs,
            thresholds: MatchThresholds::default(),
        }
    }

    /// Replaces the confidence floors.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: MatchThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Resolves one line to a record.
    ///
    /// Catalogs are tried in hinted order and the first one that clears
    /// the corrected floor claims the line, even when a later catalog
    /// would have scored higher. A line no catalog claims comes back as
    /// an unresolved record carrying the raw text.
    pub fn resolve(&self, line: &str) -> ResolutionRecord {
        for category in hint_order(&normalize(line)) {
            let claimed = match category {
                Category::Beer => self.try_catalog(line, category, &self.catalogs.beers),
                Category::Wine => self.try_catalog(line, category, &self.catalogs.wines),
                Category::Spirit => self.try_catalog(line, category, &self.catalogs.spirits),
            };
            if let Some(matched) = claimed {
                return ResolutionRecord::resolved(line, matched);
            }
        }
        ResolutionRecord::unresolved(line)
    }

    /// Resolves a batch of lines, one record per line, in input order.
    pub fn resolve_batch<I, S>(&self, lines: I) -> Vec<ResolutionRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.resolve(line.as_ref()))
            .collect()
    }

    fn try_catalog<M: Matchable>(
        &self,
        line: &str,
        category: Category,
        entries: &[M],
    ) -> Option<MatchedEntry> {
        match_catalog(line, entries, self.thresholds).map(|hit| MatchedEntry {
            category,
            entry_id: hit.entry.id(),
            confidence: hit.confidence,
        })
    }
}
