use serde::{Deserialize, Serialize};

use crate::category::{Category, Confidence};

/// Identity of the catalog entry a line resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedEntry {
    pub category: Category,
    /// Id within the category's catalog, not globally unique.
    pub entry_id: u32,
    pub confidence: Confidence,
}

/// Outcome of resolving one submitted line.
///
/// The raw text survives verbatim whether or not the line matched, so an
/// unresolved line can still be shown and exported. `matched` is present
/// exactly when a catalog claimed the line: a record cannot carry an entry
/// id without its category, nor a confidence without a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub raw_text: String,
    pub matched: Option<MatchedEntry>,
}

impl ResolutionRecord {
    /// Record for a line no catalog claimed.
    pub fn unresolved(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            matched: None,
        }
    }

    /// Record for a line resolved to a catalog entry.
    pub fn resolved(raw_text: impl Into<String>, matched: MatchedEntry) -> Self {
        Self {
            raw_text: raw_text.into(),
            matched: Some(matched),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.matched.is_some()
    }
}
