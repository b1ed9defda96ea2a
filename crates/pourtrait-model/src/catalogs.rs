use serde::{Deserialize, Serialize};

use crate::entry::{BeerEntry, SpiritEntry, WineEntry};

/// Read-only snapshot of the three catalogs used for one resolution run.
///
/// Entry ids are unique per category, not across the snapshot, so lookups
/// always pair an id with its category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogs {
    pub beers: Vec<BeerEntry>,
    pub wines: Vec<WineEntry>,
    pub spirits: Vec<SpiritEntry>,
}

impl Catalogs {
    pub fn beer(&self, id: u32) -> Option<&BeerEntry> {
        self.beers.iter().find(|entry| entry.id == id)
    }

    pub fn wine(&self, id: u32) -> Option<&WineEntry> {
        self.wines.iter().find(|entry| entry.id == id)
    }

    pub fn spirit(&self, id: u32) -> Option<&SpiritEntry> {
        self.spirits.iter().find(|entry| entry.id == id)
    }

    /// Total entry count across the three categories.
    pub fn len(&self) -> usize {
        self.beers.len() + self.wines.len() + self.spirits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
