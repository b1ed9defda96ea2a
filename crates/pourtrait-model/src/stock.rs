use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entry::{BeerEntry, SpiritEntry, WineEntry};
use crate::record::ResolutionRecord;

/// One resolved batch grouped for presentation.
///
/// The three entry lists plus `unknowns` partition the batch: every input
/// record contributes to exactly one list, preserving input order within
/// each. Unknowns keep the full record so their raw text survives into
/// posters and exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedStock {
    pub beers: Vec<BeerEntry>,
    pub wines: Vec<WineEntry>,
    pub spirits: Vec<SpiritEntry>,
    pub unknowns: Vec<ResolutionRecord>,
}

impl GroupedStock {
    /// Records across all four lists.
    pub fn total(&self) -> usize {
        self.beers.len() + self.wines.len() + self.spirits.len() + self.unknowns.len()
    }

    pub fn resolved(&self) -> usize {
        self.total() - self.unknowns.len()
    }
}

/// Sort key for the beer section of a poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeerSort {
    /// Ascending name.
    Name,
    /// Descending abv, entries without an abv last.
    Abv,
    /// Mid-strength entries first, then by name.
    Mid,
}

impl BeerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerSort::Name => "name",
            BeerSort::Abv => "abv",
            BeerSort::Mid => "mid",
        }
    }
}

impl fmt::Display for BeerSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BeerSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(BeerSort::Name),
            "abv" => Ok(BeerSort::Abv),
            "mid" | "mid_strength" => Ok(BeerSort::Mid),
            _ => Err(format!("Unknown beer sort key: {s}")),
        }
    }
}

/// Sort key for the wine section of a poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineSort {
    /// Ascending name.
    Name,
    /// Descending abv, entries without an abv last.
    Abv,
    /// Dry before medium before sweet, then by name.
    Sweetness,
}

impl WineSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            WineSort::Name => "name",
            WineSort::Abv => "abv",
            WineSort::Sweetness => "sweetness",
        }
    }
}

impl fmt::Display for WineSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WineSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(WineSort::Name),
            "abv" => Ok(WineSort::Abv),
            "sweetness" => Ok(WineSort::Sweetness),
            _ => Err(format!("Unknown wine sort key: {s}")),
        }
    }
}

/// Sort key for the spirit section of a poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpiritSort {
    /// Ascending name.
    Name,
    /// Descending abv, entries without an abv last.
    Abv,
    /// Ascending category label, then by name.
    Category,
}

impl SpiritSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpiritSort::Name => "name",
            SpiritSort::Abv => "abv",
            SpiritSort::Category => "category",
        }
    }
}

impl fmt::Display for SpiritSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpiritSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SpiritSort::Name),
            "abv" => Ok(SpiritSort::Abv),
            "category" => Ok(SpiritSort::Category),
            _ => Err(format!("Unknown spirit sort key: {s}")),
        }
    }
}
