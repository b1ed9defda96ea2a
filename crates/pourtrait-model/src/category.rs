use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three drink catalogs a line can resolve into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beer,
    Wine,
    Spirit,
}

impl Category {
    /// Default catalog search order: beer, then wine, then spirit.
    pub const ALL: [Category; 3] = [Category::Beer, Category::Wine, Category::Spirit];

    /// Canonical lowercase label as stored in resolution records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beer => "beer",
            Category::Wine => "wine",
            Category::Spirit => "spirit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beer" | "beers" => Ok(Category::Beer),
            "wine" | "wines" => Ok(Category::Wine),
            "spirit" | "spirits" => Ok(Category::Spirit),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Match quality tier for a resolved line.
///
/// `Exact` covers both the case-insensitive name hit and fuzzy scores at
/// or above the exact floor; `Corrected` marks scores that cleared only
/// the corrected floor. Lines below both floors carry no confidence at
/// all because they carry no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Exact,
    Corrected,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Exact => "exact",
            Confidence::Corrected => "corrected",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
