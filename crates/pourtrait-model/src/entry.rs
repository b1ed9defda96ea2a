use serde::{Deserialize, Serialize};

/// A beer catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerEntry {
    pub id: u32,
    pub name: String,
    pub brewery: Option<String>,
    pub style: Option<String>,
    pub abv: Option<f64>,
    pub country: Option<String>,
    #[serde(default)]
    pub mid_strength: bool,
    pub notes: Option<String>,
}

/// A wine catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineEntry {
    pub id: u32,
    pub name: String,
    pub producer: Option<String>,
    pub varietal: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub abv: Option<f64>,
    /// Free-form label; the sorter recognizes "dry", "medium" and "sweet".
    pub sweetness: Option<String>,
    pub vintage: Option<i32>,
    pub notes: Option<String>,
}

/// A spirit catalog row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiritEntry {
    pub id: u32,
    pub name: String,
    pub brand: Option<String>,
    /// Spirit family label such as "Gin" or "Whisky".
    pub category: Option<String>,
    pub subtype: Option<String>,
    pub abv: Option<f64>,
    pub country: Option<String>,
    pub flavor_notes: Option<String>,
    pub aging: Option<String>,
}

/// What the matcher needs from a catalog entry, regardless of category.
///
/// The exact pass compares against [`primary_name`](Matchable::primary_name)
/// alone; the fuzzy pass scores against primary and secondary joined with a
/// space, treating an absent secondary as empty.
pub trait Matchable {
    /// Identifier unique within the entry's own catalog.
    fn id(&self) -> u32;
    /// Display name and exact-pass comparison target.
    fn primary_name(&self) -> &str;
    /// Disambiguating field blended into the fuzzy comparison text.
    fn secondary_name(&self) -> Option<&str>;
}

impl Matchable for BeerEntry {
    fn id(&self) -> u32 {
        self.id
    }

    fn primary_name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> Option<&str> {
        None
    }
}

impl Matchable for WineEntry {
    fn id(&self) -> u32 {
        self.id
    }

    fn primary_name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> Option<&str> {
        self.producer.as_deref()
    }
}

impl Matchable for SpiritEntry {
    fn id(&self) -> u32 {
        self.id
    }

    fn primary_name(&self) -> &str {
        &self.name
    }

    fn secondary_name(&self) -> Option<&str> {
        self.brand.as_deref()
    }
}
