//! Shared entry formatting for the poster renderers.

use pourtrait_model::{BeerEntry, SpiritEntry, WineEntry};

/// Joins the non-empty display details of a beer, comma separated.
pub(crate) fn beer_details(entry: &BeerEntry) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(brewery) = &entry.brewery {
        parts.push(brewery.clone());
    }
    if let Some(style) = &entry.style {
        parts.push(style.clone());
    }
    if let Some(abv) = entry.abv {
        parts.push(format_abv(abv));
    }
    if entry.mid_strength {
        parts.push("mid-strength".to_string());
    }
    parts.join(", ")
}

/// Joins the non-empty display details of a wine, comma separated.
pub(crate) fn wine_details(entry: &WineEntry) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(producer) = &entry.producer {
        parts.push(producer.clone());
    }
    if let Some(varietal) = &entry.varietal {
        parts.push(varietal.clone());
    }
    if let Some(vintage) = entry.vintage {
        parts.push(vintage.to_string());
    }
    if let Some(abv) = entry.abv {
        parts.push(format_abv(abv));
    }
    parts.join(", ")
}

/// Joins the non-empty display details of a spirit, comma separated.
pub(crate) fn spirit_details(entry: &SpiritEntry) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(brand) = &entry.brand {
        parts.push(brand.clone());
    }
    if let Some(category) = &entry.category {
        parts.push(category.clone());
    }
    if let Some(abv) = entry.abv {
        parts.push(format_abv(abv));
    }
    parts.join(", ")
}

fn format_abv(abv: f64) -> String {
    format!("{abv}% abv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_skip_missing_fields() {
        let entry = BeerEntry {
            id: 1,
            name: "Mystery Keg".to_string(),
            brewery: None,
            style: Some("Lager".to_string()),
            abv: None,
            country: None,
            mid_strength: false,
            notes: None,
        };
        assert_eq!(beer_details(&entry), "Lager");
    }

    #[test]
    fn abv_renders_without_trailing_zero() {
        let mut entry = SpiritEntry {
            id: 1,
            name: "House Vodka".to_string(),
            brand: None,
            category: None,
            subtype: None,
            abv: Some(40.0),
            country: None,
            flavor_notes: None,
            aging: None,
        };
        assert_eq!(spirit_details(&entry), "40% abv");
        entry.abv = Some(43.1);
        assert_eq!(spirit_details(&entry), "43.1% abv");
    }

    #[test]
    fn mid_strength_flag_shows_in_details() {
        let entry = BeerEntry {
            id: 1,
            name: "Guinness Draught".to_string(),
            brewery: Some("Guinness".to_string()),
            style: Some("Stout".to_string()),
            abv: Some(4.2),
            country: Some("Ireland".to_string()),
            mid_strength: true,
            notes: None,
        };
        assert_eq!(beer_details(&entry), "Guinness, Stout, 4.2% abv, mid-strength");
    }
}
