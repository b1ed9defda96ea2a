//! Deterministic per-category ordering for posters.

use std::cmp::Ordering;

use pourtrait_model::{
    BeerEntry, BeerSort, GroupedStock, SpiritEntry, SpiritSort, WineEntry, WineSort,
};

/// Returns the beers reordered by `key`.
///
/// Every sort here is stable: entries with equal keys keep their input
/// order, so repeated renders of the same stock agree byte for byte.
#[must_use]
pub fn sorted_beers(entries: &[BeerEntry], key: BeerSort) -> Vec<BeerEntry> {
    let mut out = entries.to_vec();
    match key {
        BeerSort::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        BeerSort::Abv => out.sort_by(|a, b| {
            abv_descending(a.abv, b.abv).then_with(|| a.name.cmp(&b.name))
        }),
        BeerSort::Mid => out.sort_by(|a, b| {
            b.mid_strength
                .cmp(&a.mid_strength)
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    out
}

/// Returns the wines reordered by `key`.
#[must_use]
pub fn sorted_wines(entries: &[WineEntry], key: WineSort) -> Vec<WineEntry> {
    let mut out = entries.to_vec();
    match key {
        WineSort::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        WineSort::Abv => out.sort_by(|a, b| {
            abv_descending(a.abv, b.abv).then_with(|| a.name.cmp(&b.name))
        }),
        WineSort::Sweetness => out.sort_by(|a, b| {
            sweetness_rank(a.sweetness.as_deref())
                .cmp(&sweetness_rank(b.sweetness.as_deref()))
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    out
}

/// Returns the spirits reordered by `key`.
#[must_use]
pub fn sorted_spirits(entries: &[SpiritEntry], key: SpiritSort) -> Vec<SpiritEntry> {
    let mut out = entries.to_vec();
    match key {
        SpiritSort::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SpiritSort::Abv => out.sort_by(|a, b| {
            abv_descending(a.abv, b.abv).then_with(|| a.name.cmp(&b.name))
        }),
        SpiritSort::Category => out.sort_by(|a, b| {
            category_label(a)
                .cmp(category_label(b))
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    out
}

/// Applies the three per-category sorts at once; unknowns keep input order.
#[must_use]
pub fn sorted_stock(
    stock: &GroupedStock,
    beers: BeerSort,
    wines: WineSort,
    spirits: SpiritSort,
) -> GroupedStock {
    GroupedStock {
        beers: sorted_beers(&stock.beers, beers),
        wines: sorted_wines(&stock.wines, wines),
        spirits: sorted_spirits(&stock.spirits, spirits),
        unknowns: stock.unknowns.clone(),
    }
}

/// Descending abv with missing values floored below every real one, so
/// entries without an abv always sort last.
fn abv_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(f64::NEG_INFINITY);
    let b = b.unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}

/// Dry before medium before sweet; unrecognized or missing labels count
/// as dry.
fn sweetness_rank(label: Option<&str>) -> u8 {
    match label.map(str::trim) {
        Some(label) if label.eq_ignore_ascii_case("sweet") => 2,
        Some(label) if label.eq_ignore_ascii_case("medium") => 1,
        _ => 0,
    }
}

fn category_label(entry: &SpiritEntry) -> &str {
    entry.category.as_deref().unwrap_or("")
}
