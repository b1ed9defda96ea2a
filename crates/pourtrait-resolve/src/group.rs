//! Grouping resolved records for presentation.

use pourtrait_model::{Catalogs, Category, GroupedStock, ResolutionRecord};

/// Partitions records into per-category entry lists plus unknowns.
///
/// A resolved record contributes a copy of its catalog entry to the
/// matching category list; an unresolved record carries its raw text into
/// `unknowns`. Input order is preserved within every list and each record
/// lands in exactly one of the four. A record whose entry id is no longer
/// in the snapshot goes to `unknowns` rather than disappearing.
#[must_use]
pub fn group_records(records: &[ResolutionRecord], catalogs: &Catalogs) -> GroupedStock {
    let mut stock = GroupedStock::default();
    for record in records {
        let placed = record.matched.is_some_and(|matched| match matched.category {
            Category::Beer => push_found(catalogs.beer(matched.entry_id), &mut stock.beers),
            Category::Wine => push_found(catalogs.wine(matched.entry_id), &mut stock.wines),
            Category::Spirit => push_found(catalogs.spirit(matched.entry_id), &mut stock.spirits),
        });
        if !placed {
            stock.unknowns.push(record.clone());
        }
    }
    stock
}

fn push_found<T: Clone>(entry: Option<&T>, list: &mut Vec<T>) -> bool {
    match entry {
        Some(entry) => {
            list.push(entry.clone());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pourtrait_model::{BeerEntry, Confidence, MatchedEntry};

    fn beer(id: u32, name: &str) -> BeerEntry {
        BeerEntry {
            id,
            name: name.to_string(),
            brewery: None,
            style: None,
            abv: None,
            country: None,
            mid_strength: false,
            notes: None,
        }
    }

    fn beer_record(raw: &str, entry_id: u32) -> ResolutionRecord {
        ResolutionRecord::resolved(
            raw,
            MatchedEntry {
                category: Category::Beer,
                entry_id,
                confidence: Confidence::Exact,
            },
        )
    }

    #[test]
    fn partitions_every_record_exactly_once() {
        let catalogs = Catalogs {
            beers: vec![beer(1, "Guinness Draught"), beer(2, "Stone IPA")],
            wines: vec![],
            spirits: vec![],
        };
        let records = vec![
            beer_record("guinness", 1),
            ResolutionRecord::unresolved("mystery"),
            beer_record("stone ipa", 2),
        ];
        let stock = group_records(&records, &catalogs);
        assert_eq!(stock.total(), records.len());
        assert_eq!(stock.resolved(), 2);
        assert_eq!(stock.beers.len(), 2);
        assert_eq!(stock.unknowns.len(), 1);
        assert_eq!(stock.unknowns[0].raw_text, "mystery");
    }

    #[test]
    fn keeps_input_order_within_lists() {
        let catalogs = Catalogs {
            beers: vec![beer(1, "Zywiec"), beer(2, "Asahi")],
            wines: vec![],
            spirits: vec![],
        };
        let records = vec![beer_record("zywiec", 1), beer_record("asahi", 2)];
        let stock = group_records(&records, &catalogs);
        assert_eq!(stock.beers[0].name, "Zywiec");
        assert_eq!(stock.beers[1].name, "Asahi");
    }

    #[test]
    fn stale_entry_id_falls_back_to_unknowns() {
        let catalogs = Catalogs {
            beers: vec![beer(1, "Guinness Draught")],
            wines: vec![],
            spirits: vec![],
        };
        // Record resolved against an older snapshot that still had id 5.
        let records = vec![beer_record("old entry", 5)];
        let stock = group_records(&records, &catalogs);
        assert!(stock.beers.is_empty());
        assert_eq!(stock.unknowns.len(), 1);
        assert_eq!(stock.unknowns[0].raw_text, "old entry");
        assert_eq!(stock.total(), 1);
    }

    #[test]
    fn duplicate_matches_duplicate_entries() {
        let catalogs = Catalogs {
            beers: vec![beer(1, "Guinness Draught")],
            wines: vec![],
            spirits: vec![],
        };
        let records = vec![beer_record("guinness", 1), beer_record("guiness", 1)];
        let stock = group_records(&records, &catalogs);
        assert_eq!(stock.beers.len(), 2);
        assert_eq!(stock.beers[0], stock.beers[1]);
    }
}
