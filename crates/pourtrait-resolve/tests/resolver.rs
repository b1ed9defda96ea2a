//! End-to-end resolution tests: batch in, grouped and sorted stock out.

use pourtrait_model::{
    BeerEntry, BeerSort, Catalogs, Category, Confidence, SpiritEntry, SpiritSort, WineEntry,
    WineSort,
};
use pourtrait_resolve::{DrinkResolver, group_records, sorted_stock};

fn sample_catalogs() -> Catalogs {
    Catalogs {
        beers: vec![
            BeerEntry {
                id: 1,
                name: "Guinness Draught".to_string(),
                brewery: Some("Guinness".to_string()),
                style: Some("Stout".to_string()),
                abv: Some(4.2),
                country: Some("Ireland".to_string()),
                mid_strength: true,
                notes: None,
            },
            BeerEntry {
                id: 2,
                name: "Pacífico".to_string(),
                brewery: Some("Grupo Modelo".to_string()),
                style: Some("Lager".to_string()),
                abv: Some(4.5),
                country: Some("Mexico".to_string()),
                mid_strength: false,
                notes: None,
            },
            BeerEntry {
                id: 3,
                name: "Stone IPA".to_string(),
                brewery: Some("Stone Brewing".to_string()),
                style: Some("IPA".to_string()),
                abv: Some(6.9),
                country: Some("USA".to_string()),
                mid_strength: false,
                notes: None,
            },
        ],
        wines: vec![WineEntry {
            id: 1,
            name: "Penfolds Bin 28".to_string(),
            producer: Some("Penfolds".to_string()),
            varietal: Some("Shiraz".to_string()),
            region: Some("South Australia".to_string()),
            country: Some("Australia".to_string()),
            abv: Some(14.5),
            sweetness: Some("dry".to_string()),
            vintage: Some(2019),
            notes: None,
        }],
        spirits: vec![
            SpiritEntry {
                id: 1,
                name: "Tanqueray".to_string(),
                brand: Some("Tanqueray".to_string()),
                category: Some("Gin".to_string()),
                subtype: Some("London Dry".to_string()),
                abv: Some(43.1),
                country: Some("UK".to_string()),
                flavor_notes: None,
                aging: None,
            },
            SpiritEntry {
                id: 2,
                name: "Patrón Silver".to_string(),
                brand: Some("Patrón".to_string()),
                category: Some("Tequila".to_string()),
                subtype: Some("Blanco".to_string()),
                abv: Some(40.0),
                country: Some("Mexico".to_string()),
                flavor_notes: None,
                aging: None,
            },
        ],
    }
}

#[test]
fn resolves_exact_corrected_and_unknown_lines() {
    let catalogs = sample_catalogs();
    let resolver = DrinkResolver::new(&catalogs);
    let records = resolver.resolve_batch([
        "Guinness Draught",
        "guinness draft",
        "PACÍFICO",
        "patron silver",
        "Unknown Moonshine XYZ",
    ]);

    let exact = records[0].matched.expect("verbatim name resolves");
    assert_eq!(exact.category, Category::Beer);
    assert_eq!(exact.entry_id, 1);
    assert_eq!(exact.confidence, Confidence::Exact);

    let corrected = records[1].matched.expect("typo resolves");
    assert_eq!(corrected.category, Category::Beer);
    assert_eq!(corrected.entry_id, 1);
    assert_eq!(corrected.confidence, Confidence::Corrected);

    let folded = records[2].matched.expect("case-folded name resolves");
    assert_eq!(folded.category, Category::Beer);
    assert_eq!(folded.entry_id, 2);
    assert_eq!(folded.confidence, Confidence::Exact);

    // The raw line differs from "Patrón Silver" by its missing accent, so
    // this goes through the fuzzy pass and still lands in the exact tier.
    let spirit = records[3].matched.expect("accent-free spelling resolves");
    assert_eq!(spirit.category, Category::Spirit);
    assert_eq!(spirit.entry_id, 2);
    assert_eq!(spirit.confidence, Confidence::Exact);

    assert_eq!(records[4].matched, None);
    assert_eq!(records[4].raw_text, "Unknown Moonshine XYZ");
}

#[test]
fn raw_text_always_survives_resolution() {
    let catalogs = sample_catalogs();
    let resolver = DrinkResolver::new(&catalogs);
    let lines = ["Guinness Draught", "guinness draft", "no such drink"];
    let records = resolver.resolve_batch(lines);
    for (line, record) in lines.iter().zip(&records) {
        assert_eq!(&record.raw_text, line);
    }
}

#[test]
fn grouping_partitions_the_whole_batch() {
    let catalogs = sample_catalogs();
    let resolver = DrinkResolver::new(&catalogs);
    let records = resolver.resolve_batch([
        "Stone IPA",
        "penfolds bin 28",
        "Tanqueray",
        "guiness draught",
        "mystery swill",
    ]);
    let stock = group_records(&records, &catalogs);

    assert_eq!(stock.total(), records.len());
    assert_eq!(stock.beers.len(), 2);
    assert_eq!(stock.wines.len(), 1);
    assert_eq!(stock.spirits.len(), 1);
    assert_eq!(stock.unknowns.len(), 1);
    assert_eq!(stock.unknowns[0].raw_text, "mystery swill");
}

#[test]
fn sorted_stock_orders_each_section_independently() {
    let catalogs = sample_catalogs();
    let resolver = DrinkResolver::new(&catalogs);
    let records = resolver.resolve_batch(["Stone IPA", "Guinness Draught", "Pacífico"]);
    let stock = group_records(&records, &catalogs);

    let by_name = sorted_stock(&stock, BeerSort::Name, WineSort::Name, SpiritSort::Name);
    let names: Vec<&str> = by_name.beers.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Guinness Draught", "Pacífico", "Stone IPA"]);

    let by_abv = sorted_stock(&stock, BeerSort::Abv, WineSort::Abv, SpiritSort::Abv);
    let names: Vec<&str> = by_abv.beers.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Stone IPA", "Pacífico", "Guinness Draught"]);

    let by_mid = sorted_stock(&stock, BeerSort::Mid, WineSort::Name, SpiritSort::Name);
    assert_eq!(by_mid.beers[0].name, "Guinness Draught");
}

#[test]
fn same_batch_resolves_identically_every_time() {
    let catalogs = sample_catalogs();
    let resolver = DrinkResolver::new(&catalogs);
    let lines = [
        "Guinness Draught",
        "guinness draft",
        "penfolds bin 28",
        "patron silver",
        "who knows",
    ];
    let first = resolver.resolve_batch(lines);
    let second = resolver.resolve_batch(lines);
    assert_eq!(first, second);

    let grouped_first = group_records(&first, &catalogs);
    let grouped_second = group_records(&second, &catalogs);
    assert_eq!(grouped_first, grouped_second);
}
