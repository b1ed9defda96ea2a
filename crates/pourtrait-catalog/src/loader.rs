#![deny(unsafe_code)]

//! CSV catalog loading.
//!
//! Each catalog is one CSV file with a header row. Only `name` is
//! required; every other column is optional and a blank cell reads as a
//! missing value. Entry ids are assigned 1-based in file order, so the
//! file is the source of truth for id stability.

use std::path::Path;

use pourtrait_model::{BeerEntry, Catalogs, SpiritEntry, WineEntry};

use crate::error::CatalogError;

/// File name of the beer catalog within a catalog directory.
pub const BEERS_FILE: &str = "beers.csv";
/// File name of the wine catalog.
pub const WINES_FILE: &str = "wines.csv";
/// File name of the spirit catalog.
pub const SPIRITS_FILE: &str = "spirits.csv";

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_matches('\u{feff}').trim() == name)
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn get_f64(row: &csv::StringRecord, idx: Option<usize>) -> Option<f64> {
    get_string(row, idx).and_then(|s| s.parse().ok())
}

fn get_i32(row: &csv::StringRecord, idx: Option<usize>) -> Option<i32> {
    get_string(row, idx).and_then(|s| s.parse().ok())
}

fn get_bool(row: &csv::StringRecord, idx: Option<usize>) -> bool {
    get_string(row, idx).is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::io::Cursor<Vec<u8>>>, CatalogError> {
    let bytes = std::fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(std::io::Cursor::new(bytes)))
}

fn read_headers(
    reader: &mut csv::Reader<std::io::Cursor<Vec<u8>>>,
    path: &Path,
) -> Result<csv::StringRecord, CatalogError> {
    Ok(reader
        .headers()
        .map_err(|e| CatalogError::csv(path, e.to_string()))?
        .clone())
}

fn require_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, CatalogError> {
    header_index(headers, name).ok_or_else(|| CatalogError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

/// Loads the beer catalog from `path`.
pub fn load_beers(path: &Path) -> Result<Vec<BeerEntry>, CatalogError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let idx_name = require_column(&headers, "name", path)?;
    let idx_brewery = header_index(&headers, "brewery");
    let idx_style = header_index(&headers, "style");
    let idx_abv = header_index(&headers, "abv");
    let idx_country = header_index(&headers, "country");
    let idx_mid = header_index(&headers, "mid_strength");
    let idx_notes = header_index(&headers, "notes");

    let mut entries = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
        let name = get_string(&row, Some(idx_name)).ok_or_else(|| CatalogError::MissingName {
            path: path.to_path_buf(),
            row: row_number + 1,
        })?;
        entries.push(BeerEntry {
            id: (entries.len() + 1) as u32,
            name,
            brewery: get_string(&row, idx_brewery),
            style: get_string(&row, idx_style),
            abv: get_f64(&row, idx_abv),
            country: get_string(&row, idx_country),
            mid_strength: get_bool(&row, idx_mid),
            notes: get_string(&row, idx_notes),
        });
    }
    Ok(entries)
}

/// Loads the wine catalog from `path`.
pub fn load_wines(path: &Path) -> Result<Vec<WineEntry>, CatalogError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let idx_name = require_column(&headers, "name", path)?;
    let idx_producer = header_index(&headers, "producer");
    let idx_varietal = header_index(&headers, "varietal");
    let idx_region = header_index(&headers, "region");
    let idx_country = header_index(&headers, "country");
    let idx_abv = header_index(&headers, "abv");
    let idx_sweetness = header_index(&headers, "sweetness");
    let idx_vintage = header_index(&headers, "vintage");
    let idx_notes = header_index(&headers, "notes");

    let mut entries = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
        let name = get_string(&row, Some(idx_name)).ok_or_else(|| CatalogError::MissingName {
            path: path.to_path_buf(),
            row: row_number + 1,
        })?;
        entries.push(WineEntry {
            id: (entries.len() + 1) as u32,
            name,
            producer: get_string(&row, idx_producer),
            varietal: get_string(&row, idx_varietal),
            region: get_string(&row, idx_region),
            country: get_string(&row, idx_country),
            abv: get_f64(&row, idx_abv),
            sweetness: get_string(&row, idx_sweetness),
            vintage: get_i32(&row, idx_vintage),
            notes: get_string(&row, idx_notes),
        });
    }
    Ok(entries)
}

/// Loads the spirit catalog from `path`.
pub fn load_spirits(path: &Path) -> Result<Vec<SpiritEntry>, CatalogError> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;

    let idx_name = require_column(&headers, "name", path)?;
    let idx_brand = header_index(&headers, "brand");
    let idx_category = header_index(&headers, "category");
    let idx_subtype = header_index(&headers, "subtype");
    let idx_abv = header_index(&headers, "abv");
    let idx_country = header_index(&headers, "country");
    let idx_flavor = header_index(&headers, "flavor_notes");
    let idx_aging = header_index(&headers, "aging");

    let mut entries = Vec::new();
    for (row_number, row) in reader.records().enumerate() {
        let row = row.map_err(|e| CatalogError::csv(path, e.to_string()))?;
        let name = get_string(&row, Some(idx_name)).ok_or_else(|| CatalogError::MissingName {
            path: path.to_path_buf(),
            row: row_number + 1,
        })?;
        entries.push(SpiritEntry {
            id: (entries.len() + 1) as u32,
            name,
            brand: get_string(&row, idx_brand),
            category: get_string(&row, idx_category),
            subtype: get_string(&row, idx_subtype),
            abv: get_f64(&row, idx_abv),
            country: get_string(&row, idx_country),
            flavor_notes: get_string(&row, idx_flavor),
            aging: get_string(&row, idx_aging),
        });
    }
    Ok(entries)
}

/// Loads all three catalogs from their conventional file names in `dir`.
///
/// All three files must exist; a missing file is an error rather than an
/// empty catalog, so a mistyped directory cannot silently resolve
/// everything to unknown.
pub fn load_catalogs(dir: &Path) -> Result<Catalogs, CatalogError> {
    Ok(Catalogs {
        beers: load_beers(&dir.join(BEERS_FILE))?,
        wines: load_wines(&dir.join(WINES_FILE))?,
        spirits: load_spirits(&dir.join(SPIRITS_FILE))?,
    })
}
