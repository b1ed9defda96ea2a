//! Plain-text poster and unknowns export.

use chrono::Utc;

use pourtrait_model::{GroupedStock, ResolutionRecord};

use crate::common::{beer_details, spirit_details, wine_details};

/// Default poster heading.
pub const DEFAULT_TITLE: &str = "DRINKS";

/// Options for plain-text poster rendering.
#[derive(Debug, Clone, Default)]
pub struct TextPosterOptions {
    /// Heading line; `None` renders [`DEFAULT_TITLE`].
    pub title: Option<String>,
}

/// Render a grouped stock as a plain-text poster.
///
/// Sections appear in beer, wine, spirit, unknown order and empty
/// sections are skipped. The output carries no timestamps and ends with
/// a single newline, so the same stock always renders the same bytes.
pub fn render_text_poster(stock: &GroupedStock, options: &TextPosterOptions) -> String {
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');

    let beers: Vec<String> = stock
        .beers
        .iter()
        .map(|entry| entry_line(&entry.name, &beer_details(entry)))
        .collect();
    let wines: Vec<String> = stock
        .wines
        .iter()
        .map(|entry| entry_line(&entry.name, &wine_details(entry)))
        .collect();
    let spirits: Vec<String> = stock
        .spirits
        .iter()
        .map(|entry| entry_line(&entry.name, &spirit_details(entry)))
        .collect();
    let unknowns: Vec<String> = stock
        .unknowns
        .iter()
        .map(|record| format!("- {}", record.raw_text))
        .collect();

    push_section(&mut out, "BEER", &beers);
    push_section(&mut out, "WINE", &wines);
    push_section(&mut out, "SPIRIT", &spirits);
    push_section(&mut out, "UNKNOWN", &unknowns);
    out
}

fn entry_line(name: &str, details: &str) -> String {
    if details.is_empty() {
        format!("- {name}")
    } else {
        format!("- {name} ({details})")
    }
}

fn push_section(out: &mut String, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(header);
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
}

/// Render the unknown-drinks export, stamped with the current UTC time.
pub fn render_unknowns_export(unknowns: &[ResolutionRecord]) -> String {
    let exported_at = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    render_unknowns_export_at(unknowns, &exported_at)
}

/// Render the unknown-drinks export with a caller-supplied timestamp.
///
/// Two comment lines frame the export, then one raw line per record in
/// input order. Callers pass a fixed timestamp for deterministic output.
pub fn render_unknowns_export_at(unknowns: &[ResolutionRecord], exported_at: &str) -> String {
    let mut out = String::from("# Unknown drinks\n");
    out.push_str(&format!("# Exported {exported_at} UTC\n\n"));
    for record in unknowns {
        out.push_str(&record.raw_text);
        out.push('\n');
    }
    out
}
