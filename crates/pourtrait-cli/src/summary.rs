use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pourtrait_model::{Catalogs, Category, Confidence};
use pourtrait_store::StockMetadata;

use crate::types::ResolveResult;

pub fn print_resolve_summary(result: &ResolveResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Category"),
        header_cell("Matched"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for line in &result.lines {
        table.add_row(vec![
            Cell::new(&line.raw_text),
            category_cell(line.category),
            match &line.matched_name {
                Some(name) => Cell::new(name),
                None => dim_cell("-"),
            },
            confidence_cell(line.confidence),
        ]);
    }
    println!("{table}");
    let beer_count = category_count(result, Category::Beer);
    let wine_count = category_count(result, Category::Wine);
    let spirit_count = category_count(result, Category::Spirit);
    println!(
        "Resolved {} of {} lines: {beer_count} beer, {wine_count} wine, {spirit_count} spirit, {} unknown",
        result.resolved_count,
        result.lines.len(),
        result.unknown_count
    );
    if let Some(path) = &result.saved_to {
        println!("Saved: {}", path.display());
    }
}

pub fn print_stocks_table(stocks: &[StockMetadata]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Owner"),
        header_cell("Records"),
        header_cell("Unknown"),
        header_cell("File"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for stock in stocks {
        table.add_row(vec![
            Cell::new(&stock.owner)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stock.record_count),
            count_cell(stock.unresolved_count),
            Cell::new(stock.file_path.display()),
        ]);
    }
    println!("{table}");
}

pub fn print_catalog_tables(catalogs: &Catalogs) {
    println!("Beers ({})", catalogs.beers.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Brewery"),
        header_cell("Style"),
        header_cell("Abv"),
        header_cell("Country"),
        header_cell("Mid"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for beer in &catalogs.beers {
        table.add_row(vec![
            Cell::new(&beer.name),
            opt_cell(beer.brewery.as_deref()),
            opt_cell(beer.style.as_deref()),
            abv_cell(beer.abv),
            opt_cell(beer.country.as_deref()),
            flag_cell(beer.mid_strength),
        ]);
    }
    println!("{table}");
    println!();

    println!("Wines ({})", catalogs.wines.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Producer"),
        header_cell("Varietal"),
        header_cell("Vintage"),
        header_cell("Abv"),
        header_cell("Sweetness"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for wine in &catalogs.wines {
        table.add_row(vec![
            Cell::new(&wine.name),
            opt_cell(wine.producer.as_deref()),
            opt_cell(wine.varietal.as_deref()),
            match wine.vintage {
                Some(vintage) => Cell::new(vintage),
                None => dim_cell("-"),
            },
            abv_cell(wine.abv),
            opt_cell(wine.sweetness.as_deref()),
        ]);
    }
    println!("{table}");
    println!();

    println!("Spirits ({})", catalogs.spirits.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Brand"),
        header_cell("Category"),
        header_cell("Abv"),
        header_cell("Country"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for spirit in &catalogs.spirits {
        table.add_row(vec![
            Cell::new(&spirit.name),
            opt_cell(spirit.brand.as_deref()),
            opt_cell(spirit.category.as_deref()),
            abv_cell(spirit.abv),
            opt_cell(spirit.country.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn category_count(result: &ResolveResult, category: Category) -> usize {
    result
        .lines
        .iter()
        .filter(|line| line.category == Some(category))
        .count()
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(category: Option<Category>) -> Cell {
    match category {
        Some(category) => Cell::new(category.as_str()),
        None => dim_cell("-"),
    }
}

fn confidence_cell(confidence: Option<Confidence>) -> Cell {
    match confidence {
        Some(Confidence::Exact) => Cell::new("exact").fg(Color::Green),
        Some(Confidence::Corrected) => Cell::new("corrected").fg(Color::Yellow),
        None => Cell::new("unknown").fg(Color::Red),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn abv_cell(abv: Option<f64>) -> Cell {
    match abv {
        Some(abv) => Cell::new(format!("{abv}%")),
        None => dim_cell("-"),
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn opt_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
