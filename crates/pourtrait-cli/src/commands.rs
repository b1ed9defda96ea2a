use anyhow::{Result, anyhow};
use tracing::{debug, info, info_span, warn};

use pourtrait_model::{BeerSort, Catalogs, Category, ResolutionRecord, SpiritSort, WineSort};
use pourtrait_poster::{
    HtmlPosterOptions, TextPosterOptions, render_html_poster, render_text_poster,
    render_unknowns_export,
};
use pourtrait_resolve::{DrinkResolver, group_records, sorted_stock};
use pourtrait_store::StockRepository;

use crate::cli::{
    BeerSortArg, CatalogsArgs, PosterArgs, PosterFormatArg, ResolveArgs, SpiritSortArg, StocksArgs,
    UnknownsArgs, WineSortArg,
};
use crate::pipeline::{load_catalog_set, read_lines, write_output};
use crate::summary::{print_catalog_tables, print_stocks_table};
use crate::types::{LineOutcome, ResolveResult};

pub fn run_resolve(args: &ResolveArgs) -> Result<ResolveResult> {
    let resolve_span = info_span!("resolve", lines_file = %args.lines_file.display());
    let _resolve_guard = resolve_span.enter();

    let lines = read_lines(&args.lines_file)?;
    let catalogs = load_catalog_set(args.catalog_dir.as_deref())?;
    info!(
        line_count = lines.len(),
        beer_count = catalogs.beers.len(),
        wine_count = catalogs.wines.len(),
        spirit_count = catalogs.spirits.len(),
        "resolving batch"
    );

    let resolver = DrinkResolver::new(&catalogs);
    let records = resolver.resolve_batch(&lines);
    for record in &records {
        if !record.is_resolved() {
            debug!(line = %record.raw_text, "no catalog match");
        }
    }
    let resolved_count = records.iter().filter(|record| record.is_resolved()).count();
    let unknown_count = records.len() - resolved_count;
    info!(resolved_count, unknown_count, "resolution complete");

    let saved_to = match &args.owner {
        Some(owner) => {
            let repository = StockRepository::new(&args.stock_dir)?;
            let path = repository.save(owner, &records)?;
            info!(owner = %owner, path = %path.display(), "stock saved");
            Some(path)
        }
        None => None,
    };

    let lines = records
        .iter()
        .map(|record| line_outcome(record, &catalogs))
        .collect();
    Ok(ResolveResult {
        lines,
        resolved_count,
        unknown_count,
        saved_to,
    })
}

pub fn run_poster(args: &PosterArgs) -> Result<()> {
    let poster_span = info_span!("poster", owner = %args.owner);
    let _poster_guard = poster_span.enter();

    let repository = StockRepository::new(&args.stock_dir)?;
    let stored = repository
        .load(&args.owner)?
        .ok_or_else(|| anyhow!("no stored stock for owner {}", args.owner))?;
    let catalogs = load_catalog_set(args.catalog_dir.as_deref())?;

    let grouped = group_records(&stored.records, &catalogs);
    let stored_unresolved = stored
        .records
        .iter()
        .filter(|record| !record.is_resolved())
        .count();
    if grouped.unknowns.len() > stored_unresolved {
        warn!(
            stale_count = grouped.unknowns.len() - stored_unresolved,
            "stored records reference entries missing from the current catalogs"
        );
    }
    let stock = sorted_stock(
        &grouped,
        beer_sort(args.sort_beers),
        wine_sort(args.sort_wines),
        spirit_sort(args.sort_spirits),
    );
    info!(
        record_count = stored.records.len(),
        unknown_count = stock.unknowns.len(),
        "rendering poster"
    );

    let rendered = match args.format {
        PosterFormatArg::Text => render_text_poster(
            &stock,
            &TextPosterOptions {
                title: args.title.clone(),
            },
        ),
        PosterFormatArg::Html => render_html_poster(
            &stock,
            &HtmlPosterOptions {
                title: args.title.clone(),
            },
        )?,
    };
    write_output(&rendered, args.output.as_deref())
}

pub fn run_unknowns(args: &UnknownsArgs) -> Result<()> {
    let unknowns_span = info_span!("unknowns", owner = %args.owner);
    let _unknowns_guard = unknowns_span.enter();

    let repository = StockRepository::new(&args.stock_dir)?;
    let stored = repository
        .load(&args.owner)?
        .ok_or_else(|| anyhow!("no stored stock for owner {}", args.owner))?;
    let unknowns: Vec<ResolutionRecord> = stored
        .records
        .iter()
        .filter(|record| !record.is_resolved())
        .cloned()
        .collect();
    info!(unknown_count = unknowns.len(), "exporting unknowns");

    let export = render_unknowns_export(&unknowns);
    write_output(&export, args.output.as_deref())
}

pub fn run_stocks(args: &StocksArgs) -> Result<()> {
    let repository = StockRepository::new(&args.stock_dir)?;
    let stocks = repository.list()?;
    if stocks.is_empty() {
        println!("No stored stocks in {}", args.stock_dir.display());
        return Ok(());
    }
    print_stocks_table(&stocks);
    Ok(())
}

pub fn run_catalogs(args: &CatalogsArgs) -> Result<()> {
    let catalogs = load_catalog_set(args.catalog_dir.as_deref())?;
    print_catalog_tables(&catalogs);
    Ok(())
}

fn line_outcome(record: &ResolutionRecord, catalogs: &Catalogs) -> LineOutcome {
    let matched_name = record.matched.and_then(|matched| match matched.category {
        Category::Beer => catalogs
            .beer(matched.entry_id)
            .map(|entry| entry.name.clone()),
        Category::Wine => catalogs
            .wine(matched.entry_id)
            .map(|entry| entry.name.clone()),
        Category::Spirit => catalogs
            .spirit(matched.entry_id)
            .map(|entry| entry.name.clone()),
    });
    LineOutcome {
        raw_text: record.raw_text.clone(),
        category: record.matched.map(|matched| matched.category),
        matched_name,
        confidence: record.matched.map(|matched| matched.confidence),
    }
}

fn beer_sort(arg: BeerSortArg) -> BeerSort {
    match arg {
        BeerSortArg::Name => BeerSort::Name,
        BeerSortArg::Abv => BeerSort::Abv,
        BeerSortArg::Mid => BeerSort::Mid,
    }
}

fn wine_sort(arg: WineSortArg) -> WineSort {
    match arg {
        WineSortArg::Name => WineSort::Name,
        WineSortArg::Abv => WineSort::Abv,
        WineSortArg::Sweetness => WineSort::Sweetness,
    }
}

fn spirit_sort(arg: SpiritSortArg) -> SpiritSort {
    match arg {
        SpiritSortArg::Name => SpiritSort::Name,
        SpiritSortArg::Abv => SpiritSort::Abv,
        SpiritSortArg::Category => SpiritSort::Category,
    }
}
