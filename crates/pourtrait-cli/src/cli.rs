//! CLI argument definitions for the pourtrait resolver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pourtrait",
    version,
    about = "Pourtrait - Resolve free-text drink lists against a house catalog",
    long_about = "Resolve free-text drink submissions against beer, wine and spirit\n\
                  catalogs, store the resolved stock per owner, and render it as a\n\
                  text or HTML poster."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a file of submitted drink lines against the catalogs.
    Resolve(ResolveArgs),

    /// Render a stored stock as a poster.
    Poster(PosterArgs),

    /// Export the unresolved lines of a stored stock.
    Unknowns(UnknownsArgs),

    /// List stored stocks with record counts.
    Stocks(StocksArgs),

    /// List the drink catalogs.
    Catalogs(CatalogsArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Path to a text file with one submitted drink per line.
    #[arg(value_name = "LINES_FILE")]
    pub lines_file: PathBuf,

    /// Directory holding beers.csv, wines.csv and spirits.csv.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Save the batch under this owner, replacing any stored stock.
    #[arg(long = "owner", value_name = "NAME")]
    pub owner: Option<String>,

    /// Directory for stored stock files.
    #[arg(long = "stock-dir", value_name = "DIR", default_value = "stock")]
    pub stock_dir: PathBuf,
}

#[derive(Parser)]
pub struct PosterArgs {
    /// Owner whose stored stock to render.
    #[arg(long = "owner", value_name = "NAME")]
    pub owner: String,

    /// Directory for stored stock files.
    #[arg(long = "stock-dir", value_name = "DIR", default_value = "stock")]
    pub stock_dir: PathBuf,

    /// Directory holding beers.csv, wines.csv and spirits.csv.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,

    /// Poster format to render.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: PosterFormatArg,

    /// Write the poster to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Poster heading (default: DRINKS).
    #[arg(long = "title", value_name = "TITLE")]
    pub title: Option<String>,

    /// Sort key for the beer section.
    #[arg(long = "sort-beers", value_enum, default_value = "name")]
    pub sort_beers: BeerSortArg,

    /// Sort key for the wine section.
    #[arg(long = "sort-wines", value_enum, default_value = "name")]
    pub sort_wines: WineSortArg,

    /// Sort key for the spirit section.
    #[arg(long = "sort-spirits", value_enum, default_value = "name")]
    pub sort_spirits: SpiritSortArg,
}

#[derive(Parser)]
pub struct UnknownsArgs {
    /// Owner whose unresolved lines to export.
    #[arg(long = "owner", value_name = "NAME")]
    pub owner: String,

    /// Directory for stored stock files.
    #[arg(long = "stock-dir", value_name = "DIR", default_value = "stock")]
    pub stock_dir: PathBuf,

    /// Write the export to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct StocksArgs {
    /// Directory for stored stock files.
    #[arg(long = "stock-dir", value_name = "DIR", default_value = "stock")]
    pub stock_dir: PathBuf,
}

#[derive(Parser)]
pub struct CatalogsArgs {
    /// Directory holding beers.csv, wines.csv and spirits.csv.
    #[arg(long = "catalog-dir", value_name = "DIR")]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PosterFormatArg {
    Text,
    Html,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BeerSortArg {
    Name,
    Abv,
    Mid,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum WineSortArg {
    Name,
    Abv,
    Sweetness,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SpiritSortArg {
    Name,
    Abv,
    Category,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
