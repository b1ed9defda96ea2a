pub mod catalogs;
pub mod category;
pub mod entry;
pub mod record;
pub mod stock;

pub use catalogs::Catalogs;
pub use category::{Category, Confidence};
pub use entry::{BeerEntry, Matchable, SpiritEntry, WineEntry};
pub use record::{MatchedEntry, ResolutionRecord};
pub use stock::{BeerSort, GroupedStock, SpiritSort, WineSort};
