#![deny(unsafe_code)]

pub mod group;
pub mod hint;
pub mod matcher;
pub mod normalize;
pub mod resolver;
pub mod score;
pub mod sort;

pub use group::group_records;
pub use hint::hint_order;
pub use matcher::{CatalogMatch, MatchThresholds, match_catalog};
pub use normalize::normalize;
pub use resolver::DrinkResolver;
pub use score::{OVERLAP_WEIGHT, RATIO_WEIGHT, sequence_ratio, similarity, token_overlap};
pub use sort::{sorted_beers, sorted_spirits, sorted_stock, sorted_wines};
