#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::CatalogError;
pub use crate::loader::{
    BEERS_FILE, SPIRITS_FILE, WINES_FILE, load_beers, load_catalogs, load_spirits, load_wines,
};
pub use crate::paths::{CATALOG_ENV_VAR, default_catalog_dir};
