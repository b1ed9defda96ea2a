//! Catalog directory discovery.

use std::path::PathBuf;

/// Environment variable for overriding the catalog directory.
pub const CATALOG_ENV_VAR: &str = "POURTRAIT_CATALOG_DIR";

/// Get the default catalog directory.
///
/// Checks the `POURTRAIT_CATALOG_DIR` environment variable first, then
/// falls back to the `catalog/` directory checked in at the workspace
/// root.
pub fn default_catalog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CATALOG_ENV_VAR) {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog")
}
