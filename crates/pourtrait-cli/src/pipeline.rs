//! Shared pipeline steps for the CLI commands.
//!
//! Every command composes the same few stages:
//! 1. **Read**: Load submitted lines from a text file
//! 2. **Load**: Read the three drink catalogs from CSV
//! 3. **Resolve**: Match, group and sort via the library crates
//! 4. **Write**: Send rendered output to stdout or a file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pourtrait_catalog::{default_catalog_dir, load_catalogs};
use pourtrait_model::Catalogs;

/// Read submitted lines from a file, trimmed, with blank lines dropped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lines file {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Load the catalogs from an override directory or the default location.
pub fn load_catalog_set(catalog_dir: Option<&Path>) -> Result<Catalogs> {
    let dir = match catalog_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_catalog_dir(),
    };
    let catalogs = load_catalogs(&dir)
        .with_context(|| format!("Failed to load catalogs from {}", dir.display()))?;
    Ok(catalogs)
}

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            print!("{content}");
            Ok(())
        }
    }
}
