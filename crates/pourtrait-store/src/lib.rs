#![deny(unsafe_code)]

//! Stock repository for persisting resolved drink batches per owner.
//!
//! This crate provides a file-system based store for the outcome of one
//! resolution run. Each owner has exactly one stored batch at a time,
//! kept as a JSON file named after the normalized owner:
//! `{OWNER}.json`
//!
//! Saving is replace-all: a new batch for an owner overwrites whatever
//! was stored before, mirroring how a re-submitted drink list supersedes
//! the previous one. Writes are not serialized against each other; when
//! two saves for the same owner race, the last write wins and callers
//! needing stronger guarantees must coordinate upstream.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use pourtrait_model::ResolutionRecord;

/// Repository for storing and retrieving resolved stock batches.
///
/// The repository is directory-based; every stored batch is one JSON
/// file keyed by owner.
#[derive(Debug, Clone)]
pub struct StockRepository {
    /// Base directory for stored batches.
    base_dir: PathBuf,
}

/// Metadata about a stored batch, cheap to list without exposing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMetadata {
    /// Owner the batch belongs to, as stored.
    pub owner: String,
    /// File path where the batch is stored.
    pub file_path: PathBuf,
    /// Number of records in the batch.
    pub record_count: usize,
    /// Number of records that resolved to no catalog entry.
    pub unresolved_count: usize,
}

/// A stored batch with its envelope metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredStock {
    /// Owner the batch belongs to.
    pub owner: String,
    /// When this batch was saved (ISO 8601, UTC).
    pub saved_at: String,
    /// Version of the storage format.
    #[serde(default = "default_version")]
    pub version: String,
    /// The resolution records, in submission order.
    pub records: Vec<ResolutionRecord>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StoredStock {
    /// Create a new stored batch stamped with the current time.
    pub fn new(owner: impl Into<String>, records: Vec<ResolutionRecord>) -> Self {
        Self {
            owner: owner.into(),
            saved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: default_version(),
            records,
        }
    }

    /// Records that resolved to no catalog entry.
    pub fn unresolved_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| !record.is_resolved())
            .count()
    }
}

impl StockRepository {
    /// Create a new stock repository at the given directory.
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create stock store: {}", base_dir.display()))?;
        Ok(Self { base_dir })
    }

    /// Get the base directory of this repository.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Save a batch for an owner, replacing any previously stored batch.
    pub fn save(&self, owner: &str, records: &[ResolutionRecord]) -> Result<PathBuf> {
        let stored = StoredStock::new(owner, records.to_vec());
        self.save_stored(&stored)
    }

    /// Save a stored batch (with envelope metadata) as-is.
    pub fn save_stored(&self, stored: &StoredStock) -> Result<PathBuf> {
        let path = self.stock_path(&stored.owner);
        let json = serde_json::to_string_pretty(stored)
            .with_context(|| format!("Failed to serialize stock for {}", stored.owner))?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write stock to {}", path.display()))?;
        Ok(path)
    }

    /// Load the stored batch for an owner.
    ///
    /// Returns `None` if the owner has nothing stored.
    pub fn load(&self, owner: &str) -> Result<Option<StoredStock>> {
        let path = self.stock_path(owner);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stock from {}", path.display()))?;
        let stored: StoredStock = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse stock from {}", path.display()))?;
        Ok(Some(stored))
    }

    /// List all stored batches, sorted by owner.
    pub fn list(&self) -> Result<Vec<StockMetadata>> {
        let mut metadata = Vec::new();

        for entry in fs::read_dir(&self.base_dir)
            .with_context(|| format!("Failed to read stock store: {}", self.base_dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let filename = path
                .file_name()
                .and_then(OsStr::to_str)
                .unwrap_or_default();
            if !filename.ends_with(".json") {
                continue;
            }

            let contents = fs::read_to_string(&path)?;
            if let Ok(stored) = serde_json::from_str::<StoredStock>(&contents) {
                metadata.push(StockMetadata {
                    owner: stored.owner.clone(),
                    file_path: path,
                    record_count: stored.records.len(),
                    unresolved_count: stored.unresolved_count(),
                });
            }
        }

        metadata.sort_by(|a, b| a.owner.cmp(&b.owner));
        Ok(metadata)
    }

    /// Delete the stored batch for an owner.
    ///
    /// Returns `false` when the owner had nothing stored.
    pub fn delete(&self, owner: &str) -> Result<bool> {
        let path = self.stock_path(owner);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete stock: {}", path.display()))?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check whether an owner has a stored batch.
    pub fn exists(&self, owner: &str) -> bool {
        self.stock_path(owner).exists()
    }

    /// File path for an owner's batch.
    fn stock_path(&self, owner: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", normalize_owner(owner)))
    }
}

/// Normalize an owner name for use in filenames.
///
/// Owners differing only in case or punctuation share one slot.
fn normalize_owner(owner: &str) -> String {
    owner
        .trim()
        .to_uppercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
