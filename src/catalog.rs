//! Catalog data model and loading
//!
//! The catalog is a fixed, read-only list of motorcycle records supplied in
//! full at startup: either the factory data embedded in the binary or a JSON
//! file passed on the command line. Nothing in the core ever mutates it.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Factory catalog shipped with the binary.
const EMBEDDED_MODELS: &str = include_str!("../data/models.json");

/// Closed set of product categories, serialized by display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "踏板")]
    Scooter,
    #[serde(rename = "街车")]
    Street,
    #[serde(rename = "拉力")]
    Adventure,
    #[serde(rename = "巡航")]
    Cruiser,
}

impl Category {
    /// All categories, in tab-row order.
    pub const ALL: [Category; 4] = [
        Category::Scooter,
        Category::Street,
        Category::Adventure,
        Category::Cruiser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Scooter => "踏板",
            Category::Street => "街车",
            Category::Adventure => "拉力",
            Category::Cruiser => "巡航",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the specification table (label and value are both display
/// strings; order in the data file is the display order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Unique, stable for the process lifetime.
    pub id: String,
    pub name: String,
    pub series: String,
    pub category: Category,
    /// Official list price in whole CNY.
    pub price: u32,
    pub description: String,
    /// Image reference for the presentation layer; never fetched here.
    pub image: String,
    #[serde(default)]
    pub specs: Vec<SpecEntry>,
}

/// Immutable, in-memory list of records with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog, validating that record ids are unique.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                bail!("duplicate record id in catalog: {}", record.id);
            }
        }
        Ok(Self { records })
    }

    /// Load the factory catalog embedded in the binary.
    pub fn embedded() -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(EMBEDDED_MODELS).context("embedded catalog is malformed")?;
        Self::from_records(records)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let records: Vec<Record> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        Self::from_records(records)
    }

    /// Look up a record by id. Misses are expected for dangling ids held by
    /// the comparison set or focus slot; callers skip them at render time.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            name: id.to_uppercase(),
            series: "TEST".to_string(),
            category: Category::Scooter,
            price: 10000,
            description: String::new(),
            image: String::new(),
            specs: Vec::new(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_embedded_ids_unique() {
        let catalog = Catalog::embedded().unwrap();
        let ids: HashSet<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_records(vec![record("a"), record("a")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_records(vec![record("a"), record("b")]).unwrap();
        assert_eq!(catalog.get("b").map(|r| r.id.as_str()), Some("b"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_specs_preserve_order() {
        let catalog = Catalog::embedded().unwrap();
        let record = catalog.records().first().unwrap();
        assert_eq!(record.specs.first().map(|s| s.label.as_str()), Some("发动机类型"));
    }
}
