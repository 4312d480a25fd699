//! Manifest parsing.
//!
//! The catalog manifest is a TOML file listing every content entry as an
//! `[[entry]]` table. Parsing produces plain [`Entry`] values; listing
//! invariants are checked separately when the catalog is constructed.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{CatalogError, Category, Entry};

/// Raw deserialized manifest, before conversion to catalog entries.
#[derive(Debug, Default, Deserialize)]
pub struct RawManifest {
    /// All `[[entry]]` tables, in file order.
    #[serde(default, rename = "entry")]
    pub entries: Vec<RawEntry>,
}

/// Raw deserialized `[[entry]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    /// Opaque content reference, resolved by the loader.
    pub locator: String,
    /// Category name (kebab-case).
    pub category: Category,
    /// Language sub-dimension, for the languages category.
    #[serde(default)]
    pub language: Option<String>,
    /// Routing slug.
    pub topic: String,
    /// Optional sub-section label.
    #[serde(default)]
    pub group: Option<String>,
    /// Display ordering; defaults to 0 when omitted.
    #[serde(default)]
    pub order: i64,
    /// Display title.
    pub title: String,
    /// Display description; defaults to empty when omitted.
    #[serde(default)]
    pub description: String,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self {
            locator: raw.locator,
            category: raw.category,
            language: raw.language,
            topic: raw.topic,
            group: raw.group,
            order: raw.order,
            title: raw.title,
            description: raw.description,
        }
    }
}

/// Parses manifest content into entries.
///
/// `path` is only used for error reporting.
pub fn parse_manifest_str(content: &str, path: &Path) -> Result<Vec<Entry>, CatalogError> {
    let raw: RawManifest = toml::from_str(content).map_err(|source| CatalogError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw.entries.into_iter().map(Entry::from).collect())
}

/// Reads and parses a manifest file.
pub fn parse_manifest_file(path: &Path) -> Result<Vec<Entry>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest_str(&content, path)
}
