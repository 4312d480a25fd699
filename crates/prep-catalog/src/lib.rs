//! Content catalog for prep.
//!
//! The catalog is the single source of truth for what content exists: a flat,
//! immutable set of entries described by a hand-maintained `prep.toml`
//! manifest. Each entry carries routing metadata (category, optional
//! language, topic slug) and display metadata (title, description, group,
//! order). The catalog is constructed once at startup and only ever read
//! afterwards; every operation is a pure function over the entry set.

#![warn(missing_docs)]

mod discovery;
mod error;
mod parse;
mod templates;
mod validate;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    path::Path,
    str::FromStr,
};

pub use discovery::{MANIFEST_FILENAME, discover_manifest};
pub use error::{CatalogError, ParseCategoryError};
pub use parse::{RawEntry, RawManifest, parse_manifest_file, parse_manifest_str};
use serde::{Deserialize, Serialize};
pub use templates::manifest_template;
use validate::validate_entries;

/// Top-level content bucket.
///
/// The set of categories is fixed; the manifest and CLI refer to them by
/// their kebab-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Programming-language tutorials, subdivided by language.
    #[serde(rename = "languages")]
    Language,
    /// Data structures and algorithms.
    #[serde(rename = "dsa")]
    Dsa,
    /// System-design articles.
    #[serde(rename = "system-design")]
    SystemDesign,
    /// Interview preparation content.
    #[serde(rename = "interview")]
    Interview,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Language, Self::Dsa, Self::SystemDesign, Self::Interview];

    /// Returns the kebab-case name used in manifests and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Language => "languages",
            Self::Dsa => "dsa",
            Self::SystemDesign => "system-design",
            Self::Interview => "interview",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "languages" => Ok(Self::Language),
            "dsa" => Ok(Self::Dsa),
            "system-design" => Ok(Self::SystemDesign),
            "interview" => Ok(Self::Interview),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// One piece of publishable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Opaque reference to where the raw markdown lives. The catalog never
    /// interprets it; the loader resolves it.
    pub locator: String,
    /// Top-level content bucket.
    pub category: Category,
    /// Language sub-dimension; only meaningful for [`Category::Language`].
    pub language: Option<String>,
    /// Routing slug, unique within one (category, language) listing.
    pub topic: String,
    /// Free-form label clustering entries into a named sub-section.
    pub group: Option<String>,
    /// Display ordering; entries without an explicit order sort as 0.
    pub order: i64,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
}

/// The immutable content catalog.
///
/// Constructed once (from a manifest file or directly from entries) and
/// passed by reference to whatever needs it. There is no mutation after
/// construction, so sharing a `&Catalog` across the whole program is safe
/// without any synchronization.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All entries, in manifest order.
    entries: Vec<Entry>,
}

impl Catalog {
    /// Builds a catalog from a set of entries, validating listing invariants.
    ///
    /// Fails with [`CatalogError::DuplicateTopic`] if two entries in the same
    /// (category, language) listing share a topic slug.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        validate_entries(&entries)?;
        Ok(Self { entries })
    }

    /// Loads and validates a catalog from a `prep.toml` manifest file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let entries = parse_manifest_file(path)?;
        Self::new(entries)
    }

    /// Returns all entries in manifest order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists the entries of a category in display order.
    ///
    /// `language` is only consulted for [`Category::Language`]; for other
    /// categories it is ignored. An empty listing is a normal result, never
    /// an error.
    ///
    /// Display order is: a stable sort by ascending `order` (ties keep
    /// manifest position), then ungrouped entries first in that order,
    /// then groups sorted lexicographically by label, each group's members
    /// in sorted order. This is the exact order the navigation shows, so
    /// it must not change shape.
    pub fn list(&self, category: Category, language: Option<&str>) -> Vec<&Entry> {
        let mut matched: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.category == category)
            .filter(|entry| {
                category != Category::Language
                    || language.is_none()
                    || entry.language.as_deref() == language
            })
            .collect();

        // sort_by_key is stable: equal orders keep manifest position.
        matched.sort_by_key(|entry| entry.order);

        let mut listing = Vec::with_capacity(matched.len());
        let mut groups: BTreeMap<&str, Vec<&Entry>> = BTreeMap::new();
        for entry in matched {
            match entry.group.as_deref() {
                Some(group) => groups.entry(group).or_default().push(entry),
                None => listing.push(entry),
            }
        }
        for members in groups.into_values() {
            listing.extend(members);
        }
        listing
    }

    /// Finds the entry stored at a locator.
    ///
    /// Scans all entries in manifest order and returns the first match.
    /// `None` is the normal "not found" outcome, not a fault.
    pub fn find_by_locator(&self, locator: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.locator == locator)
    }

    /// Selects an entry from a listing by topic.
    ///
    /// With `topic` set, returns the matching entry from the listing; without
    /// it, returns the first entry in display order (the "redirect to first
    /// topic" routing policy). `None` when the listing is empty or the topic
    /// is unknown.
    pub fn select(
        &self,
        category: Category,
        language: Option<&str>,
        topic: Option<&str>,
    ) -> Option<&Entry> {
        let listing = self.list(category, language);
        match topic {
            Some(topic) => listing.into_iter().find(|entry| entry.topic == topic),
            None => listing.into_iter().next(),
        }
    }

    /// Returns the distinct languages present in the language category,
    /// sorted lexicographically.
    pub fn languages(&self) -> Vec<&str> {
        let languages: BTreeSet<&str> = self
            .entries
            .iter()
            .filter(|entry| entry.category == Category::Language)
            .filter_map(|entry| entry.language.as_deref())
            .collect();
        languages.into_iter().collect()
    }
}
