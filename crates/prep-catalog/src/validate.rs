//! Catalog validation.
//!
//! Checks the listing invariants that parsing alone cannot enforce.

use std::collections::HashSet;

use crate::{CatalogError, Category, Entry};

/// Validates that topic slugs are unique within each (category, language)
/// listing.
///
/// The language dimension only exists for the languages category; for other
/// categories all entries share one listing regardless of any stray
/// `language` value.
pub(crate) fn validate_entries(entries: &[Entry]) -> Result<(), CatalogError> {
    let mut seen: HashSet<(Category, Option<&str>, &str)> = HashSet::new();

    for entry in entries {
        let language = if entry.category == Category::Language {
            entry.language.as_deref()
        } else {
            None
        };

        if !seen.insert((entry.category, language, entry.topic.as_str())) {
            return Err(CatalogError::DuplicateTopic {
                topic: entry.topic.clone(),
                listing: listing_name(entry.category, language),
            });
        }
    }

    Ok(())
}

/// Human-readable listing name for error messages, e.g. `languages/java`.
fn listing_name(category: Category, language: Option<&str>) -> String {
    match language {
        Some(language) => format!("{category}/{language}"),
        None => category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(topic: &str, category: Category, language: Option<&str>) -> Entry {
        Entry {
            locator: format!("{topic}.md"),
            category,
            language: language.map(str::to_string),
            topic: topic.to_string(),
            group: None,
            order: 0,
            title: topic.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_unique_topics_pass() {
        let entries = vec![
            entry("arrays", Category::Dsa, None),
            entry("stacks", Category::Dsa, None),
        ];
        assert!(validate_entries(&entries).is_ok());
    }

    #[test]
    fn test_duplicate_in_same_listing_fails() {
        let entries = vec![
            entry("arrays", Category::Dsa, None),
            entry("arrays", Category::Dsa, None),
        ];
        let err = validate_entries(&entries).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateTopic { topic, listing } if topic == "arrays" && listing == "dsa"
        ));
    }

    #[test]
    fn test_language_splits_listings() {
        let entries = vec![
            entry("intro", Category::Language, Some("java")),
            entry("intro", Category::Language, Some("python")),
        ];
        assert!(validate_entries(&entries).is_ok());
    }

    #[test]
    fn test_stray_language_ignored_outside_language_category() {
        // A language value on a dsa entry does not create a separate listing.
        let entries = vec![
            entry("arrays", Category::Dsa, Some("java")),
            entry("arrays", Category::Dsa, Some("python")),
        ];
        let err = validate_entries(&entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTopic { .. }));
    }

    #[test]
    fn test_duplicate_listing_name_includes_language() {
        let entries = vec![
            entry("intro", Category::Language, Some("java")),
            entry("intro", Category::Language, Some("java")),
        ];
        let err = validate_entries(&entries).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateTopic { listing, .. } if listing == "languages/java"
        ));
    }
}
