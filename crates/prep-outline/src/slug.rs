//! Heading identifier generation.
//!
//! Identifiers combine the heading's document position with a normalized
//! form of its text: `heading-{index}-{slug}`. The position prefix makes
//! identifiers unique within a document even when two headings share the
//! same text, so no deduplication state is needed.

/// Builds the identifier for the heading at `index` (0-based document order).
pub fn heading_id(index: usize, text: &str) -> String {
    let slug = base_slug(text);
    if slug.is_empty() {
        format!("heading-{index}")
    } else {
        format!("heading-{index}-{slug}")
    }
}

/// Normalizes heading text into a slug.
///
/// Lowercases, keeps alphanumerics and underscores, turns spaces and hyphens
/// into hyphens, drops everything else, collapses consecutive hyphens, and
/// trims leading/trailing hyphens. May be empty if the text is all
/// punctuation.
fn base_slug(text: &str) -> String {
    let slug: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else if c == ' ' || c == '-' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect();

    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}
