//! Heading extraction from markdown.
//!
//! Scans markdown via pulldown-cmark events and collects headings in
//! document order. Extraction is total: any input produces an outline,
//! possibly empty.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::{Heading, slug::heading_id};

/// Extracts all headings from markdown content, in document order.
///
/// Text and inline-code events inside a heading are concatenated to form the
/// label; the label is trimmed. The i-th heading (0-indexed) gets the
/// identifier `heading-{i}-{slug}`, which is unique within the document even
/// when two headings share the same text.
pub fn extract_headings(content: &str) -> Vec<Heading> {
    let parser = Parser::new(content);
    let mut headings = Vec::new();
    let mut current_heading: Option<(HeadingLevel, String)> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((level, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut heading_text)) = current_heading {
                    heading_text.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current_heading.take() {
                    let text = text.trim().to_string();
                    headings.push(Heading {
                        id: heading_id(headings.len(), &text),
                        text,
                        level: heading_level_depth(level),
                    });
                }
            }
            _ => {}
        }
    }

    headings
}

/// Converts a pulldown-cmark heading level to its numeric depth (1-6).
fn heading_level_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
