//! Markdown outline extraction and section tracking for prep.
//!
//! This crate derives a navigable outline from raw markdown text and tracks
//! which section is currently in view as the reader scrolls. It supports:
//! - Heading extraction in document order via pulldown-cmark
//! - Stable, position-based heading identifiers
//! - Annotating rendered heading elements with those identifiers
//! - Host-agnostic active-section tracking over visibility events
//!
//! The extractor is a pure function over the markdown text: identical input
//! yields identical outlines, and malformed markdown simply yields fewer or
//! no headings. The tracker consumes visibility observations supplied by the
//! host (a browser viewport observer, a TUI, or a test double) and never
//! touches the host environment itself.

#![warn(missing_docs)]

mod annotate;
mod extract;
mod slug;
mod tracker;

pub use annotate::Anchored;
pub use extract::extract_headings;
use serde::Serialize;
pub use slug::heading_id;
pub use tracker::{HEADER_OFFSET, SectionTracker, ViewportBand, VisibilityChange, scroll_target};

/// One extracted markdown heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Stable identifier, unique within one extraction pass.
    pub id: String,
    /// The heading label, trimmed.
    pub text: String,
    /// Heading depth, 1-6.
    pub level: u8,
}

/// An ordered outline of the headings in one markdown document.
///
/// Headings appear in document order. A fresh outline is extracted whenever
/// the underlying text changes; outlines are never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    /// The headings, in document order.
    headings: Vec<Heading>,
}

impl Outline {
    /// Extracts the outline of a markdown document.
    pub fn extract(content: &str) -> Self {
        Self {
            headings: extract_headings(content),
        }
    }

    /// Returns the headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Returns true if the document has no headings.
    ///
    /// Consumers render no outline panel at all in that case, rather than an
    /// empty one.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Returns the number of headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Returns an iterator over the headings in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Heading> {
        self.headings.iter()
    }

    /// Assigns outline identifiers to rendered heading elements.
    ///
    /// Elements must be supplied in document order, matching the outline.
    /// Assignment stops at the shorter of the two sequences, so a renderer
    /// that produced extra heading elements (or fewer) never panics.
    pub fn annotate<E: Anchored>(&self, elements: &mut [E]) {
        for (heading, element) in self.headings.iter().zip(elements.iter_mut()) {
            element.set_anchor(&heading.id);
        }
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}
