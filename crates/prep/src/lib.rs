//! prep: a terminal reader for a shelf of tutorial content.
//!
//! prep renders a hand-maintained collection of markdown tutorials
//! (language guides, data-structure and algorithm topics, system-design
//! articles, interview preparation) from the command line. A `prep.toml`
//! manifest catalogs the content; prep lists it by
//! category, routes topic names to entries, and renders entries with syntax
//! highlighting and a document outline.

#![warn(missing_docs)]

pub mod cli;
pub mod loader;
