//! Annotation of rendered headings.
//!
//! After a document is rendered, the host's heading elements must carry the
//! same identifiers as the extracted outline so that in-page navigation
//! resolves correctly. The [`Anchored`] trait is the seam between the
//! outline and whatever element type the host renders (DOM node, TUI
//! widget, test double).

/// A rendered element that can carry an anchor identifier.
pub trait Anchored {
    /// Sets the element's anchor identifier.
    fn set_anchor(&mut self, id: &str);
}
