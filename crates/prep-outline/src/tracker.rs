//! Active-section tracking.
//!
//! As the reader scrolls, the host observes heading elements entering and
//! leaving a band in the upper-middle of the viewport and reports those
//! observations here. The tracker keeps the set of currently visible
//! headings and derives the single "active" one deterministically: the
//! visible heading closest to the top of the viewport wins, with document
//! order breaking exact ties.
//!
//! The tracker never touches the host environment. A browser host would
//! feed it from a viewport intersection observer configured with
//! [`ViewportBand`]; tests feed it synthesized [`VisibilityChange`] batches.
//! A host with no observation facility simply never calls
//! [`SectionTracker::observe`], and the tracker degrades to "no active
//! section".

use std::collections::HashMap;

use crate::Outline;

/// Vertical scroll offset applied when jumping to a heading, clearing the
/// fixed page header.
pub const HEADER_OFFSET: f64 = 80.0;

/// One visibility observation for a heading element.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityChange {
    /// The heading identifier (as assigned by the annotation pass).
    pub id: String,
    /// Whether the element is now intersecting the tracked band.
    pub intersecting: bool,
    /// The element's distance from the top of the viewport at observation
    /// time.
    pub top_offset: f64,
}

/// The viewport band within which a heading counts as "in view".
///
/// Fractions are measured inward from the viewport edges: the default band
/// starts 20% from the top and ends 35% from the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBand {
    /// Fraction of the viewport height excluded at the top.
    pub top_fraction: f64,
    /// Fraction of the viewport height excluded at the bottom.
    pub bottom_fraction: f64,
}

impl Default for ViewportBand {
    fn default() -> Self {
        Self {
            top_fraction: 0.20,
            bottom_fraction: 0.35,
        }
    }
}

impl ViewportBand {
    /// Renders the band as a CSS root-margin string for browser hosts.
    pub fn css_root_margin(&self) -> String {
        format!(
            "-{:.0}% 0% -{:.0}% 0%",
            self.top_fraction * 100.0,
            self.bottom_fraction * 100.0
        )
    }
}

/// Computes the scroll position that places a heading just below the fixed
/// header.
///
/// `element_top` is the element's offset from the top of the viewport;
/// `page_offset` is the current scroll position. Hosts animate the scroll to
/// the returned position rather than jumping.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Tracks which heading of an outline is currently the reading focus.
///
/// One tracker belongs to one rendered document; when the content changes,
/// the host drops the tracker and builds a fresh one from the new outline.
/// Trackers are never shared between views.
#[derive(Debug)]
pub struct SectionTracker {
    /// Document position of each known heading id.
    order: HashMap<String, usize>,
    /// Currently visible headings and their last observed top offset.
    visible: HashMap<String, f64>,
    /// The active heading, retained until a new one takes over.
    active: Option<String>,
}

impl SectionTracker {
    /// Creates a tracker for the headings of an outline.
    pub fn new(outline: &Outline) -> Self {
        let order = outline
            .iter()
            .enumerate()
            .map(|(position, heading)| (heading.id.clone(), position))
            .collect();
        Self {
            order,
            visible: HashMap::new(),
            active: None,
        }
    }

    /// Applies one observation batch and recomputes the active heading.
    ///
    /// Observations for identifiers the outline does not contain are
    /// ignored. Within a batch, later observations for the same id supersede
    /// earlier ones. When several headings are visible after the batch, the
    /// one with the smallest `top_offset` becomes active; exact offset ties
    /// fall back to document order. When no heading is visible the previous
    /// active heading is retained — the reader is between sections, and the
    /// outline keeps pointing at the section they came from.
    pub fn observe(&mut self, batch: &[VisibilityChange]) {
        for change in batch {
            if !self.order.contains_key(&change.id) {
                continue;
            }
            if change.intersecting {
                self.visible.insert(change.id.clone(), change.top_offset);
            } else {
                self.visible.remove(&change.id);
            }
        }

        let best = self.visible.iter().min_by(|(a_id, a_off), (b_id, b_off)| {
            a_off
                .total_cmp(b_off)
                .then_with(|| self.position(a_id).cmp(&self.position(b_id)))
        });

        if let Some((id, _)) = best {
            self.active = Some(id.clone());
        }
    }

    /// Returns the active heading identifier, if any.
    ///
    /// `None` until a heading has been observed intersecting — including the
    /// empty-outline case and hosts without an observation facility.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Document position of a known heading id.
    fn position(&self, id: &str) -> usize {
        self.order.get(id).copied().unwrap_or(usize::MAX)
    }
}
