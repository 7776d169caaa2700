//! A before/after pair ready to be shown.

use core::fmt;

use crate::{
    ColorBackend, DiffStats, MarkerBackend, RenderOptions, Segment, compute_diff, render,
    render_to_string,
};

/// The diff of a non-empty original against a non-empty modified text.
///
/// There is nothing to show until both sides have text, so
/// [`DiffView::new`] returns `None` if either side is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    segments: Vec<Segment>,
}

impl DiffView {
    /// Diff `original` against `modified`, or `None` if either is empty.
    pub fn new(original: &str, modified: &str) -> Option<Self> {
        if original.is_empty() || modified.is_empty() {
            return None;
        }
        Some(Self {
            segments: compute_diff(original, modified),
        })
    }

    /// The segments in display order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the view, returning its segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Character counts per kind.
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_segments(&self.segments)
    }

    /// Render with the given options.
    pub fn render<B: ColorBackend>(&self, opts: &RenderOptions<B>) -> String {
        render_to_string(&self.segments, opts)
    }
}

impl fmt::Display for DiffView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = RenderOptions::with_backend(MarkerBackend::default());
        render(&self.segments, f, &opts)
    }
}
