//! Textual markers around changed runs.

use crate::SegmentKind;

/// Markers wrapped around removed and added runs when colors are not
/// available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSymbols {
    /// Opens a removed run (default: "[-")
    pub removed_open: &'static str,

    /// Closes a removed run (default: "-]")
    pub removed_close: &'static str,

    /// Opens an added run (default: "{+")
    pub added_open: &'static str,

    /// Closes an added run (default: "+}")
    pub added_close: &'static str,
}

impl Default for DiffSymbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DiffSymbols {
    /// `git diff --word-diff=plain` style: `[-old-]{+new+}`
    pub const STANDARD: Self = Self {
        removed_open: "[-",
        removed_close: "-]",
        added_open: "{+",
        added_close: "+}",
    };

    /// CriticMarkup style: `{--old--}{++new++}`
    pub const CRITIC: Self = Self {
        removed_open: "{--",
        removed_close: "--}",
        added_open: "{++",
        added_close: "++}",
    };

    /// The opening and closing marker for a kind, if it is marked at all.
    pub const fn markers(&self, kind: SegmentKind) -> Option<(&'static str, &'static str)> {
        match kind {
            SegmentKind::Unchanged => None,
            SegmentKind::Removed => Some((self.removed_open, self.removed_close)),
            SegmentKind::Added => Some((self.added_open, self.added_close)),
        }
    }
}
