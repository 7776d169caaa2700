//! Core diff types.
//!
//! A diff result is an ordered list of [`Segment`]s. Each segment is a
//! maximal run of characters that share one [`SegmentKind`].

use facet::Facet;

/// How a run of characters relates the original text to the modified text.
#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[facet(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present at the same position in both texts
    Unchanged,
    /// Present in the original text only
    Removed,
    /// Present in the modified text only
    Added,
}

impl SegmentKind {
    /// The lowercase name used in the JSON interchange shape.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Removed => "removed",
            Self::Added => "added",
        }
    }

    /// Returns true if this kind should be highlighted (not unchanged).
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Whether characters of this kind belong to the original text.
    pub const fn in_original(self) -> bool {
        matches!(self, Self::Unchanged | Self::Removed)
    }

    /// Whether characters of this kind belong to the modified text.
    pub const fn in_modified(self) -> bool {
        matches!(self, Self::Unchanged | Self::Added)
    }
}

impl core::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty run of characters sharing a single [`SegmentKind`].
#[derive(Facet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// The characters of this run
    pub value: String,

    /// Classification of every character in `value`
    #[facet(rename = "type")]
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a segment from a value and kind.
    pub fn new(value: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// Shorthand for an [`SegmentKind::Unchanged`] segment.
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self::new(value, SegmentKind::Unchanged)
    }

    /// Shorthand for a [`SegmentKind::Removed`] segment.
    pub fn removed(value: impl Into<String>) -> Self {
        Self::new(value, SegmentKind::Removed)
    }

    /// Shorthand for an [`SegmentKind::Added`] segment.
    pub fn added(value: impl Into<String>) -> Self {
        Self::new(value, SegmentKind::Added)
    }

    /// Number of characters (not bytes) in this segment.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// Character counts per [`SegmentKind`] over a diff result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Characters shared by both texts
    pub unchanged: usize,
    /// Characters only in the original text
    pub removed: usize,
    /// Characters only in the modified text
    pub added: usize,
}

impl DiffStats {
    /// Tally the characters of every segment.
    pub fn from_segments(segments: &[Segment]) -> Self {
        segments.iter().fold(Self::default(), |mut stats, segment| {
            let n = segment.char_len();
            match segment.kind {
                SegmentKind::Unchanged => stats.unchanged += n,
                SegmentKind::Removed => stats.removed += n,
                SegmentKind::Added => stats.added += n,
            }
            stats
        })
    }

    /// Returns true if nothing was removed or added.
    pub const fn is_identical(&self) -> bool {
        self.removed == 0 && self.added == 0
    }
}

/// Concatenate the segments that belong to the original text.
pub fn reconstruct_original(segments: &[Segment]) -> String {
    collect_where(segments, SegmentKind::in_original)
}

/// Concatenate the segments that belong to the modified text.
pub fn reconstruct_modified(segments: &[Segment]) -> String {
    collect_where(segments, SegmentKind::in_modified)
}

fn collect_where(segments: &[Segment], keep: impl Fn(SegmentKind) -> bool) -> String {
    segments
        .iter()
        .filter(|segment| keep(segment.kind))
        .map(|segment| segment.value.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_both_sides() {
        let segments = vec![
            Segment::unchanged("ca"),
            Segment::removed("t"),
            Segment::added("r"),
        ];
        assert_eq!(reconstruct_original(&segments), "cat");
        assert_eq!(reconstruct_modified(&segments), "car");
    }

    #[test]
    fn test_stats_count_chars_not_bytes() {
        let segments = vec![
            Segment::unchanged("h\u{e9}"),
            Segment::removed("\u{2014}"),
            Segment::added("-"),
        ];
        let stats = DiffStats::from_segments(&segments);
        assert_eq!(
            stats,
            DiffStats {
                unchanged: 2,
                removed: 1,
                added: 1
            }
        );
        assert!(!stats.is_identical());
    }

    #[test]
    fn test_kind_membership() {
        assert!(SegmentKind::Unchanged.in_original());
        assert!(SegmentKind::Unchanged.in_modified());
        assert!(SegmentKind::Removed.in_original());
        assert!(!SegmentKind::Removed.in_modified());
        assert!(!SegmentKind::Added.in_original());
        assert!(SegmentKind::Added.in_modified());
        assert!(!SegmentKind::Unchanged.is_changed());
    }
}
