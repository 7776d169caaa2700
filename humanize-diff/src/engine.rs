//! Positional character diff.
//!
//! Both texts are walked index by index. No alignment is searched for: an
//! insertion near the start shows up as a long run of replacements rather
//! than a single addition.

use crate::tracing_macros::{debug, trace};
use crate::{Segment, SegmentKind};

/// Compare `original` and `modified` character by character.
///
/// At each position the two characters are classified as unchanged (equal),
/// removed then added (both present, different), removed (modified is
/// exhausted) or added (original is exhausted). Consecutive characters of
/// the same kind are merged into one [`Segment`], so the result never holds
/// an empty segment or two adjacent segments of the same kind.
///
/// ```
/// use humanize_diff::{Segment, compute_diff};
///
/// assert_eq!(
///     compute_diff("cat", "car"),
///     vec![
///         Segment::unchanged("ca"),
///         Segment::removed("t"),
///         Segment::added("r"),
///     ]
/// );
/// ```
pub fn compute_diff(original: &str, modified: &str) -> Vec<Segment> {
    let mut builder = SegmentBuilder::default();
    let mut from = original.chars();
    let mut to = modified.chars();

    loop {
        match (from.next(), to.next()) {
            (Some(a), Some(b)) if a == b => builder.push(a, SegmentKind::Unchanged),
            (Some(a), Some(b)) => {
                builder.push(a, SegmentKind::Removed);
                builder.push(b, SegmentKind::Added);
            }
            (Some(a), None) => builder.push(a, SegmentKind::Removed),
            (None, Some(b)) => builder.push(b, SegmentKind::Added),
            (None, None) => break,
        }
    }

    let segments = builder.finish();
    debug!(
        original_len = original.len(),
        modified_len = modified.len(),
        segments = segments.len(),
        "computed positional diff"
    );
    segments
}

/// Accumulates classified characters into maximal runs.
#[derive(Debug, Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    /// Append `c` to the last segment if it has the same kind, otherwise
    /// start a new one.
    fn push(&mut self, c: char, kind: SegmentKind) {
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => last.value.push(c),
            _ => {
                trace!(?kind, "starting segment");
                self.segments.push(Segment::new(c, kind));
            }
        }
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
