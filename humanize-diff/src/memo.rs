//! Recompute-on-change wrapper around [`compute_diff`].

use crate::tracing_macros::trace;
use crate::{Segment, compute_diff};

/// Keeps the diff of the last `(original, modified)` pair.
///
/// Asking for the same pair again returns the stored result; asking for a
/// different pair replaces it. Only one pair is ever kept, matching a view
/// that re-diffs whenever either of its inputs changes.
#[derive(Debug, Default)]
pub struct DiffCache {
    last: Option<CachedDiff>,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CachedDiff {
    original: String,
    modified: String,
    segments: Vec<Segment>,
}

impl DiffCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the diff of `original` against `modified`, computing it only
    /// if the pair differs from the previous call.
    pub fn diff(&mut self, original: &str, modified: &str) -> &[Segment] {
        let is_hit = self
            .last
            .as_ref()
            .is_some_and(|cached| cached.original == original && cached.modified == modified);

        if is_hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            trace!(misses = self.misses, "diff cache miss");
            self.last = None;
        }

        let cached = self.last.get_or_insert_with(|| CachedDiff {
            original: original.to_owned(),
            modified: modified.to_owned(),
            segments: compute_diff(original, modified),
        });
        &cached.segments
    }

    /// Forget the stored pair.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Number of calls answered from the stored pair.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of calls that had to compute a fresh diff.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pair_is_reused() {
        let mut cache = DiffCache::new();
        let first = cache.diff("cat", "car").to_vec();
        let second = cache.diff("cat", "car").to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_changed_input_recomputes() {
        let mut cache = DiffCache::new();
        cache.diff("cat", "car");
        let segments = cache.diff("cat", "cat").to_vec();
        assert_eq!(segments, vec![Segment::unchanged("cat")]);
        assert_eq!(cache.misses(), 2);

        cache.clear();
        cache.diff("cat", "cat");
        assert_eq!(cache.misses(), 3);
    }
}
