//! Errors for diff results that did not come from [`compute_diff`](crate::compute_diff).

use core::fmt::{self, Display};

use crate::SegmentKind;

/// A diff result failed to decode, encode or validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentError {
    /// The specific kind of error
    pub kind: SegmentErrorKind,
    /// Index of the offending segment, when one can be named
    pub index: Option<usize>,
}

impl SegmentError {
    /// Create an error pointing at a specific segment.
    pub const fn at(kind: SegmentErrorKind, index: usize) -> Self {
        Self {
            kind,
            index: Some(index),
        }
    }

    /// Create an error that is not tied to a segment.
    pub const fn without_index(kind: SegmentErrorKind) -> Self {
        Self { kind, index: None }
    }
}

impl Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "segment {index}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for SegmentError {}

/// Specific error kinds for diff results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentErrorKind {
    /// The JSON input was not a list of `{value, type}` objects
    Decode(String),
    /// The segments could not be written as JSON
    Encode(String),
    /// A segment carries no characters
    EmptyValue,
    /// A segment has the same kind as the one before it
    AdjacentSameKind(SegmentKind),
}

impl Display for SegmentErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(msg) => write!(f, "invalid diff JSON: {msg}"),
            Self::Encode(msg) => write!(f, "failed to encode diff as JSON: {msg}"),
            Self::EmptyValue => write!(f, "empty segment value"),
            Self::AdjacentSameKind(kind) => {
                write!(f, "follows another `{kind}` segment; runs must be merged")
            }
        }
    }
}
