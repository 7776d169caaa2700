#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod normalize;
mod options;
mod session;
mod tracing_macros;

pub use normalize::{HumanizeNormalizer, Normalized, Normalizer, humanize_string};
pub use options::{NormalizeOptions, OptionsError};
pub use session::HumanizeSession;

// Re-export the diff types a session hands out
pub use humanize_diff::{DiffView, Segment, SegmentKind};
