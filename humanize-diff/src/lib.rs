#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod backend;
mod engine;
mod error;
mod memo;
mod render;
mod result;
pub mod reveal;
mod symbols;
mod theme;
mod tracing_macros;
mod types;
mod view;

pub use backend::{AnsiBackend, ColorBackend, HtmlBackend, MarkerBackend, PlainBackend};
pub use engine::compute_diff;
pub use error::{SegmentError, SegmentErrorKind};
pub use memo::DiffCache;
pub use render::{RenderOptions, render, render_to_string};
pub use result::{from_json, to_json, validate};
pub use symbols::DiffSymbols;
pub use theme::DiffTheme;
pub use types::{DiffStats, Segment, SegmentKind, reconstruct_modified, reconstruct_original};
pub use view::DiffView;
