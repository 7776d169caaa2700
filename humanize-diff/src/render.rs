//! Rendering a diff result through a [`ColorBackend`].

use core::fmt::Write;

use crate::reveal::{self, Piece};
use crate::{AnsiBackend, ColorBackend, MarkerBackend, PlainBackend, Segment};

/// Options for rendering a diff result.
#[derive(Debug, Clone)]
pub struct RenderOptions<B: ColorBackend> {
    /// Backend that styles each segment
    pub backend: B,
    /// Write invisible characters in removed/added runs as `⟨U+XXXX⟩`
    pub reveal_invisible: bool,
}

impl Default for RenderOptions<AnsiBackend> {
    fn default() -> Self {
        Self::with_backend(AnsiBackend::default())
    }
}

impl RenderOptions<PlainBackend> {
    /// Create options with plain backend (no styling).
    pub fn plain() -> Self {
        Self::with_backend(PlainBackend)
    }
}

impl RenderOptions<MarkerBackend> {
    /// Create options with the default `[-old-]{+new+}` markers.
    pub fn markers() -> Self {
        Self::with_backend(MarkerBackend::default())
    }
}

impl<B: ColorBackend> RenderOptions<B> {
    /// Create options with a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            reveal_invisible: false,
        }
    }

    /// Set whether invisible characters in changed runs are escaped.
    pub fn with_reveal_invisible(mut self, reveal_invisible: bool) -> Self {
        self.reveal_invisible = reveal_invisible;
        self
    }
}

/// Render segments to a writer.
///
/// Segments are written in order, one backend `open`/`close` pair each;
/// nothing is merged or reordered.
pub fn render<W: Write, B: ColorBackend>(
    segments: &[Segment],
    w: &mut W,
    opts: &RenderOptions<B>,
) -> core::fmt::Result {
    let backend = &opts.backend;
    for segment in segments {
        let kind = segment.kind;
        backend.open(w, kind)?;
        if opts.reveal_invisible && kind.is_changed() {
            let mut escape = String::new();
            for piece in reveal::pieces(&segment.value) {
                match piece {
                    Piece::Visible(text) => backend.write_styled(w, text, kind)?,
                    Piece::Invisible(c) => {
                        escape.clear();
                        reveal::write_escape(&mut escape, c)?;
                        backend.write_escape(w, &escape, kind)?;
                    }
                }
            }
        } else {
            backend.write_styled(w, &segment.value, kind)?;
        }
        backend.close(w, kind)?;
    }
    Ok(())
}

/// Render segments to a String.
pub fn render_to_string<B: ColorBackend>(segments: &[Segment], opts: &RenderOptions<B>) -> String {
    let mut out = String::new();
    render(segments, &mut out, opts).expect("writing to String cannot fail");
    out
}
