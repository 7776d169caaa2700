//! Backends for diff rendering.
//!
//! The render loop only knows segment kinds. The backend decides how a
//! removed or added run is actually shown: not at all, with textual
//! markers, with terminal colors, or as HTML elements.

use core::fmt::{self, Write};

use owo_colors::OwoColorize;

use crate::{DiffSymbols, DiffTheme, SegmentKind};

/// A backend that decides how to render each kind of segment.
///
/// For every segment the renderer calls [`open`](Self::open), then
/// [`write_styled`](Self::write_styled) and
/// [`write_escape`](Self::write_escape) any number of times, then
/// [`close`](Self::close).
pub trait ColorBackend {
    /// Write text belonging to a segment of the given kind.
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, kind: SegmentKind) -> fmt::Result;

    /// Write the visible escape of an invisible character.
    fn write_escape<W: Write>(&self, w: &mut W, escape: &str, kind: SegmentKind) -> fmt::Result {
        self.write_styled(w, escape, kind)
    }

    /// Called before the first piece of a segment.
    fn open<W: Write>(&self, _w: &mut W, _kind: SegmentKind) -> fmt::Result {
        Ok(())
    }

    /// Called after the last piece of a segment.
    fn close<W: Write>(&self, _w: &mut W, _kind: SegmentKind) -> fmt::Result {
        Ok(())
    }
}

/// Plain backend - no styling, just the text of every segment.
///
/// Removed and added text is interleaved exactly as the segments are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, _kind: SegmentKind) -> fmt::Result {
        w.write_str(text)
    }
}

/// Marker backend - wraps changed runs in textual markers.
///
/// Use this for tests, logs and other non-terminal output.
#[derive(Debug, Clone, Default)]
pub struct MarkerBackend {
    symbols: DiffSymbols,
}

impl MarkerBackend {
    /// Create a marker backend with the given symbols.
    pub fn new(symbols: DiffSymbols) -> Self {
        Self { symbols }
    }
}

impl ColorBackend for MarkerBackend {
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, _kind: SegmentKind) -> fmt::Result {
        w.write_str(text)
    }

    fn open<W: Write>(&self, w: &mut W, kind: SegmentKind) -> fmt::Result {
        match self.symbols.markers(kind) {
            Some((open, _)) => w.write_str(open),
            None => Ok(()),
        }
    }

    fn close<W: Write>(&self, w: &mut W, kind: SegmentKind) -> fmt::Result {
        match self.symbols.markers(kind) {
            Some((_, close)) => w.write_str(close),
            None => Ok(()),
        }
    }
}

/// ANSI backend - emits ANSI escape codes for terminal colors.
///
/// Use this for terminal output with a color theme.
#[derive(Debug, Clone)]
pub struct AnsiBackend {
    theme: DiffTheme,
}

impl AnsiBackend {
    /// Create a new ANSI backend with the given theme.
    pub fn new(theme: DiffTheme) -> Self {
        Self { theme }
    }

    /// Create a new ANSI backend with the default (Tokyo Night) theme.
    pub fn with_default_theme() -> Self {
        Self::new(DiffTheme::default())
    }
}

impl Default for AnsiBackend {
    fn default() -> Self {
        Self::with_default_theme()
    }
}

impl ColorBackend for AnsiBackend {
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, kind: SegmentKind) -> fmt::Result {
        let Some(rgb) = self.theme.color_for(kind) else {
            return w.write_str(text);
        };
        if kind == SegmentKind::Removed && self.theme.strike_deleted {
            write!(w, "{}", text.color(rgb).strikethrough())
        } else {
            write!(w, "{}", text.color(rgb))
        }
    }

    fn write_escape<W: Write>(&self, w: &mut W, escape: &str, _kind: SegmentKind) -> fmt::Result {
        write!(w, "{}", escape.color(self.theme.escape))
    }
}

/// HTML backend - `<del>` for removed runs, `<ins>` for added runs.
///
/// All text is escaped. Unchanged text is written without a wrapper.
#[derive(Debug, Clone)]
pub struct HtmlBackend {
    removed_class: &'static str,
    added_class: &'static str,
    escape_class: &'static str,
}

impl Default for HtmlBackend {
    fn default() -> Self {
        Self {
            removed_class: "diff-removed",
            added_class: "diff-added",
            escape_class: "diff-invisible",
        }
    }
}

impl HtmlBackend {
    /// Use custom CSS classes for removed runs, added runs and revealed
    /// invisible characters.
    pub fn with_classes(
        removed_class: &'static str,
        added_class: &'static str,
        escape_class: &'static str,
    ) -> Self {
        Self {
            removed_class,
            added_class,
            escape_class,
        }
    }
}

impl ColorBackend for HtmlBackend {
    fn write_styled<W: Write>(&self, w: &mut W, text: &str, _kind: SegmentKind) -> fmt::Result {
        write_html_escaped(w, text)
    }

    fn write_escape<W: Write>(&self, w: &mut W, escape: &str, _kind: SegmentKind) -> fmt::Result {
        write!(w, "<span class=\"{}\">", self.escape_class)?;
        write_html_escaped(w, escape)?;
        w.write_str("</span>")
    }

    fn open<W: Write>(&self, w: &mut W, kind: SegmentKind) -> fmt::Result {
        match kind {
            SegmentKind::Unchanged => Ok(()),
            SegmentKind::Removed => write!(w, "<del class=\"{}\">", self.removed_class),
            SegmentKind::Added => write!(w, "<ins class=\"{}\">", self.added_class),
        }
    }

    fn close<W: Write>(&self, w: &mut W, kind: SegmentKind) -> fmt::Result {
        match kind {
            SegmentKind::Unchanged => Ok(()),
            SegmentKind::Removed => w.write_str("</del>"),
            SegmentKind::Added => w.write_str("</ins>"),
        }
    }
}

fn write_html_escaped<W: Write>(w: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (i, c) in text.char_indices() {
        let entity = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        w.write_str(&text[last..i])?;
        w.write_str(entity)?;
        last = i + c.len_utf8();
    }
    w.write_str(&text[last..])
}
