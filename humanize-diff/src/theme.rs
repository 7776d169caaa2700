//! Color themes for diff rendering.

use owo_colors::Rgb;

use crate::SegmentKind;

/// Color theme for diff rendering.
///
/// Defines colors for each kind of change. The default uses
/// Tokyo Night colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for removed content (default: red)
    pub deleted: Rgb,

    /// Color for added content (default: green)
    pub inserted: Rgb,

    /// Color for revealed invisible characters (default: gray)
    pub escape: Rgb,

    /// Whether removed content is also struck through
    pub strike_deleted: bool,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}

impl DiffTheme {
    /// Tokyo Night color theme (default).
    pub const TOKYO_NIGHT: Self = Self {
        deleted: Rgb(247, 118, 142),  // red
        inserted: Rgb(158, 206, 106), // green
        escape: Rgb(86, 95, 137),     // gray
        strike_deleted: true,
    };

    /// GitHub light palette, closer to the red/green highlight of a web view.
    pub const GITHUB_LIGHT: Self = Self {
        deleted: Rgb(207, 34, 46),
        inserted: Rgb(26, 127, 55),
        escape: Rgb(110, 119, 129),
        strike_deleted: false,
    };

    /// Get the color for a segment kind. Unchanged text is never colored.
    pub fn color_for(&self, kind: SegmentKind) -> Option<Rgb> {
        match kind {
            SegmentKind::Unchanged => None,
            SegmentKind::Removed => Some(self.deleted),
            SegmentKind::Added => Some(self.inserted),
        }
    }
}
