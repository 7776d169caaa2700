//! Making invisible characters visible inside changed runs.
//!
//! Removing a zero-width space or swapping a no-break space for a regular
//! one produces a diff whose changed runs look empty or identical. When
//! revealing is on, such characters are written as `⟨U+XXXX⟩` escapes.

use core::fmt::Write;

/// Whether `c` renders as nothing, or as something indistinguishable from
/// a regular space.
pub fn is_invisible(c: char) -> bool {
    is_zero_width(c) || is_space_like(c)
}

/// Characters that take up no room at all.
pub fn is_zero_width(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' // ZERO WIDTH SPACE
        | '\u{200C}' // ZERO WIDTH NON-JOINER
        | '\u{200D}' // ZERO WIDTH JOINER
        | '\u{2060}' // WORD JOINER
        | '\u{FEFF}' // BOM / ZERO WIDTH NO-BREAK SPACE
        | '\u{00AD}' // SOFT HYPHEN
    )
}

/// Characters that look like a regular space but are not U+0020.
pub fn is_space_like(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' // NO-BREAK SPACE
        | '\u{2000}'..='\u{200A}' // EN QUAD .. HAIR SPACE
        | '\u{202F}' // NARROW NO-BREAK SPACE
        | '\u{205F}' // MEDIUM MATHEMATICAL SPACE
        | '\u{3000}' // IDEOGRAPHIC SPACE
    )
}

/// Write the visible escape for an invisible character.
pub fn write_escape<W: Write>(w: &mut W, c: char) -> core::fmt::Result {
    write!(w, "\u{27E8}U+{:04X}\u{27E9}", c as u32)
}

/// Split `text` into visible runs and invisible characters, in order.
pub(crate) fn pieces(text: &str) -> impl Iterator<Item = Piece<'_>> {
    let mut rest = text;
    core::iter::from_fn(move || {
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        if is_invisible(first) {
            rest = &rest[first.len_utf8()..];
            return Some(Piece::Invisible(first));
        }
        let end = chars
            .find(|&(_, c)| is_invisible(c))
            .map_or(rest.len(), |(i, _)| i);
        let (visible, tail) = rest.split_at(end);
        rest = tail;
        Some(Piece::Visible(visible))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Visible(&'a str),
    Invisible(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_invisible() {
        assert!(is_invisible('\u{200B}'));
        assert!(is_invisible('\u{00A0}'));
        assert!(is_invisible('\u{2009}'));
        assert!(!is_invisible(' '));
        assert!(!is_invisible('a'));
        assert!(!is_invisible('\n'));
    }

    #[test]
    fn test_zero_width_and_space_like_are_disjoint() {
        assert!(is_zero_width('\u{FEFF}'));
        assert!(!is_space_like('\u{FEFF}'));
        assert!(is_space_like('\u{3000}'));
        assert!(!is_zero_width('\u{3000}'));
        assert!(!is_space_like(' '));
    }

    #[test]
    fn test_write_escape() {
        let mut out = String::new();
        write_escape(&mut out, '\u{200B}').unwrap();
        assert_eq!(out, "\u{27E8}U+200B\u{27E9}");
    }

    #[test]
    fn test_pieces() {
        let collected: Vec<_> = pieces("a\u{200B}bc\u{00A0}\u{00A0}").collect();
        assert_eq!(
            collected,
            vec![
                Piece::Visible("a"),
                Piece::Invisible('\u{200B}'),
                Piece::Visible("bc"),
                Piece::Invisible('\u{00A0}'),
                Piece::Invisible('\u{00A0}'),
            ]
        );
        assert_eq!(pieces("").count(), 0);
    }
}
