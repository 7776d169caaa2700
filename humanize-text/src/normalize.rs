//! Rewriting the characters that give machine-generated text away.

use facet::Facet;
use humanize_diff::reveal;

use crate::NormalizeOptions;
use crate::tracing_macros::{debug, trace};

/// Output of a [`Normalizer`].
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The rewritten text
    pub text: String,
    /// Number of input characters that were replaced or removed
    pub count: usize,
}

/// Something that rewrites text according to [`NormalizeOptions`].
///
/// Implementations must be total: every input produces an output.
pub trait Normalizer {
    /// Rewrite `input`, reporting how many characters changed.
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> Normalized;
}

impl<F> Normalizer for F
where
    F: Fn(&str, &NormalizeOptions) -> Normalized,
{
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> Normalized {
        self(input, options)
    }
}

/// The built-in normalizer.
///
/// Every input character is kept, replaced by an ASCII equivalent, or
/// removed. Each replaced or removed character adds one to
/// [`Normalized::count`], even if more than one option applies to it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanizeNormalizer;

impl Normalizer for HumanizeNormalizer {
    fn normalize(&self, input: &str, options: &NormalizeOptions) -> Normalized {
        let mut out = Output {
            text: String::with_capacity(input.len()),
            count: 0,
        };
        // Horizontal whitespace that might turn out to be trailing.
        let mut pending: Vec<Mapped> = Vec::new();

        for c in input.chars() {
            let mapped = map_char(c, options);

            // Removed characters emit nothing, so they never end a run.
            if mapped == Mapped::Remove {
                out.push(mapped);
                continue;
            }

            if options.transform_trailing_whitespace {
                if mapped.is_horizontal_space() {
                    pending.push(mapped);
                    continue;
                }
                if is_line_break(c) {
                    out.drop_all(&mut pending);
                }
            }

            out.flush(&mut pending);
            out.push(mapped);
        }
        out.drop_all(&mut pending);

        debug!(
            input_len = input.len(),
            output_len = out.text.len(),
            count = out.count,
            "normalized text"
        );
        Normalized {
            text: out.text,
            count: out.count,
        }
    }
}

/// Normalize `input` with the built-in [`HumanizeNormalizer`].
pub fn humanize_string(input: &str, options: &NormalizeOptions) -> Normalized {
    HumanizeNormalizer.normalize(input, options)
}

/// What happens to a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mapped {
    Keep(char),
    Replace(&'static str),
    Remove,
}

impl Mapped {
    fn is_horizontal_space(self) -> bool {
        match self {
            Self::Keep(c) => matches!(c, ' ' | '\t'),
            Self::Replace(s) => s == " ",
            Self::Remove => false,
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
        | '\u{0085}' // NEXT LINE
        | '\u{2028}' // LINE SEPARATOR
        | '\u{2029}' // PARAGRAPH SEPARATOR
    )
}

struct Output {
    text: String,
    count: usize,
}

impl Output {
    fn push(&mut self, mapped: Mapped) {
        match mapped {
            Mapped::Keep(c) => self.text.push(c),
            Mapped::Replace(s) => {
                self.text.push_str(s);
                self.count += 1;
            }
            Mapped::Remove => self.count += 1,
        }
    }

    fn flush(&mut self, pending: &mut Vec<Mapped>) {
        for mapped in pending.drain(..) {
            self.push(mapped);
        }
    }

    fn drop_all(&mut self, pending: &mut Vec<Mapped>) {
        if !pending.is_empty() {
            trace!(dropped = pending.len(), "dropping trailing whitespace");
        }
        self.count += pending.len();
        pending.clear();
    }
}

fn map_char(c: char, options: &NormalizeOptions) -> Mapped {
    let mapped = options
        .transform_hidden
        .then(|| map_hidden(c))
        .flatten()
        .or_else(|| options.transform_dashes.then(|| map_dash(c)).flatten())
        .or_else(|| options.transform_quotes.then(|| map_quote(c)).flatten())
        .or_else(|| options.keyboard_only.then(|| map_keyboard(c)).flatten());

    match mapped {
        Some(mapped) => mapped,
        None => Mapped::Keep(c),
    }
}

fn map_hidden(c: char) -> Option<Mapped> {
    if reveal::is_zero_width(c) {
        Some(Mapped::Remove)
    } else if reveal::is_space_like(c) {
        Some(Mapped::Replace(" "))
    } else {
        None
    }
}

fn map_dash(c: char) -> Option<Mapped> {
    match c {
        '\u{2010}'..='\u{2015}' // HYPHEN .. HORIZONTAL BAR, incl. en and em dash
        | '\u{2212}' // MINUS SIGN
        => Some(Mapped::Replace("-")),
        _ => None,
    }
}

fn map_quote(c: char) -> Option<Mapped> {
    match c {
        '\u{2018}' // LEFT SINGLE QUOTATION MARK
        | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
        | '\u{201A}' // SINGLE LOW-9 QUOTATION MARK
        | '\u{201B}' // SINGLE HIGH-REVERSED-9 QUOTATION MARK
        | '\u{2032}' // PRIME
        => Some(Mapped::Replace("'")),

        '\u{201C}' // LEFT DOUBLE QUOTATION MARK
        | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
        | '\u{201E}' // DOUBLE LOW-9 QUOTATION MARK
        | '\u{201F}' // DOUBLE HIGH-REVERSED-9 QUOTATION MARK
        | '\u{2033}' // DOUBLE PRIME
        | '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
        | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
        => Some(Mapped::Replace("\"")),

        _ => None,
    }
}

fn map_keyboard(c: char) -> Option<Mapped> {
    match c {
        '\u{2026}' => Some(Mapped::Replace("...")), // HORIZONTAL ELLIPSIS
        c if c.is_ascii_graphic() || c.is_ascii_whitespace() => None,
        _ => Some(Mapped::Remove),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, options: NormalizeOptions) -> Normalized {
        humanize_string(input, &options)
    }

    #[test]
    fn test_plain_ascii_is_untouched() {
        let result = run("Hello, world!\nSecond line.", NormalizeOptions::default());
        assert_eq!(result.text, "Hello, world!\nSecond line.");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_hidden_characters() {
        let options = NormalizeOptions::none().with_hidden(true);
        let result = run("zero\u{200B}width\u{00A0}space\u{FEFF}", options);
        assert_eq!(result.text, "zerowidth space");
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_hidden_covers_every_revealed_char() {
        let options = NormalizeOptions::none().with_hidden(true);
        let invisible = ('\0'..='\u{FFFF}').filter(|&c| reveal::is_invisible(c));
        for c in invisible {
            let result = run(&format!("a{c}b"), options);
            assert!(result.text == "ab" || result.text == "a b", "{c:?}");
            assert_eq!(result.count, 1, "{c:?}");
        }
    }

    #[test]
    fn test_hidden_disabled_keeps_them() {
        let result = run("a\u{200B}b", NormalizeOptions::none());
        assert_eq!(result.text, "a\u{200B}b");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_trailing_whitespace() {
        let options = NormalizeOptions::none().with_trailing_whitespace(true);
        let result = run("one  \ntwo\t\r\nthree   ", options);
        assert_eq!(result.text, "one\ntwo\r\nthree");
        assert_eq!(result.count, 6);
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let options = NormalizeOptions::none().with_trailing_whitespace(true);
        let result = run("a  b\tc", options);
        assert_eq!(result.text, "a  b\tc");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_trailing_nbsp_counts_once() {
        let result = run("end\u{00A0}\n", NormalizeOptions::default());
        assert_eq!(result.text, "end\n");
        assert_eq!(result.count, 1);
    }

    #[test]
    fn test_removed_char_does_not_hide_trailing_space() {
        let result = run("a \u{200B}\nb", NormalizeOptions::default());
        assert_eq!(result.text, "a\nb");
        assert_eq!(result.count, 2);
    }

    #[test]
    fn test_unicode_line_breaks_end_a_line() {
        let options = NormalizeOptions::none().with_trailing_whitespace(true);
        for brk in ['\u{2028}', '\u{2029}', '\u{0085}'] {
            let kept = run(&format!("a{brk}"), options);
            assert_eq!(kept.text, format!("a{brk}"));
            assert_eq!(kept.count, 0);

            let trimmed = run(&format!("a \t{brk}b"), options);
            assert_eq!(trimmed.text, format!("a{brk}b"));
            assert_eq!(trimmed.count, 2);
        }
    }

    #[test]
    fn test_nbsp_survives_trailing_trim_without_hidden() {
        let options = NormalizeOptions::none().with_trailing_whitespace(true);
        let result = run("a\u{00A0}\nb \u{3000}", options);
        assert_eq!(result.text, "a\u{00A0}\nb \u{3000}");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_dashes() {
        let options = NormalizeOptions::none().with_dashes(true);
        let result = run("a \u{2014} b \u{2013} c\u{2212}1", options);
        assert_eq!(result.text, "a - b - c-1");
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_quotes() {
        let options = NormalizeOptions::none().with_quotes(true);
        let result = run("\u{201C}It\u{2019}s\u{201D} \u{00AB}ok\u{00BB}", options);
        assert_eq!(result.text, "\"It's\" \"ok\"");
        assert_eq!(result.count, 5);
    }

    #[test]
    fn test_keyboard_only() {
        let options = NormalizeOptions::default().with_keyboard_only(true);
        let result = run("Wait\u{2026} caf\u{e9} \u{2014} \u{1F600}!", options);
        assert_eq!(result.text, "Wait... caf - !");
        assert_eq!(result.count, 4);
    }

    #[test]
    fn test_keyboard_only_off_keeps_unicode() {
        let result = run("caf\u{e9}\u{2026}", NormalizeOptions::default());
        assert_eq!(result.text, "caf\u{e9}\u{2026}");
        assert_eq!(result.count, 0);
    }

    #[test]
    fn test_result_serializes_as_text_and_count() {
        let result = run("a\u{2013}b", NormalizeOptions::default());
        assert_eq!(
            facet_json::to_string(&result).unwrap(),
            r#"{"text":"a-b","count":1}"#
        );
    }

    #[test]
    fn test_closure_is_a_normalizer() {
        let upper = |input: &str, _: &NormalizeOptions| Normalized {
            text: input.to_uppercase(),
            count: 0,
        };
        let result = upper.normalize("abc", &NormalizeOptions::default());
        assert_eq!(result.text, "ABC");
    }
}
