//! Toggles for the humanize normalizer.

use core::fmt::{self, Display};

use facet::Facet;

/// Which groups of characters the normalizer rewrites.
///
/// The default enables everything except keyboard-only mode. Missing fields
/// in JSON fall back to the same defaults.
#[derive(Facet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalizeOptions {
    /// Remove zero-width characters and turn exotic spaces into plain spaces
    #[facet(default = true)]
    pub transform_hidden: bool,

    /// Remove spaces and tabs before a line break or the end of the text
    #[facet(default = true)]
    pub transform_trailing_whitespace: bool,

    /// Turn en/em dashes and friends into `-`
    #[facet(default = true)]
    pub transform_dashes: bool,

    /// Turn curly and angle quotes into `'` and `"`
    #[facet(default = true)]
    pub transform_quotes: bool,

    /// Additionally spell out `…` as `...` and drop anything that cannot be
    /// typed on a US keyboard
    #[facet(default = false)]
    pub keyboard_only: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            transform_hidden: true,
            transform_trailing_whitespace: true,
            transform_dashes: true,
            transform_quotes: true,
            keyboard_only: false,
        }
    }
}

impl NormalizeOptions {
    /// Options that leave every character alone.
    pub const fn none() -> Self {
        Self {
            transform_hidden: false,
            transform_trailing_whitespace: false,
            transform_dashes: false,
            transform_quotes: false,
            keyboard_only: false,
        }
    }

    /// Set whether hidden characters are transformed.
    pub const fn with_hidden(mut self, enabled: bool) -> Self {
        self.transform_hidden = enabled;
        self
    }

    /// Set whether trailing whitespace is removed.
    pub const fn with_trailing_whitespace(mut self, enabled: bool) -> Self {
        self.transform_trailing_whitespace = enabled;
        self
    }

    /// Set whether dashes are transformed.
    pub const fn with_dashes(mut self, enabled: bool) -> Self {
        self.transform_dashes = enabled;
        self
    }

    /// Set whether quotes are transformed.
    pub const fn with_quotes(mut self, enabled: bool) -> Self {
        self.transform_quotes = enabled;
        self
    }

    /// Set keyboard-only mode.
    pub const fn with_keyboard_only(mut self, enabled: bool) -> Self {
        self.keyboard_only = enabled;
        self
    }

    /// Read options from a JSON object such as `{"transform_dashes": false}`.
    pub fn from_json(input: &str) -> Result<Self, OptionsError> {
        facet_json::from_str(input).map_err(|err| OptionsError {
            message: err.to_string(),
        })
    }
}

/// The options JSON could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsError {
    /// Parser message
    pub message: String,
}

impl Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid normalize options: {}", self.message)
    }
}

impl std::error::Error for OptionsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_humanize_button() {
        let options = NormalizeOptions::default();
        assert!(options.transform_hidden);
        assert!(options.transform_trailing_whitespace);
        assert!(options.transform_dashes);
        assert!(options.transform_quotes);
        assert!(!options.keyboard_only);
    }

    #[test]
    fn test_builders() {
        let options = NormalizeOptions::none()
            .with_quotes(true)
            .with_keyboard_only(true);
        assert_eq!(
            options,
            NormalizeOptions {
                transform_hidden: false,
                transform_trailing_whitespace: false,
                transform_dashes: false,
                transform_quotes: true,
                keyboard_only: true,
            }
        );
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = NormalizeOptions::from_json(r#"{"transform_dashes": false}"#).unwrap();
        assert_eq!(options, NormalizeOptions::default().with_dashes(false));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = NormalizeOptions::from_json("[1, 2]").unwrap_err();
        assert!(err.to_string().starts_with("invalid normalize options"));
    }
}
