//! The state behind one humanize screen: what was pasted, what came out.

use humanize_diff::DiffView;

use crate::tracing_macros::debug;
use crate::{NormalizeOptions, Normalizer};

/// Input text, the last normalized output, and how many characters the
/// normalizer changed.
///
/// Editing the input does not touch the output; only [`humanize`] and
/// [`clear`] do.
///
/// [`humanize`]: HumanizeSession::humanize
/// [`clear`]: HumanizeSession::clear
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumanizeSession {
    input: String,
    output: String,
    change_count: usize,
    options: NormalizeOptions,
}

impl HumanizeSession {
    /// An empty session using the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty session using the given options.
    pub fn with_options(options: NormalizeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Replace the options used by the next [`humanize`](Self::humanize).
    pub fn set_options(&mut self, options: NormalizeOptions) {
        self.options = options;
    }

    /// The current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The output of the last successful [`humanize`](Self::humanize).
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Characters changed by the last successful [`humanize`](Self::humanize).
    pub fn change_count(&self) -> usize {
        self.change_count
    }

    /// The options used by [`humanize`](Self::humanize).
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Whether there is anything besides whitespace to humanize.
    pub fn can_humanize(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Run `normalizer` over the input and store its result.
    ///
    /// Returns `false` and leaves the session untouched if the input is
    /// blank.
    pub fn humanize<N: Normalizer + ?Sized>(&mut self, normalizer: &N) -> bool {
        if !self.can_humanize() {
            return false;
        }
        let result = normalizer.normalize(&self.input, &self.options);
        debug!(count = result.count, "humanized session input");
        self.output = result.text;
        self.change_count = result.count;
        true
    }

    /// Reset input, output and change count. Options are kept.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.change_count = 0;
    }

    /// Number of characters in the input.
    pub fn input_chars(&self) -> usize {
        self.input.chars().count()
    }

    /// Number of characters in the output.
    pub fn output_chars(&self) -> usize {
        self.output.chars().count()
    }

    /// `"1 change made"`, `"N changes made"` or `"No changes needed"`, or
    /// `None` while there is no output to describe.
    pub fn change_summary(&self) -> Option<String> {
        if self.output.is_empty() {
            return None;
        }
        Some(match self.change_count {
            0 => "No changes needed".to_owned(),
            1 => "1 change made".to_owned(),
            n => format!("{n} changes made"),
        })
    }

    /// Diff of the input against the output, once both have text.
    pub fn diff(&self) -> Option<DiffView> {
        DiffView::new(&self.input, &self.output)
    }
}
