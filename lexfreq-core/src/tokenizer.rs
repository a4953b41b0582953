//! Tokenization and text normalization.
//!
//! Splits raw text into analysis tokens (words or single characters)
//! under the options in [`AnalyzerConfig`]. Punctuation stripping is a
//! separate pre-tokenization step so that callers can run the entropy
//! estimator over the same post-filter, pre-split text.
//!
//! License: MIT OR Apache-2.0

use crate::config::AnalyzerConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Everything except word characters and apostrophes counts as punctuation.
static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w']").expect("punctuation pattern is valid")
});

/// Replaces each punctuation character with exactly one space.
///
/// Apostrophes are spared so contractions survive as single tokens. The
/// one-space-per-character contract matters: substituting with the empty
/// string would merge tokens that were only separated by punctuation.
pub fn strip_punctuation(text: &str) -> String {
    NON_WORD.replace_all(text, " ").into_owned()
}

/// Splits text into tokens according to the given configuration.
///
/// Line breaks are first normalized to single spaces. In word mode the
/// text is split on the space character, so runs of spaces produce
/// empty-string tokens; [`count_frequency`](crate::frequency::count_frequency)
/// skips those. In character mode every remaining character, spaces
/// included, becomes its own token.
///
/// Zero-length input (after normalization) yields an empty sequence:
/// nothing to analyze, not an error.
pub fn tokenize(text: &str, config: &AnalyzerConfig) -> Vec<String> {
    let mut normalized = text.replace('\n', " ");
    if config.remove_space {
        normalized.retain(|c| c != ' ');
    }
    if normalized.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = if config.word_split {
        normalized.split(' ').map(str::to_string).collect()
    } else {
        normalized.chars().map(String::from).collect()
    };

    if config.ignore_case {
        tokens.into_iter().map(|t| t.to_lowercase()).collect()
    } else {
        tokens
    }
}
