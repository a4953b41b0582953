//! One-shot text analysis.
//!
//! Glues the tokenizer, frequency counter, and the `lexfreq-stats`
//! estimators into a single pure call for non-interactive use. The three
//! post-distribution computations (entropy, hapax ratio, Zipfian score)
//! are independent read-only passes over the same immutable data, so a
//! caller that needs to interleave them with other work may run them in
//! any order through the individual wrappers below.
//!
//! License: MIT OR Apache-2.0

use crate::config::AnalyzerConfig;
use crate::frequency::{count_frequency, Distribution, FrequencyEntry};
use crate::tokenizer::{strip_punctuation, tokenize};
use lexfreq_stats::entropy::{shannon_entropy, EntropyBand};
use lexfreq_stats::zipf::ZipfVerdict;
use log::{debug, info};

/// The derived, read-only result bundle of a single analysis invocation.
///
/// Any field that cannot be computed from empty input is `None`, which
/// presentation layers render as "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Frequency distribution, sorted by count descending.
    pub distribution: Distribution,
    /// Shannon entropy of the post-punctuation-filter text, 0..=8 scale.
    pub entropy: Option<f64>,
    /// Interpretation band for `entropy`.
    pub entropy_band: Option<EntropyBand>,
    /// Percentage of tokens that occur exactly once.
    pub hapax_percent: Option<u8>,
    /// Whether the distribution looks Zipfian.
    pub zipf_verdict: Option<ZipfVerdict>,
    /// Whitespace-delimited word count of the analyzed text.
    pub word_count: usize,
    /// Character count of the analyzed text.
    pub char_count: usize,
}

/// Estimates the Shannon entropy of a text's character multiset.
///
/// Returns `None` for empty input, where entropy is undefined; callers
/// surface that as "N/A" rather than a number.
pub fn estimate_entropy(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    Some(shannon_entropy(text))
}

/// Percentage of hapax legomena in a distribution, or `None` when empty.
pub fn hapax_percent(distribution: &[FrequencyEntry]) -> Option<u8> {
    let counts: Vec<u64> = distribution.iter().map(|e| e.count).collect();
    lexfreq_stats::hapax::hapax_percent(&counts)
}

/// Zipfian verdict for a descending distribution, or `None` when empty.
pub fn zipfian_verdict(distribution: &[FrequencyEntry]) -> Option<ZipfVerdict> {
    let counts: Vec<u64> = distribution.iter().map(|e| e.count).collect();
    lexfreq_stats::zipf::zipfian_verdict(&counts)
}

/// Runs the full analysis suite over a text under the given configuration.
///
/// Pure and synchronous: same text and configuration always produce the
/// same report, and the configuration is read-only for the duration of
/// the call. Entropy and the word/character counts are computed over the
/// post-punctuation-filter, pre-tokenization text, exactly as the
/// distribution sees it.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> AnalysisReport {
    info!("Starting analysis of {} bytes", text.len());

    let filtered: std::borrow::Cow<'_, str> = if config.remove_punctuation {
        std::borrow::Cow::Owned(strip_punctuation(text))
    } else {
        std::borrow::Cow::Borrowed(text)
    };

    let tokens = tokenize(&filtered, config);
    let distribution = count_frequency(&tokens);
    debug!(
        "Tokenized into {} tokens, {} distinct",
        tokens.len(),
        distribution.len()
    );

    let entropy = estimate_entropy(&filtered);
    let report = AnalysisReport {
        entropy,
        entropy_band: entropy.map(EntropyBand::classify),
        hapax_percent: hapax_percent(&distribution),
        zipf_verdict: zipfian_verdict(&distribution),
        word_count: filtered.split_whitespace().count(),
        char_count: filtered.chars().count(),
        distribution,
    };

    info!("Analysis complete");
    report
}
