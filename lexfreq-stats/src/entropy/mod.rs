// lexfreq-stats/src/entropy/mod.rs
use alloc::collections::BTreeMap;
use libm::log2;

/// Upper bound of the `Low` band (exclusive).
pub const BAND_LOW_MAX: f64 = 3.4;
/// Upper bound of the `Medium` band (exclusive). Text in `[3.4, 5.1)` may
/// be written language.
pub const BAND_MEDIUM_MAX: f64 = 5.1;
/// Upper bound of the `High` band (exclusive). Anything at or above this
/// is likely encrypted or compressed data.
pub const BAND_HIGH_MAX: f64 = 7.5;

/// Calculates the Shannon entropy of a string over its character multiset.
///
/// Every distinct `char` of the full string gets its own bucket; the
/// result is in bits per symbol on a 0..=8 scale for byte-like alphabets.
/// An empty string has no symbols and yields 0.0 at this layer; callers
/// that need a distinguished "not applicable" value must test for empty
/// input themselves.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut frequencies: BTreeMap<char, usize> = BTreeMap::new();
    let mut len = 0usize;
    for c in text.chars() {
        *frequencies.entry(c).or_insert(0) += 1;
        len += 1;
    }

    if len == 0 {
        return 0.0;
    }

    let len = len as f64;
    let mut entropy = 0.0;
    for &count in frequencies.values() {
        let p = count as f64 / len;
        entropy -= p * log2(p);
    }

    entropy
}

/// Interpretation band for an entropy estimate.
///
/// The boundaries are empirically tuned heuristics carried over verbatim
/// for output compatibility, not exact science.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyBand {
    /// Exactly zero: all symbols are the same.
    None,
    Low,
    /// May be written language.
    Medium,
    /// Likely randomly generated.
    High,
    /// Likely encrypted or compressed data.
    VeryHigh,
}

impl EntropyBand {
    /// Classifies a raw entropy estimate into its interpretation band.
    pub fn classify(entropy: f64) -> Self {
        if entropy == 0.0 {
            EntropyBand::None
        } else if entropy < BAND_LOW_MAX {
            EntropyBand::Low
        } else if entropy < BAND_MEDIUM_MAX {
            EntropyBand::Medium
        } else if entropy < BAND_HIGH_MAX {
            EntropyBand::High
        } else {
            EntropyBand::VeryHigh
        }
    }

    /// Gauge label shown by presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            EntropyBand::None => "NONE",
            EntropyBand::Low => "LOW",
            EntropyBand::Medium => "MEDIUM",
            EntropyBand::High => "HIGH",
            EntropyBand::VeryHigh => "VERY HIGH",
        }
    }

    /// A guess at what kind of content produces entropy in this band.
    pub fn content_hint(&self) -> &'static str {
        match self {
            EntropyBand::Medium => "WRITTEN LANGUAGE",
            EntropyBand::High => "RANDOMLY GENERATED",
            EntropyBand::VeryHigh => "ENCRYPTED OR COMPRESSED",
            _ => "SOMETHING BORING",
        }
    }
}
