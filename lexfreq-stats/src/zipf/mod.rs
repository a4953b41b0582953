// lexfreq-stats/src/zipf/mod.rs
use libm::fabs;

/// Highest rank compared against the ideal Zipf curve.
pub const MAX_RANK: usize = 20;
/// Tolerance (percent of the observed count) for an excellent fit: +2.
pub const EXCELLENT_FIT_PCT: f64 = 5.0;
/// Tolerance for a good fit: +1.
pub const GOOD_FIT_PCT: f64 = 20.0;
/// Tolerance for a neutral fit: no score change.
pub const NEUTRAL_FIT_PCT: f64 = 30.0;
/// Scores strictly above this are a `Yes` verdict.
pub const YES_THRESHOLD: i64 = 15;
/// Scores strictly above this (and at most `YES_THRESHOLD`) are `Ish`.
pub const ISH_THRESHOLD: i64 = 10;

/// Three-way answer to "does this distribution look Zipfian?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZipfVerdict {
    Yes,
    Ish,
    No,
}

impl ZipfVerdict {
    /// Gauge label shown by presentation layers.
    pub fn label(&self) -> &'static str {
        match self {
            ZipfVerdict::Yes => "YES",
            ZipfVerdict::Ish => "ISH",
            ZipfVerdict::No => "NO",
        }
    }

    fn from_score(score: i64) -> Self {
        if score > YES_THRESHOLD {
            ZipfVerdict::Yes
        } else if score > ISH_THRESHOLD {
            ZipfVerdict::Ish
        } else {
            ZipfVerdict::No
        }
    }
}

/// Scores how closely a descending distribution of occurrence counts
/// follows the ideal Zipf curve (rank-i frequency = rank-1 frequency / i).
///
/// Ranks 2 through `min(MAX_RANK, len)` are each compared against the
/// ideal count using three widening symmetric tolerance bands around the
/// observed count. The tolerances and score thresholds are calibrated
/// magic numbers, not a statistical test; a distribution of length 1 has
/// nothing to compare and always scores `No`.
///
/// `counts` must be sorted descending. Returns `None` for an empty slice.
pub fn zipfian_verdict(counts: &[u64]) -> Option<ZipfVerdict> {
    let first = *counts.first()? as f64;

    let mut score = 0i64;
    for rank in 2..=counts.len().min(MAX_RANK) {
        let expected = first / rank as f64;
        let actual = counts[rank - 1] as f64;
        let deviation = fabs(expected - actual);
        if deviation < actual * EXCELLENT_FIT_PCT / 100.0 {
            score += 2;
        } else if deviation < actual * GOOD_FIT_PCT / 100.0 {
            score += 1;
        } else if deviation < actual * NEUTRAL_FIT_PCT / 100.0 {
            // Neutral: neither reward nor penalty.
        } else {
            score -= 1;
        }
    }

    Some(ZipfVerdict::from_score(score))
}
