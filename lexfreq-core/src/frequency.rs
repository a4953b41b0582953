//! Frequency distribution construction.
//!
//! Counts token occurrences into a ranked [`Distribution`]: one entry per
//! distinct non-empty token, sorted by count descending. This is the hot
//! path for large texts, so the sort is a single O(n log n) pass over the
//! distinct tokens.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a frequency distribution: how often a token occurred.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrequencyEntry {
    pub count: u64,
    pub token: String,
}

/// A ranked frequency distribution, unique by token and sorted by count
/// descending by construction.
pub type Distribution = Vec<FrequencyEntry>;

/// Counts the tokens in a sequence into a descending [`Distribution`].
///
/// Empty-string tokens (artifacts of splitting on runs of spaces) are
/// skipped. Ties between equal counts are broken by first occurrence in
/// the token stream; that order is deterministic but an implementation
/// detail, not an API guarantee, and callers must not depend on it.
pub fn count_frequency(tokens: &[String]) -> Distribution {
    let mut counts: HashMap<&str, (usize, u64)> = HashMap::new();
    for token in tokens {
        if token.is_empty() {
            continue;
        }
        let first_seen = counts.len();
        let entry = counts.entry(token.as_str()).or_insert((first_seen, 0));
        entry.1 += 1;
    }

    let mut ranked: Vec<(usize, u64, &str)> = counts
        .into_iter()
        .map(|(token, (first_seen, count))| (first_seen, count, token))
        .collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    debug!("Counted {} distinct tokens from {} input tokens", ranked.len(), tokens.len());

    ranked
        .into_iter()
        .map(|(_, count, token)| FrequencyEntry { count, token: token.to_string() })
        .collect()
}
