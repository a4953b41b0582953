//! Configuration management for `lexfreq-core`.
//!
//! Defines the analyzer options threaded explicitly through every core
//! call, and loads them from a YAML file for callers that persist options
//! between runs. The core never mutates a configuration; a single
//! long-lived instance is owned by the presentation layer and passed by
//! reference on each call.
//!
//! License: MIT OR Apache-2.0

use crate::errors::LexfreqError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling tokenization, normalization, and presentation order.
///
/// A plain value parameter: every core call receives the configuration
/// explicitly, and nothing ambient or global is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Analyze whitespace-delimited words rather than single characters.
    pub word_split: bool,
    /// Lowercase every token so capitalization variants count together.
    pub ignore_case: bool,
    /// Strip space characters from the text before splitting.
    pub remove_space: bool,
    /// Replace punctuation with spaces before tokenization.
    pub remove_punctuation: bool,
    /// Presentation order only: the core always produces a descending
    /// distribution, and renderers reverse it when this is false.
    pub sort_descending: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            word_split: true,
            ignore_case: true,
            remove_space: false,
            remove_punctuation: true,
            sort_descending: true,
        }
    }
}

impl AnalyzerConfig {
    /// Loads analyzer options from a YAML file.
    ///
    /// Missing fields fall back to their defaults, so a partial file such
    /// as `word_split: false` alone is valid.
    pub fn load_from_file(path: &Path) -> Result<Self, LexfreqError> {
        debug!("Loading analyzer config from file: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: AnalyzerConfig = serde_yml::from_str(&contents)
            .map_err(|e| LexfreqError::ConfigParseError(path.display().to_string(), e.to_string()))?;
        debug!("Loaded analyzer config: {:?}", config);
        Ok(config)
    }
}
