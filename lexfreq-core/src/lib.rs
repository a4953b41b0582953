// lexfreq-core/src/lib.rs
//! # lexfreq Core Library
//!
//! `lexfreq-core` computes descriptive statistics over a body of text: a
//! ranked token or character frequency distribution, a Shannon entropy
//! estimate, the hapax-legomenon ratio, and a heuristic verdict on how
//! closely the distribution follows Zipf's law.
//!
//! The library is pure and stateless: every operation is a deterministic
//! function of the input text and an explicit [`AnalyzerConfig`] value,
//! with no I/O, no shared mutable state, and no suspension points. All
//! rendering, option persistence, and scheduling concerns belong to the
//! presentation layer that calls it.
//!
//! ## Modules
//!
//! * `config`: Defines [`AnalyzerConfig`] and its YAML loading.
//! * `tokenizer`: Normalization, punctuation stripping, and token splitting.
//! * `frequency`: Builds the ranked [`Distribution`] from a token stream.
//! * `analysis`: The one-shot [`analyze`] entry point and the individual
//!   estimator wrappers.
//! * `errors`: The [`LexfreqError`] type for config loading failures.
//!
//! The numeric estimators themselves (Shannon entropy, hapax ratio,
//! Zipfian scoring) live in the `no_std` companion crate `lexfreq-stats`
//! and are re-exported here.
//!
//! ## Usage Example
//!
//! ```rust
//! use lexfreq_core::{analyze, AnalyzerConfig};
//!
//! let config = AnalyzerConfig::default();
//! let report = analyze("the cat sat on the mat the cat ran", &config);
//!
//! assert_eq!(report.distribution[0].token, "the");
//! assert_eq!(report.distribution[0].count, 3);
//! assert_eq!(report.hapax_percent, Some(66));
//! ```
//!
//! ## Empty input
//!
//! A zero-length text (or an empty distribution) is an expected steady
//! state, not an error: the estimators return `None` and presentation
//! layers display "N/A". Only configuration loading can actually fail.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod frequency;
pub mod tokenizer;

pub use analysis::{analyze, estimate_entropy, hapax_percent, zipfian_verdict, AnalysisReport};
pub use config::AnalyzerConfig;
pub use errors::LexfreqError;
pub use frequency::{count_frequency, Distribution, FrequencyEntry};
pub use tokenizer::{strip_punctuation, tokenize};

// Re-export the estimator vocabulary so CLI consumers need only one crate.
pub use lexfreq_stats::entropy::EntropyBand;
pub use lexfreq_stats::zipf::ZipfVerdict;
