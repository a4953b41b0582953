// lexfreq/src/cli.rs
//! This file defines the command-line interface (CLI) for the lexfreq
//! application: one analysis operation with flags mapping one-to-one onto
//! the core's `AnalyzerConfig`.

use clap::{Parser, ValueEnum};
use lexfreq_core::AnalyzerConfig;
use std::path::PathBuf;

/// Output formats for the analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable insight gauges and a frequency table.
    Table,
    /// A single machine-readable JSON object.
    Json,
}

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "lexfreq",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Descriptive statistics for text",
    long_about = "Lexfreq computes descriptive statistics over a body of text: the ranked \
word or character frequency distribution, a Shannon entropy estimate with an \
interpretation band, the percentage of hapax legomena (tokens occurring exactly \
once), and a heuristic verdict on whether the distribution follows Zipf's law."
)]
pub struct Cli {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(value_name = "FILE", help = "Read input from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Analyze single characters instead of whitespace-delimited words.
    #[arg(long, help = "Count single characters instead of words.")]
    pub chars: bool,

    /// Treat capitalization variants as distinct tokens.
    #[arg(long = "case-sensitive", help = "Do not lowercase tokens before counting.")]
    pub case_sensitive: bool,

    /// Strip space characters from the text before splitting.
    #[arg(long = "remove-space", help = "Strip spaces from the text before tokenizing.")]
    pub remove_space: bool,

    /// Keep punctuation instead of replacing it with spaces.
    #[arg(long = "keep-punctuation", help = "Do not strip punctuation before tokenizing.")]
    pub keep_punctuation: bool,

    /// Render the table least-frequent first.
    #[arg(long, help = "Render the frequency table in ascending order.")]
    pub ascending: bool,

    /// Limit the table to the N highest-ranked entries.
    #[arg(long, short = 'n', value_name = "N", help = "Show only the top N entries.")]
    pub top: Option<usize>,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value = "table", help = "Select the output format.")]
    pub format: OutputFormat,

    /// Path to a YAML file with analyzer options.
    #[arg(long = "config", value_name = "FILE", help = "Load analyzer options from a YAML file.")]
    pub config: Option<PathBuf>,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}

impl Cli {
    /// Folds the flag overrides into a base configuration. Flags only
    /// invert away from the defaults, so a config file remains the way to
    /// pin an exact option set.
    pub fn apply_overrides(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if self.chars {
            config.word_split = false;
        }
        if self.case_sensitive {
            config.ignore_case = false;
        }
        if self.remove_space {
            config.remove_space = true;
        }
        if self.keep_punctuation {
            config.remove_punctuation = false;
        }
        if self.ascending {
            config.sort_descending = false;
        }
        config
    }
}
