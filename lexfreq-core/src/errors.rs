//! errors.rs - Custom error types for the lexfreq-core library.
//!
//! Empty input is deliberately not an error anywhere in this crate: a
//! cleared text buffer is an expected steady state, and the analysis
//! functions report it as a distinguished "not applicable" value instead.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `lexfreq-core` library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added
/// in future versions, so they cannot match exhaustively and break later.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LexfreqError {
    #[error("Failed to parse analyzer configuration '{0}': {1}")]
    ConfigParseError(String, String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
