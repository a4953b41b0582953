// lexfreq-stats/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod hapax;
pub mod zipf;

/// Common type definitions
pub type EntropyEstimate = f64;
