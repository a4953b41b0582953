// lexfreq/src/lib.rs
//! # lexfreq CLI Application
//!
//! This crate provides the terminal interface for the lexfreq analysis
//! core: argument parsing, input sourcing, and rendering of the insight
//! gauges and frequency table. All analysis logic lives in
//! `lexfreq-core`; this crate only consumes its outputs.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
