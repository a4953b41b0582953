// lexfreq/src/commands/mod.rs
pub mod analyze;
