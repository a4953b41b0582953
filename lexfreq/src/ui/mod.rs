// lexfreq/src/ui/mod.rs
pub mod report;
