// lexfreq/src/main.rs
//! lexfreq entry point.
//!
//! Parses the CLI, wires up logging, and runs the analysis command.

use anyhow::Result;
use clap::Parser;
use lexfreq::cli::Cli;
use lexfreq::commands::analyze::run_analyze;
use lexfreq::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    run_analyze(&args)
}
