//! Analyze command implementation: the one operation lexfreq performs.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use lexfreq_core::{analyze, AnalyzerConfig};
use log::{debug, info};
use std::io::{self, Read, Write};

use crate::cli::{Cli, OutputFormat};
use crate::ui::report;

/// Reads the input, runs the core analysis, and renders the report.
pub fn run_analyze(cli: &Cli) -> Result<()> {
    info!("Starting lexfreq analysis.");

    let base_config = match &cli.config {
        Some(path) => AnalyzerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load analyzer config from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    let config = cli.apply_overrides(base_config);
    debug!("Effective analyzer config: {:?}", config);

    let input = read_input(cli)?;
    debug!("Read {} bytes of input", input.len());

    let report = analyze(&input, &config);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    match cli.format {
        OutputFormat::Json => {
            let value = report::render_json(&report);
            writeln!(writer, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Table => {
            writeln!(writer, "{}", report::render_insights(&report, supports_color))?;
            if !report.distribution.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "{}", report::render_table(&report, &config, cli.top))?;
            }
        }
    }

    info!("Analysis rendered.");
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
