// lexfreq/src/ui/report.rs
//! Rendering of analysis reports.
//!
//! The core hands over an immutable [`AnalysisReport`]; everything visual
//! happens here: the insight gauges, the ranked frequency table, and the
//! JSON projection. "Not applicable" values render as `N/A` (or `null` in
//! JSON), never as an error.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use lexfreq_core::{AnalysisReport, AnalyzerConfig, EntropyBand};
use owo_colors::OwoColorize;
use serde_json::json;

/// Returns the ordinal suffix of a number (e.g. "rd" for 3, "th" for 11).
pub fn ordinal_suffix(num: usize) -> &'static str {
    let last_digit = num % 10;
    let last_two_digits = num % 100;
    if last_digit == 1 && last_two_digits != 11 {
        "st"
    } else if last_digit == 2 && last_two_digits != 12 {
        "nd"
    } else if last_digit == 3 && last_two_digits != 13 {
        "rd"
    } else {
        "th"
    }
}

/// Gauge color per band: green for low entropy through red for very high.
fn band_color(band: EntropyBand) -> (u8, u8, u8) {
    match band {
        EntropyBand::None => (0x80, 0x80, 0x80),
        EntropyBand::Low => (0x38, 0xc4, 0x24),
        EntropyBand::Medium => (0xff, 0xc4, 0x12),
        EntropyBand::High => (0xff, 0x3b, 0x27),
        EntropyBand::VeryHigh => (0xff, 0x18, 0x00),
    }
}

/// Renders the insight gauges: entropy band, content guess, hapax
/// percentage, Zipfian verdict, and the word/character counts.
pub fn render_insights(report: &AnalysisReport, supports_color: bool) -> String {
    let entropy_gauge = match (report.entropy, report.entropy_band) {
        (Some(entropy), Some(band)) => {
            let label = if supports_color {
                let (r, g, b) = band_color(band);
                band.label().truecolor(r, g, b).to_string()
            } else {
                band.label().to_string()
            };
            format!("{} ({:.3}/8)", label, entropy)
        }
        _ => "N/A".to_string(),
    };
    let content_guess = report
        .entropy_band
        .map(|band| band.content_hint().to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let hapax_gauge = report
        .hapax_percent
        .map(|percent| format!("{percent}%"))
        .unwrap_or_else(|| "N/A".to_string());
    let zipf_gauge = report
        .zipf_verdict
        .map(|verdict| verdict.label().to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "ENTROPY        {entropy_gauge}\n\
         CONTENT GUESS  {content_guess}\n\
         HL PERCENT     {hapax_gauge}\n\
         ZIPFIAN        {zipf_gauge}\n\
         WORDS          {}\n\
         CHARACTERS     {}",
        report.word_count, report.char_count
    )
}

/// Renders the ranked frequency table.
///
/// Rank ordinals always refer to descending frequency rank; an ascending
/// sort only reverses the row order, and `top` truncates to the highest
/// ranks before any reversal.
pub fn render_table(
    report: &AnalysisReport,
    config: &AnalyzerConfig,
    top: Option<usize>,
) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "FREQUENCY",
            "OCCURRENCES",
            if config.word_split { "WORD" } else { "CHARACTER" },
        ]);

    let limit = top.unwrap_or(report.distribution.len());
    let mut rows: Vec<[String; 3]> = report
        .distribution
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| {
            let rank = index + 1;
            [
                format!("{}{}", rank, ordinal_suffix(rank)),
                entry.count.to_string(),
                entry.token.clone(),
            ]
        })
        .collect();
    if !config.sort_descending {
        rows.reverse();
    }
    for row in rows {
        table.add_row(row.to_vec());
    }

    table.to_string()
}

/// Projects a report into the JSON object printed by `--format json`.
pub fn render_json(report: &AnalysisReport) -> serde_json::Value {
    json!({
        "distribution": report.distribution,
        "entropy": report.entropy,
        "entropy_band": report.entropy_band.map(|band| band.label()),
        "content_guess": report.entropy_band.map(|band| band.content_hint()),
        "hapax_percent": report.hapax_percent,
        "zipf_verdict": report.zipf_verdict.map(|verdict| verdict.label()),
        "word_count": report.word_count,
        "char_count": report.char_count,
    })
}
