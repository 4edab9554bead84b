// Mon Oct 19 2026 - Alex

use crate::analysis::{AnalysisReport, FloatCandidate, FloatClass};
use colored::*;

/// Colored terminal view. Not a stable format.
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let stats = &report.statistics;

    out.push_str(&format!("{}\n", "Statistics".cyan().bold()));
    out.push_str(&format!("{}\n", "-".repeat(40).cyan()));
    out.push_str(&format!("  Total bytes:      {}\n", stats.total_bytes.to_string().green()));
    out.push_str(&format!("  Zero bytes:       {} ({:.1}%)\n", stats.zero_bytes, stats.zero_percentage()));
    out.push_str(&format!("  0xFF bytes:       {} ({:.1}%)\n", stats.ff_bytes, stats.ff_percentage()));
    out.push_str(&format!(
        "  Printable ASCII:  {} ({:.1}%)\n",
        stats.printable_ascii_bytes,
        stats.printable_percentage()
    ));
    out.push_str(&format!("  Entropy:          {:.3} bits/byte\n", stats.entropy_bits_per_byte));
    out.push('\n');

    out.push_str(&format!("{}\n", "Float32 Candidates".yellow().bold()));
    if report.float_candidates.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    }
    for candidate in &report.float_candidates {
        out.push_str(&format!("  {}\n", float_line(candidate)));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Timestamp Candidates".yellow().bold()));
    if report.timestamp_candidates.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    }
    for candidate in &report.timestamp_candidates {
        out.push_str(&format!(
            "  0x{:04X}  {}  {}\n",
            candidate.byte_offset,
            candidate.unix_seconds,
            candidate.to_rfc3339().cyan()
        ));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Patterns".yellow().bold()));
    if report.patterns.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    }
    for pattern in &report.patterns {
        out.push_str(&format!("  {} {}\n", "*".magenta(), pattern));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", "Strings".yellow().bold()));
    if report.strings.is_empty() {
        out.push_str(&format!("  {}\n", "none".dimmed()));
    }
    for finding in &report.strings {
        out.push_str(&format!(
            "  0x{:04X}  {:<12} {:<7} \"{}\"\n",
            finding.byte_offset,
            finding.kind.to_string(),
            finding.confidence.to_string(),
            finding.content.green()
        ));
    }

    out
}

pub fn float_line(candidate: &FloatCandidate) -> String {
    let class = match candidate.classification {
        FloatClass::VoltageCurrent => candidate.classification.label().green(),
        FloatClass::Temperature => candidate.classification.label().yellow(),
        FloatClass::Unclassified => candidate.classification.label().dimmed(),
    };
    format!("0x{:04X}  {:>14.6}  {}", candidate.byte_offset, candidate.value, class)
}
