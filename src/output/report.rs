// Mon Oct 19 2026 - Alex

use crate::analysis::{AnalysisReport, StringFinding};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const REPORT_TITLE: &str = "Packet String Analysis Report";

/// Plain-text "copy report" rendering. The layout is consumed by other tools
/// and must stay stable line for line.
pub struct TextReport<'a> {
    report: &'a AnalysisReport,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self { report }
    }

    pub fn generate(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let stats = &self.report.statistics;

        lines.push(REPORT_TITLE.to_string());
        lines.push(String::new());

        lines.push("Statistics:".to_string());
        lines.push(format!("  Total Bytes: {}", stats.total_bytes));
        lines.push(format!(
            "  Printable ASCII: {} ({:.1}%)",
            stats.printable_ascii_bytes,
            stats.printable_percentage()
        ));
        lines.push(format!("  Strings Found: {}", self.report.strings.len()));
        lines.push(format!("  Entropy: {:.2} bits/byte", stats.entropy_bits_per_byte));
        lines.push(String::new());

        lines.push("Detected Strings:".to_string());
        if self.report.strings.is_empty() {
            lines.push("  (none)".to_string());
        }

        for (i, finding) in self.report.strings.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(string_block(i + 1, finding));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.generate().as_bytes())
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

fn string_block(index: usize, finding: &StringFinding) -> [String; 4] {
    [
        format!("String #{}:", index),
        format!(
            "  Offset: 0x{:04X} | Length: {} | Type: {} | Confidence: {}",
            finding.byte_offset, finding.length, finding.kind, finding.confidence
        ),
        format!("  Content: \"{}\"", finding.content),
        format!("  Hex: {}", finding.hex_bytes),
    ]
}
