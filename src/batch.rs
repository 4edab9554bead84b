// Mon Oct 19 2026 - Alex

use crate::analysis::AnalysisReport;
use crate::cache::CachedAnalyzer;
use crate::error::{AnalysisError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Report(Arc<AnalysisReport>),
    Error(String),
}

impl BatchEntry {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, BatchOutcome::Report(_))
    }
}

/// Non-empty lines that are not `#` comments, trimmed, with their line numbers.
pub fn payload_lines(input: &str) -> Vec<(usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Analyzes each payload line on a dedicated pool. Output order follows the
/// input; a bad line becomes an error entry instead of aborting the batch.
pub fn analyze_batch(
    analyzer: &CachedAnalyzer,
    input: &str,
    threads: usize,
    show_progress: bool,
) -> Result<Vec<BatchEntry>> {
    let lines = payload_lines(input);
    log::info!("Analyzing {} payloads on {} threads", lines.len(), threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()
        .map_err(|e| AnalysisError::Config(format!("failed to build thread pool: {}", e)))?;

    let progress = if show_progress {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let entries: Vec<BatchEntry> = pool.install(|| {
        lines
            .par_iter()
            .map(|&(line, hex)| {
                let outcome = match analyzer.get_or_analyze(hex) {
                    Ok(report) => BatchOutcome::Report(report),
                    Err(e) => {
                        log::warn!("Line {}: {}", line, e);
                        BatchOutcome::Error(e.to_string())
                    }
                };
                if let Some(ref pb) = progress {
                    pb.inc(1);
                }
                BatchEntry { line, outcome }
            })
            .collect()
    });

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    let failed = entries.iter().filter(|e| !e.is_ok()).count();
    log::info!("Batch complete: {} analyzed, {} rejected", entries.len() - failed, failed);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyzerConfig;

    #[test]
    fn test_payload_lines_skip_comments_and_blanks() {
        let input = "# header\n\n  414243  \n00\n";
        assert_eq!(payload_lines(input), vec![(3, "414243"), (4, "00")]);
    }

    #[test]
    fn test_batch_keeps_order_and_reports_errors() {
        let analyzer = CachedAnalyzer::new(&AnalyzerConfig::default());
        let input = "414243\nnothex\n01020304\n\n00f15365\n";
        let entries = analyze_batch(&analyzer, input, 2, false).unwrap();

        let lines: Vec<usize> = entries.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 5]);
        assert!(entries[0].is_ok());
        assert!(!entries[1].is_ok());
        match &entries[3].outcome {
            BatchOutcome::Report(report) => assert_eq!(report.timestamp_candidates.len(), 1),
            BatchOutcome::Error(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_entry_serialization() {
        let analyzer = CachedAnalyzer::new(&AnalyzerConfig::default());
        let entries = analyze_batch(&analyzer, "abc", 1, false).unwrap();
        let json = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(json["line"], 1);
        assert!(json["error"].as_str().unwrap().contains("odd length"));
    }
}
