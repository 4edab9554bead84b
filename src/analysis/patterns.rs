// Mon Oct 19 2026 - Alex

use crate::analysis::statistics::StatisticsReport;
use serde::{Serialize, Serializer};
use std::fmt;

pub const ZERO_DENSITY_THRESHOLD: f64 = 0.2;
pub const FF_DENSITY_THRESHOLD: f64 = 0.1;
pub const HIGH_ENTROPY_THRESHOLD: f64 = 7.0;
pub const LOW_ENTROPY_THRESHOLD: f64 = 4.0;

const INCREMENTING_RUN: usize = 4;

/// Qualitative observation about a payload. Each kind appears at most once
/// per report, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternFinding {
    IncrementingSequence { offset: usize },
    HighZeroDensity { percent: f64 },
    HighFfDensity { percent: f64 },
    HighEntropy,
    LowEntropy,
}

impl fmt::Display for PatternFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternFinding::IncrementingSequence { offset } => {
                write!(f, "incrementing sequence detected at offset 0x{:04X}", offset)
            }
            PatternFinding::HighZeroDensity { percent } => {
                write!(f, "high number of zero bytes ({:.1}%)", percent)
            }
            PatternFinding::HighFfDensity { percent } => {
                write!(f, "high number of 0xFF bytes ({:.1}%)", percent)
            }
            PatternFinding::HighEntropy => f.write_str("high entropy — possibly compressed/encrypted"),
            PatternFinding::LowEntropy => f.write_str("low entropy — repetitive data"),
        }
    }
}

impl Serialize for PatternFinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Start of the first run of four bytes each one greater than the last.
/// 0xFF does not wrap to 0x00.
pub fn find_incrementing_run(data: &[u8]) -> Option<usize> {
    data.windows(INCREMENTING_RUN).position(|w| {
        w.windows(2).all(|pair| pair[0] as u16 + 1 == pair[1] as u16)
    })
}

pub fn detect(data: &[u8], stats: &StatisticsReport) -> Vec<PatternFinding> {
    let mut findings = Vec::new();

    if data.is_empty() {
        return findings;
    }

    if let Some(offset) = find_incrementing_run(data) {
        findings.push(PatternFinding::IncrementingSequence { offset });
    }

    let total = stats.total_bytes as f64;

    if stats.zero_bytes as f64 > total * ZERO_DENSITY_THRESHOLD {
        findings.push(PatternFinding::HighZeroDensity { percent: stats.zero_percentage() });
    }

    if stats.ff_bytes as f64 > total * FF_DENSITY_THRESHOLD {
        findings.push(PatternFinding::HighFfDensity { percent: stats.ff_percentage() });
    }

    if stats.entropy_bits_per_byte > HIGH_ENTROPY_THRESHOLD {
        findings.push(PatternFinding::HighEntropy);
    } else if stats.entropy_bits_per_byte < LOW_ENTROPY_THRESHOLD {
        findings.push(PatternFinding::LowEntropy);
    }

    for finding in &findings {
        log::trace!("Pattern: {}", finding);
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::statistics::profile;

    fn run(data: &[u8]) -> Vec<PatternFinding> {
        detect(data, &profile(data))
    }

    #[test]
    fn test_empty_payload_has_no_findings() {
        assert!(run(&[]).is_empty());
    }

    #[test]
    fn test_incrementing_sequence() {
        let findings = run(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(findings[0], PatternFinding::IncrementingSequence { offset: 0 });
        assert_eq!(findings[0].to_string(), "incrementing sequence detected at offset 0x0000");
    }

    #[test]
    fn test_only_first_run_reported() {
        let data = [0x90, 0x10, 0x11, 0x12, 0x13, 0x14, 0x40, 0x41, 0x42, 0x43];
        assert_eq!(find_incrementing_run(&data), Some(1));
        let runs = run(&data)
            .iter()
            .filter(|f| matches!(f, PatternFinding::IncrementingSequence { .. }))
            .count();
        assert_eq!(runs, 1);
    }

    #[test]
    fn test_no_wraparound() {
        assert_eq!(find_incrementing_run(&[0xFD, 0xFE, 0xFF, 0x00]), None);
        assert_eq!(find_incrementing_run(&[0x01, 0x02, 0x03]), None);
    }

    #[test]
    fn test_zero_bytes_scenario() {
        let findings = run(&[0, 0, 0, 0]);
        assert_eq!(
            findings,
            vec![PatternFinding::HighZeroDensity { percent: 100.0 }, PatternFinding::LowEntropy]
        );
        assert_eq!(findings[0].to_string(), "high number of zero bytes (100.0%)");
        assert!(findings[1].to_string().starts_with("low entropy"));
    }

    #[test]
    fn test_density_thresholds_are_strict() {
        // 2 of 10 zero bytes is exactly 20%: not reported.
        let data = [0, 0, 1, 3, 5, 7, 9, 11, 13, 15];
        assert!(!run(&data).iter().any(|f| matches!(f, PatternFinding::HighZeroDensity { .. })));

        // 1 of 10 0xFF bytes is exactly 10%: not reported; 2 of 10 is.
        let data = [0xFF, 2, 4, 6, 8, 10, 12, 14, 16, 18];
        assert!(!run(&data).iter().any(|f| matches!(f, PatternFinding::HighFfDensity { .. })));
        let data = [0xFF, 0xFF, 4, 6, 8, 10, 12, 14, 16, 18];
        assert!(run(&data).contains(&PatternFinding::HighFfDensity { percent: 20.0 }));
    }

    #[test]
    fn test_high_entropy() {
        let data: Vec<u8> = (0..=255u8).rev().collect();
        let findings = run(&data);
        assert_eq!(findings, vec![PatternFinding::HighEntropy]);
        assert_eq!(findings[0].to_string(), "high entropy — possibly compressed/encrypted");
    }

    #[test]
    fn test_mid_entropy_has_no_entropy_finding() {
        // 32 distinct values, each once: exactly 5 bits/byte.
        let data: Vec<u8> = (0..32u8).map(|i| i * 7 + 1).collect();
        assert!(run(&data).is_empty());
    }

    #[test]
    fn test_emission_order() {
        let mut data = vec![0u8; 6];
        data.extend_from_slice(&[0xFF, 0xFF, 0x05, 0x06, 0x07, 0x08]);
        let findings = run(&data);
        assert!(matches!(findings[0], PatternFinding::IncrementingSequence { offset: 8 }));
        assert!(matches!(findings[1], PatternFinding::HighZeroDensity { .. }));
        assert!(matches!(findings[2], PatternFinding::HighFfDensity { .. }));
        assert_eq!(findings[3], PatternFinding::LowEntropy);
    }
}
