// Mon Oct 19 2026 - Alex

pub mod fields;
pub mod patterns;
pub mod statistics;
pub mod strings;

pub use fields::{FieldScan, FloatCandidate, FloatClass, TimestampCandidate};
pub use patterns::PatternFinding;
pub use statistics::StatisticsReport;
pub use strings::{Confidence, StringFinding, StringKind};

use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::payload::PacketPayload;
use crate::utils::logging::scoped_timer;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub statistics: StatisticsReport,
    pub float_candidates: Vec<FloatCandidate>,
    pub timestamp_candidates: Vec<TimestampCandidate>,
    pub patterns: Vec<PatternFinding>,
    pub strings: Vec<StringFinding>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.float_candidates.is_empty()
            && self.timestamp_candidates.is_empty()
            && self.patterns.is_empty()
            && self.strings.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.float_candidates.len()
            + self.timestamp_candidates.len()
            + self.patterns.len()
            + self.strings.len()
    }
}

#[derive(Debug, Clone)]
pub struct PacketAnalyzer {
    min_string_length: usize,
    max_payload_bytes: usize,
}

impl Default for PacketAnalyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl PacketAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            min_string_length: config.min_string_length.max(1),
            max_payload_bytes: config.max_payload_bytes,
        }
    }

    pub fn min_string_length(&self) -> usize {
        self.min_string_length
    }

    /// Rejects oversized input before decoding it.
    pub fn decode(&self, input: &str) -> Result<PacketPayload> {
        let decoded_len = input.len() / 2;
        if decoded_len > self.max_payload_bytes {
            log::warn!("Rejecting payload of {} bytes (limit {})", decoded_len, self.max_payload_bytes);
            return Err(AnalysisError::PayloadTooLarge {
                size: decoded_len,
                limit: self.max_payload_bytes,
            });
        }

        PacketPayload::from_hex(input).map_err(|e| {
            log::warn!("No data available for analysis: {}", e);
            AnalysisError::from(e)
        })
    }

    pub fn analyze_hex(&self, input: &str) -> Result<AnalysisReport> {
        let payload = self.decode(input)?;
        Ok(self.analyze_payload(&payload))
    }

    pub fn analyze_payload(&self, payload: &PacketPayload) -> AnalysisReport {
        let _timer = scoped_timer("analyze_payload");
        let data = payload.as_bytes();

        let statistics = statistics::profile(data);
        let FieldScan { floats, timestamps } = fields::scan_fields(data);
        let patterns = patterns::detect(data, &statistics);
        let strings = strings::extract(data, self.min_string_length);

        let report = AnalysisReport {
            statistics,
            float_candidates: floats,
            timestamp_candidates: timestamps,
            patterns,
            strings,
        };

        log::debug!("Analysis of {} bytes produced {} findings", data.len(), report.finding_count());
        report
    }

    pub fn float32_view(&self, payload: &PacketPayload) -> Vec<FloatCandidate> {
        fields::float32_view(payload.as_bytes())
    }
}

pub fn analyze_hex(input: &str) -> Result<AnalysisReport> {
    PacketAnalyzer::default().analyze_hex(input)
}
