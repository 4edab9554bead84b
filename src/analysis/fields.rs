// Mon Oct 19 2026 - Alex

use crate::utils::BinaryUtils;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Unix seconds for 2000-01-01T00:00:00Z.
pub const TIMESTAMP_MIN: u32 = 946_684_800;
/// Unix seconds for 2100-01-01T00:00:00Z, exclusive.
pub const TIMESTAMP_MAX: u32 = 4_102_444_800;

pub const VOLTAGE_ABS_LIMIT: f64 = 10.0;
pub const TEMPERATURE_MIN: f64 = -50.0;
pub const TEMPERATURE_MAX: f64 = 100.0;
pub const REPORT_ABS_MIN: f64 = 0.01;
pub const REPORT_ABS_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatClass {
    VoltageCurrent,
    Temperature,
    #[serde(rename = "none")]
    Unclassified,
}

impl FloatClass {
    /// Thresholds are evaluated on the widened value, so `0.01f32` (which is
    /// slightly below 0.01) stays outside the reporting window.
    pub fn classify(value: f64) -> Self {
        if value.abs() < VOLTAGE_ABS_LIMIT {
            FloatClass::VoltageCurrent
        } else if value > TEMPERATURE_MIN && value < TEMPERATURE_MAX {
            FloatClass::Temperature
        } else {
            FloatClass::Unclassified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FloatClass::VoltageCurrent => "voltage/current",
            FloatClass::Temperature => "temperature",
            FloatClass::Unclassified => "none",
        }
    }
}

impl fmt::Display for FloatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatCandidate {
    pub byte_offset: usize,
    pub value: f32,
    pub classification: FloatClass,
}

impl FloatCandidate {
    pub fn is_reportable(&self) -> bool {
        let abs = (self.value as f64).abs();
        self.classification != FloatClass::Unclassified
            && (REPORT_ABS_MIN..=REPORT_ABS_MAX).contains(&abs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampCandidate {
    pub byte_offset: usize,
    pub unix_seconds: u32,
}

impl TimestampCandidate {
    pub fn from_word(byte_offset: usize, word: u32) -> Option<Self> {
        (TIMESTAMP_MIN..TIMESTAMP_MAX)
            .contains(&word)
            .then_some(Self { byte_offset, unix_seconds: word })
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix_seconds as i64, 0)
    }

    pub fn to_rfc3339(&self) -> String {
        self.to_datetime()
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| format!("{}s", self.unix_seconds))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FieldScan {
    pub floats: Vec<FloatCandidate>,
    pub timestamps: Vec<TimestampCandidate>,
}

fn decode_float(data: &[u8], byte_offset: usize) -> Option<FloatCandidate> {
    let value = BinaryUtils::read_f32_le(data, byte_offset).filter(|v| v.is_finite())?;

    Some(FloatCandidate {
        byte_offset,
        value,
        classification: FloatClass::classify(value as f64),
    })
}

pub fn float32_view(data: &[u8]) -> Vec<FloatCandidate> {
    BinaryUtils::aligned_words(data)
        .filter_map(|(offset, _)| decode_float(data, offset))
        .collect()
}

/// Float and timestamp candidates for the analysis report. A word can produce
/// both kinds of candidate.
pub fn scan_fields(data: &[u8]) -> FieldScan {
    let mut scan = FieldScan::default();

    for (offset, word) in BinaryUtils::aligned_words(data) {
        if let Some(candidate) = decode_float(data, offset).filter(FloatCandidate::is_reportable) {
            log::trace!("Float candidate at 0x{:04X}: {} ({})", offset, candidate.value, candidate.classification);
            scan.floats.push(candidate);
        }

        if let Some(candidate) = TimestampCandidate::from_word(offset, word) {
            log::trace!("Timestamp candidate at 0x{:04X}: {}", offset, candidate.unix_seconds);
            scan.timestamps.push(candidate);
        }
    }

    log::debug!(
        "Field scan over {} bytes: {} floats, {} timestamps",
        data.len(),
        scan.floats.len(),
        scan.timestamps.len()
    );

    scan
}
