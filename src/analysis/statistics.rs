// Mon Oct 19 2026 - Alex

use crate::utils::binary::is_printable_ascii;
use crate::utils::math::{percentage, shannon_entropy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    pub total_bytes: usize,
    pub zero_bytes: usize,
    pub ff_bytes: usize,
    pub printable_ascii_bytes: usize,
    pub entropy_bits_per_byte: f64,
}

impl StatisticsReport {
    pub fn zero_percentage(&self) -> f64 {
        percentage(self.zero_bytes as u64, self.total_bytes as u64)
    }

    pub fn ff_percentage(&self) -> f64 {
        percentage(self.ff_bytes as u64, self.total_bytes as u64)
    }

    pub fn printable_percentage(&self) -> f64 {
        percentage(self.printable_ascii_bytes as u64, self.total_bytes as u64)
    }
}

pub fn profile(data: &[u8]) -> StatisticsReport {
    let mut histogram = [0u64; 256];
    let mut printable = 0usize;

    for &byte in data {
        histogram[byte as usize] += 1;
        if is_printable_ascii(byte) {
            printable += 1;
        }
    }

    let report = StatisticsReport {
        total_bytes: data.len(),
        zero_bytes: histogram[0x00] as usize,
        ff_bytes: histogram[0xFF] as usize,
        printable_ascii_bytes: printable,
        entropy_bits_per_byte: shannon_entropy(&histogram, data.len() as u64),
    };

    log::debug!(
        "Profiled {} bytes: zero={} ff={} printable={} entropy={:.3}",
        report.total_bytes,
        report.zero_bytes,
        report.ff_bytes,
        report.printable_ascii_bytes,
        report.entropy_bits_per_byte
    );

    report
}
