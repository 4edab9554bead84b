// Mon Oct 19 2026 - Alex

//! Heuristic analysis of raw telemetry packet payloads: byte statistics,
//! float32 and timestamp field candidates, qualitative patterns and
//! printable string runs, decoded from a hex string.

pub mod analysis;
pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod output;
pub mod payload;
pub mod ui;
pub mod utils;

pub use analysis::{analyze_hex, AnalysisReport, PacketAnalyzer};
pub use cache::{CachedAnalyzer, ReportCache};
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, MalformedInputError, Result};
pub use output::TextReport;
pub use payload::PacketPayload;
