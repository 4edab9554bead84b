// Mon Oct 19 2026 - Alex

pub mod hexdump;
pub mod json;
pub mod report;
pub mod summary;

pub use hexdump::hex_dump;
pub use json::{report_to_json, to_json};
pub use report::TextReport;
pub use summary::render_summary;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Text,
    Json,
}
