// Mon Oct 19 2026 - Alex

use crate::analysis::AnalysisReport;
use crate::error::Result;
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn report_to_json(report: &AnalysisReport, pretty: bool) -> Result<String> {
    to_json(report, pretty)
}
