// Mon Oct 19 2026 - Alex

use crate::utils::binary::is_printable_ascii;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

// Amateur radio callsign with an optional AX.25 SSID, e.g. "KD2ABC-1".
static CALLSIGN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z]{1,2}|[0-9][A-Z]|[A-Z][0-9])[0-9][A-Z]{1,4}(?:-[0-9]{1,2})?$")
        .expect("callsign pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StringKind {
    Numeric,
    Callsign,
    Identifier,
    Text,
}

impl StringKind {
    fn categorize(s: &str) -> Self {
        if s.bytes().any(|b| b.is_ascii_digit())
            && s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b':' | b','))
        {
            return StringKind::Numeric;
        }

        if CALLSIGN_RE.is_match(s) {
            return StringKind::Callsign;
        }

        if s.bytes().any(|b| b.is_ascii_alphanumeric())
            && s.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
        {
            return StringKind::Identifier;
        }

        StringKind::Text
    }

    pub fn label(&self) -> &'static str {
        match self {
            StringKind::Numeric => "numeric",
            StringKind::Callsign => "callsign",
            StringKind::Identifier => "identifier",
            StringKind::Text => "text",
        }
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn from_length(length: usize) -> Self {
        match length {
            0..=4 => Confidence::Low,
            5..=7 => Confidence::Medium,
            _ => Confidence::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFinding {
    pub byte_offset: usize,
    pub length: usize,
    pub content: String,
    pub hex_bytes: String,
    pub kind: StringKind,
    pub confidence: Confidence,
}

impl StringFinding {
    fn from_run(byte_offset: usize, run: &[u8]) -> Self {
        // Every byte in a run is printable ASCII, so this is lossless.
        let content: String = run.iter().map(|&b| b as char).collect();

        Self {
            byte_offset,
            length: run.len(),
            hex_bytes: hex::encode_upper(run),
            kind: StringKind::categorize(&content),
            confidence: Confidence::from_length(run.len()),
            content,
        }
    }
}

/// Maximal runs of printable ASCII at least `min_length` bytes long, in
/// payload order. Offsets index into `data`.
pub fn extract(data: &[u8], min_length: usize) -> Vec<StringFinding> {
    let mut findings = Vec::new();
    let mut run_start: Option<usize> = None;

    for (i, &byte) in data.iter().enumerate() {
        if is_printable_ascii(byte) {
            run_start.get_or_insert(i);
            continue;
        }

        if let Some(start) = run_start.take() {
            if i - start >= min_length {
                findings.push(StringFinding::from_run(start, &data[start..i]));
            }
        }
    }

    if let Some(start) = run_start {
        if data.len() - start >= min_length {
            findings.push(StringFinding::from_run(start, &data[start..]));
        }
    }

    log::debug!("Extracted {} strings from {} bytes", findings.len(), data.len());
    findings
}
