// Mon Oct 19 2026 - Alex

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MIN_STRING_LENGTH: usize = 3;
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub min_string_length: usize,
    pub max_payload_bytes: usize,
    pub cache_capacity: usize,
    pub hexdump_width: usize,
    pub batch_threads: usize,
    pub log_level: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_string_length: DEFAULT_MIN_STRING_LENGTH,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            cache_capacity: 256,
            hexdump_width: 16,
            batch_threads: num_cpus::get(),
            log_level: "info".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: AnalyzerConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn with_min_string_length(mut self, len: usize) -> Self {
        self.min_string_length = len;
        self
    }

    pub fn with_max_payload_bytes(mut self, limit: usize) -> Self {
        self.max_payload_bytes = limit;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_hexdump_width(mut self, width: usize) -> Self {
        self.hexdump_width = width;
        self
    }

    pub fn with_batch_threads(mut self, threads: usize) -> Self {
        self.batch_threads = threads;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_string_length == 0 {
            return Err(AnalysisError::Config("min_string_length must be greater than 0".to_string()));
        }
        if self.max_payload_bytes == 0 {
            return Err(AnalysisError::Config("max_payload_bytes must be greater than 0".to_string()));
        }
        if self.hexdump_width == 0 {
            return Err(AnalysisError::Config("hexdump_width must be greater than 0".to_string()));
        }
        if self.batch_threads == 0 {
            return Err(AnalysisError::Config("batch_threads must be greater than 0".to_string()));
        }
        Ok(())
    }
}
