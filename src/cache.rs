// Mon Oct 19 2026 - Alex

use crate::analysis::{AnalysisReport, PacketAnalyzer};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::payload::normalize_hex;
use ahash::RandomState;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Bounded memo of reports keyed by normalized hex input. Cleared wholesale
/// once full.
pub struct ReportCache {
    cache: RwLock<HashMap<String, Arc<AnalysisReport>, RandomState>>,
    max_size: usize,
}

impl ReportCache {
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::with_hasher(RandomState::new())),
            max_size,
        }
    }

    pub fn get(&self, hex: &str) -> Option<Arc<AnalysisReport>> {
        self.cache.read().get(&normalize_hex(hex)).cloned()
    }

    pub fn insert(&self, hex: &str, report: Arc<AnalysisReport>) {
        if self.max_size == 0 {
            return;
        }

        let mut cache = self.cache.write();
        if cache.len() >= self.max_size {
            log::debug!("Report cache full ({} entries), clearing", cache.len());
            cache.clear();
        }
        cache.insert(normalize_hex(hex), report);
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.read().len()
    }

    pub fn capacity(&self) -> usize {
        self.max_size
    }
}

pub struct CachedAnalyzer {
    analyzer: PacketAnalyzer,
    cache: ReportCache,
}

impl CachedAnalyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            analyzer: PacketAnalyzer::new(config),
            cache: ReportCache::new(config.cache_capacity),
        }
    }

    /// Errors are returned to the caller and never cached.
    pub fn get_or_analyze(&self, hex: &str) -> Result<Arc<AnalysisReport>> {
        if let Some(report) = self.cache.get(hex) {
            log::trace!("Report cache hit for {} hex chars", hex.len());
            return Ok(report);
        }

        let report = Arc::new(self.analyzer.analyze_hex(hex)?);
        self.cache.insert(hex, report.clone());
        Ok(report)
    }

    pub fn analyzer(&self) -> &PacketAnalyzer {
        &self.analyzer
    }

    pub fn cache(&self) -> &ReportCache {
        &self.cache
    }
}
