use crate::corpus::DEFAULT_CORPUS;
use crate::layouts::LayoutMapping;
use crate::scorer::{AnalysisResult, Analyzer};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Cache key for one (layout, corpus) pair. `None` hashes the built-in
/// corpus, so it shares entries with the same text passed explicitly.
pub fn cache_key(layout: &LayoutMapping, corpus: Option<&str>) -> String {
    let text = corpus.unwrap_or(DEFAULT_CORPUS);
    let corpus_tag = hex::encode(Sha256::digest(text.as_bytes()));
    format!("{}#{}", layout.normalized_key(), corpus_tag)
}

/// Bounded memo of analysis results, evicting the oldest entry first.
/// Owned by the caller; the analyzer itself keeps no state.
#[derive(Debug, Clone, Default)]
pub struct AnalysisCache {
    capacity: usize,
    entries: HashMap<String, AnalysisResult>,
    order: VecDeque<String>,
}

impl AnalysisCache {
    /// A capacity of 0 disables storage.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<AnalysisResult> {
        self.entries.get(key).copied()
    }

    pub fn insert(&mut self, key: String, result: AnalysisResult) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.insert(key.clone(), result).is_some() {
            return;
        }
        self.order.push_back(key);
        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            debug!(key = %oldest, "evicted cached analysis");
        }
    }

    pub fn evict(&mut self, key: &str) -> Option<AnalysisResult> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Cached result for the pair, analyzing and storing it on a miss. Keys
    /// include the analyzer fingerprint, so differently configured analyzers
    /// never share entries.
    pub fn get_or_analyze(
        &mut self,
        analyzer: &Analyzer,
        layout: &LayoutMapping,
        corpus: Option<&str>,
    ) -> AnalysisResult {
        let key = format!("{}@{}", cache_key(layout, corpus), analyzer.fingerprint());
        if let Some(hit) = self.get(&key) {
            return hit;
        }
        let result = analyzer.analyze(layout, corpus);
        self.insert(key, result);
        result
    }
}
