use crate::cache::AnalysisCache;
use crate::config::AnalyzerConfig;
use crate::error::{KeResult, KeyErgoError};
use crate::layouts::{self, LayoutMapping};
use crate::scorer::{AnalysisResult, Analyzer};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::{info, warn};

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Shared state for API-style callers: one analyzer plus a result cache.
pub struct AnalysisService {
    pub analyzer: Analyzer,
    cache: RwLock<AnalysisCache>,
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self {
            analyzer: Analyzer::default(),
            cache: RwLock::new(AnalysisCache::new(DEFAULT_CACHE_CAPACITY)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub layout_name: String,
    pub result: AnalysisResult,
    /// Keystroke share of each slot in `geometry::KEYS` order, scaled so the
    /// busiest slot is 1.0.
    pub heatmap: Vec<f64>,
}

impl AnalysisService {
    pub fn new(config: AnalyzerConfig, cache_capacity: usize) -> KeResult<Self> {
        Ok(Self {
            analyzer: Analyzer::new(config)?,
            cache: RwLock::new(AnalysisCache::new(cache_capacity)),
        })
    }

    fn cached(&self, layout: &LayoutMapping, corpus: Option<&str>) -> KeResult<AnalysisResult> {
        let mut guard = self
            .cache
            .write()
            .map_err(|e| KeyErgoError::State(e.to_string()))?;
        Ok(guard.get_or_analyze(&self.analyzer, layout, corpus))
    }

    /// Analyzes a JSON layout object (`{"q": "q", "w": "d", ...}`).
    pub fn analyze_layout_json(&self, json: &str, corpus: Option<&str>) -> KeResult<AnalysisResult> {
        let layout = LayoutMapping::from_json(json)?;
        self.cached(&layout, corpus)
    }

    pub fn analyze_named(&self, name: &str, corpus: Option<&str>) -> KeResult<AnalysisResult> {
        let layout = layouts::builtin(name)
            .ok_or_else(|| KeyErgoError::Validation(format!("Unknown layout '{}'", name)))?;
        self.cached(&layout, corpus)
    }

    /// Built-in layouts ordered by one metric, lowest first.
    pub fn rank(
        &self,
        names: &[&str],
        corpus: Option<&str>,
        by: &str,
    ) -> KeResult<Vec<(String, AnalysisResult)>> {
        if !AnalysisResult::FIELD_NAMES.contains(&by) {
            return Err(KeyErgoError::Validation(format!("Unknown metric '{}'", by)));
        }

        let mut ranked = Vec::with_capacity(names.len());
        for name in names {
            let result = self.analyze_named(name, corpus)?;
            ranked.push((name.to_string(), result));
        }
        ranked.sort_by(|a, b| {
            let va = a.1.get(by).unwrap_or(0.0);
            let vb = b.1.get(by).unwrap_or(0.0);
            va.total_cmp(&vb).then_with(|| a.0.cmp(&b.0))
        });

        info!("Ranked {} layouts by {}", ranked.len(), by);
        Ok(ranked)
    }

    /// Uncached analysis with a per-slot usage heatmap.
    pub fn report(&self, name: &str, layout: &LayoutMapping, corpus: Option<&str>) -> LayoutReport {
        let analysis = self.analyzer.analyze_detailed(layout, corpus);
        let counts = &analysis.details.key_usage;

        let max = counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            warn!("Layout '{}' produced no keystrokes on the corpus", name);
        }
        let heatmap = counts
            .iter()
            .map(|&n| if max > 0 { n as f64 / max as f64 } else { 0.0 })
            .collect();

        LayoutReport {
            layout_name: name.to_string(),
            result: analysis.result,
            heatmap,
        }
    }

    pub fn cache_len(&self) -> KeResult<usize> {
        let guard = self
            .cache
            .read()
            .map_err(|e| KeyErgoError::State(e.to_string()))?;
        Ok(guard.len())
    }

    pub fn clear_cache(&self) -> KeResult<()> {
        self.cache
            .write()
            .map_err(|e| KeyErgoError::State(e.to_string()))?
            .clear();
        Ok(())
    }
}
