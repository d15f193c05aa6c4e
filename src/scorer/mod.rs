pub mod costs;
pub mod engine;
pub mod flow;
pub mod physics;
pub mod types;

pub use self::costs::{EffortCategory, EffortModel};
pub use self::flow::{classify_keys, TrigramCategory};
pub use self::types::{Analysis, AnalysisDetails, AnalysisResult, BigramCount};

use self::engine::CharTable;
use crate::config::AnalyzerConfig;
use crate::corpus;
use crate::error::KeResult;
use crate::geometry;
use crate::layouts::LayoutMapping;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Stateless layout analyzer. Every call is independent, so one instance can
/// be shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    model: EffortModel,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::from_valid(AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> KeResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: AnalyzerConfig) -> Self {
        let model = EffortModel::new(config.multipliers, config.neutral_effort);
        Self { config, model }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn model(&self) -> &EffortModel {
        &self.model
    }

    /// Stable digest of the settings that influence results.
    pub fn fingerprint(&self) -> String {
        let json = serde_json::to_string(&self.config).unwrap_or_default();
        hex::encode(Sha256::digest(json.as_bytes()))
    }

    pub fn analyze(&self, layout: &LayoutMapping, corpus_text: Option<&str>) -> AnalysisResult {
        self.analyze_detailed(layout, corpus_text).result
    }

    /// Full analysis including raw counters and top bigram lists.
    pub fn analyze_detailed(&self, layout: &LayoutMapping, corpus_text: Option<&str>) -> Analysis {
        let text = corpus_text.unwrap_or(corpus::DEFAULT_CORPUS);
        let chars = corpus::clean(text);
        let table = char_table(layout);

        let analysis = engine::run(
            &self.model,
            self.config.unknown_key_penalty,
            &table,
            &chars,
            self.config.top_n,
        );

        debug!(
            chars = analysis.details.total_chars,
            unknown = analysis.details.unknown_chars,
            effort = analysis.result.effort,
            sfb_pct = analysis.result.same_finger_bigrams_pct,
            "analysis complete"
        );
        analysis
    }
}

/// Resolves every letter through the layout once, ahead of the corpus pass.
fn char_table(layout: &LayoutMapping) -> CharTable {
    let positions = layout.char_positions();
    let mut table: CharTable = [None; 26];
    for (i, slot) in table.iter_mut().enumerate() {
        let c = (b'a' + i as u8) as char;
        let position = positions.get(&c).copied().unwrap_or(c);
        *slot = geometry::lookup(position);
    }
    table
}

/// Analyzes a layout under the default configuration.
pub fn analyze(layout: &LayoutMapping, corpus_text: Option<&str>) -> AnalysisResult {
    Analyzer::default().analyze(layout, corpus_text)
}
