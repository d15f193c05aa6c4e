use crate::reports;
use clap::Args;
use keyergo::config::AnalyzerConfig;
use keyergo::error::{KeResult, KeyErgoError};
use keyergo::layouts;
use keyergo::scorer::{AnalysisResult, Analyzer};
use rayon::prelude::*;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub config: AnalyzerConfig,

    /// Comma-separated built-in layout names.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "qwerty,dvorak,colemak,colemak-dh,workman,halmak"
    )]
    pub layouts: Vec<String>,

    /// Metric to sort by, lowest first.
    #[arg(long, default_value = "effort")]
    pub sort_by: String,

    /// Also write the comparison to this CSV file.
    #[arg(long)]
    pub csv: Option<String>,
}

pub fn run(args: CompareArgs, analyzer: &Analyzer, corpus: Option<&str>) -> KeResult<()> {
    if !AnalysisResult::FIELD_NAMES.contains(&args.sort_by.as_str()) {
        return Err(KeyErgoError::Validation(format!(
            "Unknown metric '{}'. Expected one of: {}",
            args.sort_by,
            AnalysisResult::FIELD_NAMES.join(", ")
        )));
    }

    let mut mappings = Vec::with_capacity(args.layouts.len());
    for name in &args.layouts {
        let mapping = layouts::builtin(name)
            .ok_or_else(|| KeyErgoError::Validation(format!("Unknown layout '{}'", name)))?;
        mappings.push((name.clone(), mapping));
    }

    info!("Comparing {} layouts", mappings.len());
    let mut results: Vec<(String, AnalysisResult)> = mappings
        .par_iter()
        .map(|(name, mapping)| (name.clone(), analyzer.analyze(mapping, corpus)))
        .collect();

    let metric = args.sort_by.as_str();
    results.sort_by(|a, b| {
        let va = a.1.get(metric).unwrap_or(0.0);
        let vb = b.1.get(metric).unwrap_or(0.0);
        va.total_cmp(&vb).then_with(|| a.0.cmp(&b.0))
    });

    reports::print_comparison_report(&results, metric);

    if let Some(path) = &args.csv {
        reports::write_csv(path, &results)?;
        info!("Wrote comparison to {}", path);
    }
    Ok(())
}
