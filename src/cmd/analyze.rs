use crate::reports;
use clap::Args;
use keyergo::config::AnalyzerConfig;
use keyergo::error::{KeResult, KeyErgoError};
use keyergo::layouts::{self, LayoutMapping};
use keyergo::scorer::Analyzer;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalyzerConfig,

    /// Built-in layout name.
    #[arg(short, long, default_value = "qwerty")]
    pub layout: String,

    /// JSON object mapping positions to characters; overrides --layout.
    #[arg(long)]
    pub layout_file: Option<String>,

    /// Print the result as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn resolve_layout(args: &AnalyzeArgs) -> KeResult<(String, LayoutMapping)> {
    if let Some(path) = &args.layout_file {
        let json = fs::read_to_string(path)?;
        let mapping = LayoutMapping::from_json(&json)?;
        let name = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        info!("Loaded layout '{}' from {}", name, path);
        return Ok((name, mapping));
    }

    let mapping = layouts::builtin(&args.layout)
        .ok_or_else(|| KeyErgoError::Validation(format!("Unknown layout '{}'", args.layout)))?;
    Ok((args.layout.clone(), mapping))
}

pub fn run(args: AnalyzeArgs, analyzer: &Analyzer, corpus: Option<&str>, debug: bool) -> KeResult<()> {
    let (name, layout) = resolve_layout(&args)?;
    let analysis = analyzer.analyze_detailed(&layout, corpus);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis.result.rounded())?);
        return Ok(());
    }

    reports::print_layout_grid(&name, &layout);
    reports::print_metric_table(&name, &analysis.result);
    if debug {
        reports::print_breakdowns(&analysis.details);
    }
    Ok(())
}
