use crate::reports;
use clap::Args;
use keyergo::config::AnalyzerConfig;

#[derive(Args, Debug, Clone)]
pub struct TablesArgs {
    #[command(flatten)]
    pub config: AnalyzerConfig,
}

pub fn run(config: &AnalyzerConfig) {
    println!("\nBase effort by finger and row");
    reports::print_effort_table();
    println!("\nBigram multipliers");
    reports::print_multiplier_table(&config.multipliers);
}
