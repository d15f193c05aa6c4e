use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use keyergo::config::AnalyzerConfig;
use keyergo::corpus;
use keyergo::scorer::Analyzer;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Text file to analyze instead of the built-in sample.
    #[arg(global = true, short, long)]
    corpus: Option<String>,

    /// JSON analyzer config; explicit command-line flags still win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Compare(cmd::compare::CompareArgs),
    Tables(cmd::tables::TablesArgs),
}

fn fail(e: impl std::fmt::Display) -> ! {
    error!("{}", e);
    process::exit(1);
}

fn main() {
    // Raw matches tell user input apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Analyzer flags live inside the subcommand's matches, not the root.
    let (cli_config, sub_name) = match &cli.command {
        Commands::Analyze(args) => (&args.config, "analyze"),
        Commands::Compare(args) => (&args.config, "compare"),
        Commands::Tables(args) => (&args.config, "tables"),
    };

    let config = match &cli.config {
        Some(path) => {
            info!("Loading analyzer config from {}", path);
            let mut file_config = AnalyzerConfig::load_from_file(path).unwrap_or_else(|e| fail(e));
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config.clone(),
    };

    let analyzer = Analyzer::new(config).unwrap_or_else(|e| fail(e));

    let corpus_text = match &cli.corpus {
        Some(path) => Some(corpus::load_corpus(path).unwrap_or_else(|e| fail(e))),
        None => {
            if !matches!(cli.command, Commands::Tables(_)) {
                info!("No corpus given, using the built-in sample");
            }
            None
        }
    };
    let corpus_ref = corpus_text.as_deref();

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &analyzer, corpus_ref, cli.debug),
        Commands::Compare(args) => cmd::compare::run(args, &analyzer, corpus_ref),
        Commands::Tables(_) => {
            cmd::tables::run(analyzer.config());
            Ok(())
        }
    };

    if let Err(e) = outcome {
        fail(e);
    }
}
