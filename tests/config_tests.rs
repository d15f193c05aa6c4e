mod common;

use clap::{CommandFactory, FromArgMatches, Parser};
use common::qwerty;
use keyergo::config::{AnalyzerConfig, BigramMultipliers};
use keyergo::error::KeyErgoError;
use keyergo::scorer::Analyzer;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: AnalyzerConfig,
}

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_json(r#"{ "multipliers": { "same_finger": 5.0 }, "top_n": 3 }"#);
    let config = AnalyzerConfig::load_from_file(file.path()).unwrap();

    assert_eq!(config.multipliers.same_finger, 5.0);
    assert_eq!(config.multipliers.scissors, BigramMultipliers::DEFAULT.scissors);
    assert_eq!(config.top_n, 3);
    assert_eq!(config.unknown_key_penalty, 5.0);
}

#[test]
fn test_rejects_non_positive_multiplier() {
    let file = write_json(r#"{ "multipliers": { "hand_alternation": 0.0 } }"#);
    let err = AnalyzerConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, KeyErgoError::Config(_)), "got {:?}", err);
}

#[test]
fn test_rejects_malformed_json() {
    let file = write_json("{ not json");
    let err = AnalyzerConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, KeyErgoError::Json(_)), "got {:?}", err);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = AnalyzerConfig::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, KeyErgoError::Config(_)));
}

#[test]
fn test_analyzer_new_validates() {
    let config = AnalyzerConfig {
        neutral_effort: -1.0,
        ..Default::default()
    };
    assert!(Analyzer::new(config).is_err());
}

#[test]
fn test_cli_overrides_only_explicit_flags() {
    let file = write_json(r#"{ "multipliers": { "same_finger": 5.0, "scissors": 2.0 }, "top_n": 3 }"#);
    let mut config = AnalyzerConfig::load_from_file(file.path()).unwrap();

    let matches = TestCli::command()
        .get_matches_from(["test", "--mult-same-finger", "2.5", "--unknown-key-penalty", "6"]);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    config.merge_from_cli(&cli.config, &matches);

    assert_eq!(config.multipliers.same_finger, 2.5);
    assert_eq!(config.unknown_key_penalty, 6.0);
    // Untouched by the command line, so the file wins over clap defaults
    assert_eq!(config.multipliers.scissors, 2.0);
    assert_eq!(config.top_n, 3);
}

#[test]
fn test_lower_sfb_multiplier_lowers_effort() {
    let soft = AnalyzerConfig {
        multipliers: BigramMultipliers {
            same_finger: 1.0,
            ..BigramMultipliers::DEFAULT
        },
        ..Default::default()
    };
    let soft = Analyzer::new(soft).unwrap().analyze(&qwerty(), None);
    let hard = Analyzer::default().analyze(&qwerty(), None);

    assert!(soft.effort < hard.effort);
    assert_eq!(soft.same_finger_bigrams_pct, hard.same_finger_bigrams_pct);
}

#[test]
fn test_default_config_roundtrips_through_json() {
    let config = AnalyzerConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
