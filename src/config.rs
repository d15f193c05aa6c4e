use crate::error::{KeResult, KeyErgoError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Effort charged for a keystroke or bigram that cannot be placed on the key table.
pub const UNKNOWN_KEY_PENALTY: f64 = 5.0;

/// Effort used when a (finger, row) pair has no entry in the effort table.
pub const NEUTRAL_EFFORT: f64 = 3.0;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    #[command(flatten)]
    pub multipliers: BigramMultipliers,

    #[arg(long, default_value_t = UNKNOWN_KEY_PENALTY)]
    pub unknown_key_penalty: f64,

    #[arg(long, default_value_t = NEUTRAL_EFFORT)]
    pub neutral_effort: f64,

    /// Length of the per-bigram debug lists.
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            multipliers: BigramMultipliers::default(),
            unknown_key_penalty: UNKNOWN_KEY_PENALTY,
            neutral_effort: NEUTRAL_EFFORT,
            top_n: 10,
        }
    }
}

/// Multiplicative factors applied to the summed base effort of a bigram.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BigramMultipliers {
    // === SAME FINGER ===
    #[arg(long = "mult-same-finger", default_value_t = 8.0)]
    pub same_finger: f64,
    // Same finger, two or more rows apart
    #[arg(long = "mult-skip-bigram", default_value_t = 4.0)]
    pub skip_bigram: f64,

    // === STRETCHES ===
    #[arg(long = "mult-lateral-stretch", default_value_t = 3.5)]
    pub lateral_stretch: f64,
    #[arg(long = "mult-scissors", default_value_t = 2.8)]
    pub scissors: f64,
    #[arg(long = "mult-pinky-scissors", default_value_t = 3.2)]
    pub pinky_scissors: f64,

    // === NEUTRAL / BONUS ===
    #[arg(long = "mult-home-row", default_value_t = 1.0)]
    pub home_row: f64,
    #[arg(long = "mult-adjacent-finger", default_value_t = 1.2)]
    pub adjacent_finger: f64,
    #[arg(long = "mult-hand-alternation", default_value_t = 0.9)]
    pub hand_alternation: f64,
}

impl BigramMultipliers {
    pub const DEFAULT: BigramMultipliers = BigramMultipliers {
        same_finger: 8.0,
        skip_bigram: 4.0,
        lateral_stretch: 3.5,
        scissors: 2.8,
        pinky_scissors: 3.2,
        home_row: 1.0,
        adjacent_finger: 1.2,
        hand_alternation: 0.9,
    };

    /// Named view used by reports and validation.
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("same_finger", self.same_finger),
            ("skip_bigram", self.skip_bigram),
            ("lateral_stretch", self.lateral_stretch),
            ("scissors", self.scissors),
            ("pinky_scissors", self.pinky_scissors),
            ("home_row", self.home_row),
            ("adjacent_finger", self.adjacent_finger),
            ("hand_alternation", self.hand_alternation),
        ]
    }
}

impl Default for BigramMultipliers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AnalyzerConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            KeyErgoError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: AnalyzerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KeResult<()> {
        for (name, value) in self.multipliers.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(KeyErgoError::Config(format!(
                    "Multiplier '{}' must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.unknown_key_penalty.is_finite() || self.unknown_key_penalty < 0.0 {
            return Err(KeyErgoError::Config(format!(
                "unknown_key_penalty must be non-negative, got {}",
                self.unknown_key_penalty
            )));
        }
        if !self.neutral_effort.is_finite() || self.neutral_effort < 0.0 {
            return Err(KeyErgoError::Config(format!(
                "neutral_effort must be non-negative, got {}",
                self.neutral_effort
            )));
        }
        Ok(())
    }

    /// Overrides fields of a file-loaded config with values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &AnalyzerConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($($field:ident).+, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$($field).+ = cli.$($field).+;
                }
            };
        }

        update_if_present!(multipliers.same_finger, "same_finger");
        update_if_present!(multipliers.skip_bigram, "skip_bigram");
        update_if_present!(multipliers.lateral_stretch, "lateral_stretch");
        update_if_present!(multipliers.scissors, "scissors");
        update_if_present!(multipliers.pinky_scissors, "pinky_scissors");
        update_if_present!(multipliers.home_row, "home_row");
        update_if_present!(multipliers.adjacent_finger, "adjacent_finger");
        update_if_present!(multipliers.hand_alternation, "hand_alternation");

        update_if_present!(unknown_key_penalty, "unknown_key_penalty");
        update_if_present!(neutral_effort, "neutral_effort");
        update_if_present!(top_n, "top_n");
    }
}
