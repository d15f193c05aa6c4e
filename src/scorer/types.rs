use super::costs::EffortCategory;
use super::flow::TrigramCategory;
use crate::geometry::{Finger, COL_COUNT, ROW_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};

/// A literal bigram and how often the corpus produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigramCount {
    pub keys: String, // e.g. "ed"
    pub count: usize,
}

/// The metric record consumed by ranking, description and persistence layers.
/// Percentages are 0-100 unless noted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Average effort per character (unitless).
    pub effort: f64,
    /// Average finger travel per character, in millimetres.
    pub distance: f64,
    /// Share of all travel done by the pinkies (0-1).
    pub pinky_distance: f64,
    pub pinky_off_home_pct: f64,

    pub same_finger_bigrams_pct: f64,
    pub skip_bigrams_pct: f64,
    pub skip_bigrams2_pct: f64,
    pub lateral_stretch_pct: f64,
    pub pinky_scissors_pct: f64,
    pub scissors_pct: f64,
    /// Share of same-finger bigrams that jump two or more rows.
    pub two_row_sfb_pct: f64,
    pub two_row_jumps_pct: f64,

    pub trigram_alt_pct: f64,
    pub tri_redirect_pct: f64,
    pub roll_in_pct: f64,
    pub roll_out_pct: f64,

    pub col5_6_pct: f64,
}

#[inline(always)]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl AnalysisResult {
    pub const FIELD_NAMES: [&'static str; 17] = [
        "effort",
        "distance",
        "pinky_distance",
        "pinky_off_home_pct",
        "same_finger_bigrams_pct",
        "skip_bigrams_pct",
        "skip_bigrams2_pct",
        "lateral_stretch_pct",
        "pinky_scissors_pct",
        "scissors_pct",
        "two_row_sfb_pct",
        "two_row_jumps_pct",
        "trigram_alt_pct",
        "tri_redirect_pct",
        "roll_in_pct",
        "roll_out_pct",
        "col5_6_pct",
    ];

    /// Field values in `FIELD_NAMES` order.
    pub fn values(&self) -> [f64; 17] {
        [
            self.effort,
            self.distance,
            self.pinky_distance,
            self.pinky_off_home_pct,
            self.same_finger_bigrams_pct,
            self.skip_bigrams_pct,
            self.skip_bigrams2_pct,
            self.lateral_stretch_pct,
            self.pinky_scissors_pct,
            self.scissors_pct,
            self.two_row_sfb_pct,
            self.two_row_jumps_pct,
            self.trigram_alt_pct,
            self.tri_redirect_pct,
            self.roll_in_pct,
            self.roll_out_pct,
            self.col5_6_pct,
        ]
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::FIELD_NAMES.into_iter().zip(self.values())
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Display form: every field rounded to two decimals.
    pub fn rounded(&self) -> AnalysisResult {
        AnalysisResult {
            effort: round2(self.effort),
            distance: round2(self.distance),
            pinky_distance: round2(self.pinky_distance),
            pinky_off_home_pct: round2(self.pinky_off_home_pct),
            same_finger_bigrams_pct: round2(self.same_finger_bigrams_pct),
            skip_bigrams_pct: round2(self.skip_bigrams_pct),
            skip_bigrams2_pct: round2(self.skip_bigrams2_pct),
            lateral_stretch_pct: round2(self.lateral_stretch_pct),
            pinky_scissors_pct: round2(self.pinky_scissors_pct),
            scissors_pct: round2(self.scissors_pct),
            two_row_sfb_pct: round2(self.two_row_sfb_pct),
            two_row_jumps_pct: round2(self.two_row_jumps_pct),
            trigram_alt_pct: round2(self.trigram_alt_pct),
            tri_redirect_pct: round2(self.tri_redirect_pct),
            roll_in_pct: round2(self.roll_in_pct),
            roll_out_pct: round2(self.roll_out_pct),
            col5_6_pct: round2(self.col5_6_pct),
        }
    }
}

/// Raw counters behind an `AnalysisResult`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub total_chars: usize,
    pub total_bigrams: usize,
    pub total_trigrams: usize,
    pub unknown_chars: usize,

    pub total_effort: f64,
    pub total_distance: f64,
    pub pinky_distance: f64,

    pub finger_usage: BTreeMap<Finger, usize>,
    pub finger_distance: BTreeMap<Finger, f64>,
    pub row_usage: [usize; ROW_COUNT],
    pub col_usage: [usize; COL_COUNT],
    /// Presses per slot, in `geometry::KEYS` order.
    pub key_usage: Vec<usize>,

    pub stat_sfb: usize,
    pub stat_two_row_sfb: usize,
    pub stat_skip: usize,
    pub stat_skip2: usize,
    pub stat_lateral: usize,
    pub stat_scissors: usize,
    pub stat_pinky_scissors: usize,
    pub stat_two_row_jumps: usize,
    pub stat_pinky_off_home: usize,
    pub stat_center_cols: usize,

    pub trigram_counts: BTreeMap<TrigramCategory, usize>,
    /// Bigram surcharge on top of base keystroke effort, by dominant penalty.
    pub effort_surcharge: BTreeMap<EffortCategory, f64>,

    pub top_sfbs: Vec<BigramCount>,
    pub top_skips: Vec<BigramCount>,
    pub top_skips2: Vec<BigramCount>,
    pub top_lateral: Vec<BigramCount>,
    pub top_scissors: Vec<BigramCount>,
    pub top_two_row_jumps: Vec<BigramCount>,
}

impl AnalysisDetails {
    pub fn trigram_count(&self, category: TrigramCategory) -> usize {
        self.trigram_counts.get(&category).copied().unwrap_or(0)
    }

    /// Sum over every trigram category.
    pub fn classified_trigrams(&self) -> usize {
        debug_assert!(self.trigram_counts.len() <= TrigramCategory::COUNT);
        TrigramCategory::iter()
            .map(|c| self.trigram_count(c))
            .sum()
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub details: AnalysisDetails,
}
