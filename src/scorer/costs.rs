use super::physics::{analyze_interaction, KeyInteraction};
use crate::config::{BigramMultipliers, NEUTRAL_EFFORT};
use crate::geometry::{Finger, PhysicalKey, ROW_COUNT};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// Base keystroke effort by finger strength (pinky, ring, middle, index) and
/// row (number, top, home, bottom). Both hands share the table.
pub static EFFORT_TABLE: [[f64; ROW_COUNT]; 4] = [
    [4.2, 2.8, 1.8, 3.2], // Pinky
    [3.6, 2.1, 1.4, 2.6], // Ring
    [3.2, 1.6, 1.2, 2.2], // Middle
    [3.4, 1.8, 1.1, 2.0], // Index
];

/// Dominant penalty of a bigram, used to break total effort down in reports.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EffortCategory {
    Neutral,
    SameFinger,
    SameFingerLong,
    LateralStretch,
    Scissor,
    PinkyScissor,
    Alternation,
}

/// Raw table entry; `None` for rows outside the table.
#[inline(always)]
pub fn lookup_effort(finger: Finger, row: u8) -> Option<f64> {
    EFFORT_TABLE[finger.strength_rank()]
        .get(row as usize)
        .copied()
}

/// Table lookup with the neutral fallback.
#[inline(always)]
pub fn base_effort(finger: Finger, row: u8) -> f64 {
    lookup_effort(finger, row).unwrap_or(NEUTRAL_EFFORT)
}

/// Bigram effort under the default multipliers.
pub fn bigram_effort(k1: &PhysicalKey, k2: &PhysicalKey) -> f64 {
    EffortModel::default().bigram_effort(k1, k2)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffortModel {
    pub multipliers: BigramMultipliers,
    pub neutral_effort: f64,
}

impl Default for EffortModel {
    fn default() -> Self {
        Self {
            multipliers: BigramMultipliers::DEFAULT,
            neutral_effort: NEUTRAL_EFFORT,
        }
    }
}

impl EffortModel {
    pub fn new(multipliers: BigramMultipliers, neutral_effort: f64) -> Self {
        Self {
            multipliers,
            neutral_effort,
        }
    }

    #[inline(always)]
    pub fn key_effort(&self, key: &PhysicalKey) -> f64 {
        lookup_effort(key.finger, key.row).unwrap_or(self.neutral_effort)
    }

    pub fn bigram_effort(&self, k1: &PhysicalKey, k2: &PhysicalKey) -> f64 {
        let m = analyze_interaction(k1, k2);
        let base = self.key_effort(k1) + self.key_effort(k2);
        base * self.multiplier_for(&m)
    }

    /// Product of every multiplier the interaction qualifies for.
    pub fn multiplier_for(&self, m: &KeyInteraction) -> f64 {
        let w = &self.multipliers;
        let mut factor = 1.0;

        if m.is_sfb {
            if m.row_diff == 1 {
                factor *= w.same_finger;
            } else if m.row_diff >= 2 {
                factor *= w.skip_bigram;
            }
        }

        if m.is_lateral_stretch {
            factor *= w.lateral_stretch;
        }

        if m.is_scissor {
            factor *= if m.is_pinky_scissor {
                w.pinky_scissors
            } else {
                w.scissors
            };
        }

        if m.is_home_row_pair {
            factor *= w.home_row;
        }

        if !m.is_same_hand {
            factor *= w.hand_alternation;
        }

        factor
    }

    /// Dominant penalty of a bigram, for reporting.
    pub fn categorize(&self, m: &KeyInteraction) -> EffortCategory {
        if m.is_sfb {
            if m.row_diff >= 2 {
                return EffortCategory::SameFingerLong;
            }
            return EffortCategory::SameFinger;
        }
        if m.is_pinky_scissor {
            return EffortCategory::PinkyScissor;
        }
        if m.is_scissor {
            return EffortCategory::Scissor;
        }
        if m.is_lateral_stretch {
            return EffortCategory::LateralStretch;
        }
        if !m.is_same_hand {
            return EffortCategory::Alternation;
        }
        EffortCategory::Neutral
    }
}
