use crate::geometry::{Finger, Hand, PhysicalKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter};

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
    AsRefStr,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TrigramCategory {
    Alt,
    /// Alternation that returns to the finger it started on.
    AltSfs,
    RollIn,
    RollOut,
    Redirect,
    /// Redirect without an index finger.
    WeakRedirect,
    BigramRollIn,
    BigramRollOut,
    Other,
}

impl TrigramCategory {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollDirection {
    /// Towards the index finger.
    Inward,
    /// Towards the pinky.
    Outward,
}

/// Direction of a same-hand finger step. Left-hand ids grow towards the index
/// finger, right-hand ids shrink towards it.
#[inline(always)]
pub fn roll_direction(f1: Finger, f2: Finger) -> Option<RollDirection> {
    let ord = f1.id().cmp(&f2.id());
    let inward = match f1.hand() {
        Hand::Left => Ordering::Less,
        Hand::Right => Ordering::Greater,
    };
    match ord {
        Ordering::Equal => None,
        o if o == inward => Some(RollDirection::Inward),
        _ => Some(RollDirection::Outward),
    }
}

#[inline(always)]
fn bigram_roll(f1: Finger, f2: Finger) -> TrigramCategory {
    match roll_direction(f1, f2) {
        Some(RollDirection::Inward) => TrigramCategory::BigramRollIn,
        Some(RollDirection::Outward) => TrigramCategory::BigramRollOut,
        None => TrigramCategory::Other,
    }
}

fn one_hand(f1: Finger, f2: Finger, f3: Finger) -> TrigramCategory {
    let d1 = roll_direction(f1, f2);
    let d2 = roll_direction(f2, f3);

    match (d1, d2) {
        (Some(RollDirection::Inward), Some(RollDirection::Inward)) => {
            return TrigramCategory::RollIn
        }
        (Some(RollDirection::Outward), Some(RollDirection::Outward)) => {
            return TrigramCategory::RollOut
        }
        _ => {}
    }

    let (a, b, c) = (f1.id(), f2.id(), f3.id());
    let is_peak = b > a && b > c;
    let is_valley = b < a && b < c;
    if !(is_peak || is_valley) {
        // Ties between neighbouring fingers
        return TrigramCategory::Other;
    }

    if f1.is_index() || f2.is_index() || f3.is_index() {
        TrigramCategory::Redirect
    } else {
        TrigramCategory::WeakRedirect
    }
}

/// Classifies three consecutive keystrokes. First match wins:
/// alternation, one-hand roll/redirect, two-key roll, other.
pub fn classify(k1: &PhysicalKey, k2: &PhysicalKey, k3: &PhysicalKey) -> TrigramCategory {
    let (f1, f2, f3) = (k1.finger, k2.finger, k3.finger);
    let (h1, h2, h3) = (f1.hand(), f2.hand(), f3.hand());

    if h1 != h2 && h2 != h3 {
        return if f1 == f3 {
            TrigramCategory::AltSfs
        } else {
            TrigramCategory::Alt
        };
    }

    if h1 == h2 && h2 == h3 {
        return one_hand(f1, f2, f3);
    }

    if h1 == h2 {
        return bigram_roll(f1, f2);
    }
    if h2 == h3 {
        return bigram_roll(f2, f3);
    }

    TrigramCategory::Other
}

/// Unknown keys never match a pattern.
#[inline(always)]
pub fn classify_keys(
    k1: Option<&PhysicalKey>,
    k2: Option<&PhysicalKey>,
    k3: Option<&PhysicalKey>,
) -> TrigramCategory {
    match (k1, k2, k3) {
        (Some(a), Some(b), Some(c)) => classify(a, b, c),
        _ => TrigramCategory::Other,
    }
}
