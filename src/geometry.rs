use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Distance between neighbouring key centres, in millimetres.
pub const KEY_PITCH_MM: f64 = 19.05;

pub const ROW_COUNT: usize = 4;
pub const COL_COUNT: usize = 12;

/// 0 = number row, 1 = top, 2 = home, 3 = bottom.
pub const HOME_ROW: u8 = 2;

/// Columns typed by the index fingers' inner reach.
pub const CENTER_COLUMNS: [u8; 2] = [5, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// The eight typing fingers. Ids run left pinky (0) to left index (3),
/// then right index (4) to right pinky (7).
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
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Finger {
    LeftPinky = 0,
    LeftRing = 1,
    LeftMiddle = 2,
    LeftIndex = 3,
    RightIndex = 4,
    RightMiddle = 5,
    RightRing = 6,
    RightPinky = 7,
}

impl Finger {
    #[inline(always)]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub fn hand(self) -> Hand {
        if self.id() < 4 {
            Hand::Left
        } else {
            Hand::Right
        }
    }

    #[inline(always)]
    pub fn is_pinky(self) -> bool {
        matches!(self, Finger::LeftPinky | Finger::RightPinky)
    }

    #[inline(always)]
    pub fn is_index(self) -> bool {
        matches!(self, Finger::LeftIndex | Finger::RightIndex)
    }

    /// Position in the effort table: 0 = pinky .. 3 = index, mirrored per hand.
    #[inline(always)]
    pub fn strength_rank(self) -> usize {
        match self.hand() {
            Hand::Left => self.index(),
            Hand::Right => 7 - self.index(),
        }
    }

    /// Resting key of this finger.
    pub fn home_key(self) -> &'static PhysicalKey {
        let name = match self {
            Finger::LeftPinky => 'a',
            Finger::LeftRing => 's',
            Finger::LeftMiddle => 'd',
            Finger::LeftIndex => 'f',
            Finger::RightIndex => 'j',
            Finger::RightMiddle => 'k',
            Finger::RightRing => 'l',
            Finger::RightPinky => ';',
        };
        // Every home key is part of KEYS.
        lookup(name).unwrap_or(&KEYS[0])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhysicalKey {
    /// QWERTY legend of the slot, used as its position name.
    pub name: char,
    pub row: u8,
    pub col: u8,
    pub finger: Finger,
    /// Visual position inside the row, counted from the row's first key.
    pub slot: u8,
}

impl PhysicalKey {
    #[inline(always)]
    pub fn hand(&self) -> Hand {
        self.finger.hand()
    }

    #[inline(always)]
    pub fn is_home_row(&self) -> bool {
        self.row == HOME_ROW
    }

    #[inline(always)]
    pub fn is_center_column(&self) -> bool {
        CENTER_COLUMNS.contains(&self.col)
    }

    /// Horizontal centre in millimetres, including the ANSI row stagger.
    #[inline(always)]
    pub fn x(&self) -> f64 {
        let offset = match self.row {
            0 => 0.0,
            1 => 1.5,
            2 => 1.75,
            _ => 2.25,
        };
        (offset + f64::from(self.slot) + 0.5) * KEY_PITCH_MM
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        f64::from(self.row) * KEY_PITCH_MM
    }

    /// Euclidean distance between key centres in millimetres.
    #[inline(always)]
    pub fn distance_to(&self, other: &PhysicalKey) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }
}

const fn key(name: char, row: u8, col: u8, finger: Finger, slot: u8) -> PhysicalKey {
    PhysicalKey {
        name,
        row,
        col,
        finger,
        slot,
    }
}

use Finger::*;

/// The 42 physical slots of the analysed matrix, keyed by their QWERTY legend.
pub static KEYS: [PhysicalKey; 42] = [
    // ROW 0 (Number)
    key('`', 0, 0, LeftPinky, 0),
    key('1', 0, 1, LeftPinky, 1),
    key('2', 0, 2, LeftRing, 2),
    key('3', 0, 3, LeftMiddle, 3),
    key('4', 0, 4, LeftIndex, 4),
    key('5', 0, 5, LeftIndex, 5),
    key('6', 0, 6, RightIndex, 6),
    key('7', 0, 7, RightIndex, 7),
    key('8', 0, 8, RightMiddle, 8),
    key('9', 0, 9, RightRing, 9),
    key('0', 0, 10, RightPinky, 10),
    // ROW 1 (Top)
    key('q', 1, 1, LeftPinky, 0),
    key('w', 1, 2, LeftRing, 1),
    key('e', 1, 3, LeftMiddle, 2),
    key('r', 1, 4, LeftIndex, 3),
    key('t', 1, 5, LeftIndex, 4),
    key('y', 1, 6, RightIndex, 5),
    key('u', 1, 7, RightIndex, 6),
    key('i', 1, 8, RightMiddle, 7),
    key('o', 1, 9, RightRing, 8),
    key('p', 1, 10, RightPinky, 9),
    // ROW 2 (Home)
    key('a', 2, 1, LeftPinky, 0),
    key('s', 2, 2, LeftRing, 1),
    key('d', 2, 3, LeftMiddle, 2),
    key('f', 2, 4, LeftIndex, 3),
    key('g', 2, 5, LeftIndex, 4),
    key('h', 2, 6, RightIndex, 5),
    key('j', 2, 7, RightIndex, 6),
    key('k', 2, 8, RightMiddle, 7),
    key('l', 2, 9, RightRing, 8),
    key(';', 2, 10, RightPinky, 9),
    key('\'', 2, 11, RightPinky, 10),
    // ROW 3 (Bottom)
    key('z', 3, 1, LeftPinky, 0),
    key('x', 3, 2, LeftRing, 1),
    key('c', 3, 3, LeftMiddle, 2),
    key('v', 3, 4, LeftIndex, 3),
    key('b', 3, 5, LeftIndex, 4),
    key('n', 3, 6, RightIndex, 5),
    key('m', 3, 7, RightIndex, 6),
    key(',', 3, 8, RightMiddle, 7),
    key('.', 3, 9, RightRing, 8),
    key('/', 3, 10, RightPinky, 9),
];

/// Looks up a physical slot by position name. Case-insensitive.
pub fn lookup(name: char) -> Option<&'static PhysicalKey> {
    let name = name.to_ascii_lowercase();
    KEYS.iter().find(|k| k.name == name)
}

/// Index of a slot inside `KEYS`, used for dense per-position tables.
pub fn slot_index(name: char) -> Option<usize> {
    let name = name.to_ascii_lowercase();
    KEYS.iter().position(|k| k.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_has_unique_names() {
        for (i, a) in KEYS.iter().enumerate() {
            for b in KEYS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name, "duplicate slot '{}'", a.name);
            }
        }
    }

    #[test]
    fn test_home_keys_sit_on_home_row() {
        for finger in Finger::iter() {
            let home = finger.home_key();
            assert!(home.is_home_row(), "{} rests off the home row", finger);
            assert_eq!(home.finger, finger);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup('Q'), lookup('q'));
        assert!(lookup('-').is_none());
    }

    #[test]
    fn test_row_stagger_coordinates() {
        let q = lookup('q').unwrap();
        let a = lookup('a').unwrap();
        assert!((a.x() - q.x() - 0.25 * KEY_PITCH_MM).abs() < 1e-9);
        assert!((a.y() - q.y() - KEY_PITCH_MM).abs() < 1e-9);
    }
}
