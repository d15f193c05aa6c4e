use crate::geometry::PhysicalKey;

/// Column pairs that bridge an index finger's inner reach and the middle or
/// ring finger of the same hand.
pub const LATERAL_STRETCH_COLUMNS: [(u8, u8); 8] = [
    (5, 3),
    (3, 5),
    (5, 2),
    (2, 5),
    (6, 8),
    (8, 6),
    (6, 9),
    (9, 6),
];

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct KeyInteraction {
    pub is_same_hand: bool,
    pub is_repeat: bool,

    pub row_diff: u8,
    pub col_diff: u8,

    // Interaction types. These overlap freely.
    pub is_sfb: bool,
    pub is_two_row_sfb: bool,
    pub is_skip: bool,
    pub is_skip2: bool,
    pub is_lateral_stretch: bool,
    pub is_scissor: bool,
    pub is_pinky_scissor: bool,
    pub is_two_row_jump: bool,
    pub is_home_row_pair: bool,
}

#[inline(always)]
pub fn is_lateral_stretch_pair(col1: u8, col2: u8) -> bool {
    LATERAL_STRETCH_COLUMNS.contains(&(col1, col2))
}

#[inline(always)]
fn check_sfb(res: &mut KeyInteraction) {
    res.is_sfb = true;
    res.is_two_row_sfb = res.row_diff >= 2;
}

#[inline(always)]
fn check_scissors(res: &mut KeyInteraction, k1: &PhysicalKey, k2: &PhysicalKey) {
    if k1.finger.id().abs_diff(k2.finger.id()) == 1 && res.row_diff >= 2 {
        res.is_scissor = true;
        res.is_pinky_scissor = k1.finger.is_pinky() || k2.finger.is_pinky();
    }
}

/// Classifies the geometric relationship of two consecutive keystrokes.
pub fn analyze_interaction(k1: &PhysicalKey, k2: &PhysicalKey) -> KeyInteraction {
    let mut res = KeyInteraction {
        row_diff: k1.row.abs_diff(k2.row),
        col_diff: k1.col.abs_diff(k2.col),
        ..Default::default()
    };

    if k1.name == k2.name {
        res.is_repeat = true;
    }

    if k1.row == k2.row {
        res.is_skip = res.col_diff == 2;
        res.is_skip2 = res.col_diff == 3;
    }

    res.is_lateral_stretch = is_lateral_stretch_pair(k1.col, k2.col);
    res.is_two_row_jump = res.row_diff >= 2;

    if k1.hand() != k2.hand() {
        return res;
    }
    res.is_same_hand = true;
    res.is_home_row_pair = k1.is_home_row() && k2.is_home_row();

    if k1.finger == k2.finger {
        if !res.is_repeat {
            check_sfb(&mut res);
        }
    } else {
        check_scissors(&mut res, k1, k2);
    }

    res
}
