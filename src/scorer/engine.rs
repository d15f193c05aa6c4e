use super::costs::EffortModel;
use super::flow::{classify_keys, TrigramCategory};
use super::physics::analyze_interaction;
use super::types::{Analysis, AnalysisDetails, AnalysisResult, BigramCount};
use crate::geometry::{self, Finger, PhysicalKey, KEYS};
use std::collections::HashMap;
use strum::{EnumCount, IntoEnumIterator};

/// Resolved physical key per lowercase letter; `None` when the layout sends
/// the letter to a slot outside the key table.
pub type CharTable = [Option<&'static PhysicalKey>; 26];

#[inline(always)]
fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_lowercase() {
        Some((c as u8 - b'a') as usize)
    } else {
        None
    }
}

#[inline(always)]
fn pct(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[inline(always)]
fn ratio(value: f64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value / total as f64
    }
}

/// Running counters for one analysis call.
struct Accumulator<'a> {
    model: &'a EffortModel,
    unknown_penalty: f64,

    d: AnalysisDetails,
    finger_usage: [usize; Finger::COUNT],
    finger_distance: [f64; Finger::COUNT],
    finger_last: [&'static PhysicalKey; Finger::COUNT],
    trigrams: [usize; TrigramCategory::COUNT],

    sfb_keys: HashMap<[char; 2], usize>,
    skip_keys: HashMap<[char; 2], usize>,
    skip2_keys: HashMap<[char; 2], usize>,
    lateral_keys: HashMap<[char; 2], usize>,
    scissor_keys: HashMap<[char; 2], usize>,
    jump_keys: HashMap<[char; 2], usize>,
}

impl<'a> Accumulator<'a> {
    fn new(model: &'a EffortModel, unknown_penalty: f64) -> Self {
        let mut finger_last = [Finger::LeftPinky.home_key(); Finger::COUNT];
        for finger in Finger::iter() {
            finger_last[finger.index()] = finger.home_key();
        }

        Self {
            model,
            unknown_penalty,
            d: AnalysisDetails {
                key_usage: vec![0; KEYS.len()],
                ..Default::default()
            },
            finger_usage: [0; Finger::COUNT],
            finger_distance: [0.0; Finger::COUNT],
            finger_last,
            trigrams: [0; TrigramCategory::COUNT],
            sfb_keys: HashMap::new(),
            skip_keys: HashMap::new(),
            skip2_keys: HashMap::new(),
            lateral_keys: HashMap::new(),
            scissor_keys: HashMap::new(),
            jump_keys: HashMap::new(),
        }
    }

    fn add_char(&mut self, key: Option<&'static PhysicalKey>) {
        self.d.total_chars += 1;

        let Some(k) = key else {
            self.d.unknown_chars += 1;
            self.d.total_effort += self.unknown_penalty;
            return;
        };

        self.d.total_effort += self.model.key_effort(k);

        let f = k.finger.index();
        self.finger_usage[f] += 1;
        if let Some(i) = geometry::slot_index(k.name) {
            self.d.key_usage[i] += 1;
        }

        // Travel is measured from wherever this finger last pressed.
        let dist = self.finger_last[f].distance_to(k);
        self.finger_last[f] = k;
        self.finger_distance[f] += dist;
        self.d.total_distance += dist;

        if k.finger.is_pinky() {
            self.d.pinky_distance += dist;
            if !k.is_home_row() {
                self.d.stat_pinky_off_home += 1;
            }
        }

        if let Some(slot) = self.d.row_usage.get_mut(k.row as usize) {
            *slot += 1;
        }
        if let Some(slot) = self.d.col_usage.get_mut(k.col as usize) {
            *slot += 1;
        }
        if k.is_center_column() {
            self.d.stat_center_cols += 1;
        }
    }

    fn add_bigram(
        &mut self,
        pair: [char; 2],
        k1: Option<&'static PhysicalKey>,
        k2: Option<&'static PhysicalKey>,
    ) {
        self.d.total_bigrams += 1;

        let (Some(a), Some(b)) = (k1, k2) else {
            self.d.total_effort += self.unknown_penalty;
            return;
        };

        let m = analyze_interaction(a, b);
        let base = self.model.key_effort(a) + self.model.key_effort(b);
        // Only the surcharge is added: the keystrokes were counted per character.
        let surcharge = base * self.model.multiplier_for(&m) - base;
        self.d.total_effort += surcharge;
        *self
            .d
            .effort_surcharge
            .entry(self.model.categorize(&m))
            .or_default() += surcharge;

        if m.is_sfb {
            self.d.stat_sfb += 1;
            *self.sfb_keys.entry(pair).or_default() += 1;
            if m.is_two_row_sfb {
                self.d.stat_two_row_sfb += 1;
            }
        }
        if m.is_skip {
            self.d.stat_skip += 1;
            *self.skip_keys.entry(pair).or_default() += 1;
        }
        if m.is_skip2 {
            self.d.stat_skip2 += 1;
            *self.skip2_keys.entry(pair).or_default() += 1;
        }
        if m.is_lateral_stretch {
            self.d.stat_lateral += 1;
            *self.lateral_keys.entry(pair).or_default() += 1;
        }
        if m.is_scissor {
            self.d.stat_scissors += 1;
            *self.scissor_keys.entry(pair).or_default() += 1;
            if m.is_pinky_scissor {
                self.d.stat_pinky_scissors += 1;
            }
        }
        if m.is_two_row_jump {
            self.d.stat_two_row_jumps += 1;
            *self.jump_keys.entry(pair).or_default() += 1;
        }
    }

    fn add_trigram(
        &mut self,
        k1: Option<&'static PhysicalKey>,
        k2: Option<&'static PhysicalKey>,
        k3: Option<&'static PhysicalKey>,
    ) {
        self.d.total_trigrams += 1;
        let category = classify_keys(k1, k2, k3);
        self.trigrams[category.index()] += 1;
    }

    fn finish(mut self, top_n: usize) -> Analysis {
        for finger in Finger::iter() {
            let i = finger.index();
            self.d.finger_usage.insert(finger, self.finger_usage[i]);
            self.d.finger_distance.insert(finger, self.finger_distance[i]);
        }
        for category in TrigramCategory::iter() {
            self.d.trigram_counts
                .insert(category, self.trigrams[category.index()]);
        }

        self.d.top_sfbs = top_bigrams(&self.sfb_keys, top_n);
        self.d.top_skips = top_bigrams(&self.skip_keys, top_n);
        self.d.top_skips2 = top_bigrams(&self.skip2_keys, top_n);
        self.d.top_lateral = top_bigrams(&self.lateral_keys, top_n);
        self.d.top_scissors = top_bigrams(&self.scissor_keys, top_n);
        self.d.top_two_row_jumps = top_bigrams(&self.jump_keys, top_n);

        let result = finalize(&self.d, &self.trigrams);
        Analysis {
            result,
            details: self.d,
        }
    }
}

/// Most frequent bigrams first; ties broken alphabetically so output is stable.
fn top_bigrams(counts: &HashMap<[char; 2], usize>, n: usize) -> Vec<BigramCount> {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(keys, &count)| BigramCount {
            keys: keys.iter().collect(),
            count,
        })
        .collect()
}

fn finalize(d: &AnalysisDetails, tri: &[usize; TrigramCategory::COUNT]) -> AnalysisResult {
    let chars = d.total_chars;
    let bigrams = d.total_bigrams;
    let trigrams = d.total_trigrams;
    let t = |c: TrigramCategory| tri[c.index()];

    let pinky_distance = if d.total_distance > 0.0 {
        d.pinky_distance / d.total_distance
    } else {
        0.0
    };

    AnalysisResult {
        effort: ratio(d.total_effort, chars),
        distance: ratio(d.total_distance, chars),
        pinky_distance,
        pinky_off_home_pct: pct(d.stat_pinky_off_home, chars),
        same_finger_bigrams_pct: pct(d.stat_sfb, bigrams),
        skip_bigrams_pct: pct(d.stat_skip, bigrams),
        skip_bigrams2_pct: pct(d.stat_skip2, bigrams),
        lateral_stretch_pct: pct(d.stat_lateral, bigrams),
        pinky_scissors_pct: pct(d.stat_pinky_scissors, bigrams),
        scissors_pct: pct(d.stat_scissors, bigrams),
        two_row_sfb_pct: pct(d.stat_two_row_sfb, d.stat_sfb),
        two_row_jumps_pct: pct(d.stat_two_row_jumps, bigrams),
        trigram_alt_pct: pct(
            t(TrigramCategory::Alt) + t(TrigramCategory::AltSfs),
            trigrams,
        ),
        tri_redirect_pct: pct(
            t(TrigramCategory::Redirect) + t(TrigramCategory::WeakRedirect),
            trigrams,
        ),
        roll_in_pct: pct(
            t(TrigramCategory::RollIn) + t(TrigramCategory::BigramRollIn),
            trigrams,
        ),
        roll_out_pct: pct(
            t(TrigramCategory::RollOut) + t(TrigramCategory::BigramRollOut),
            trigrams,
        ),
        col5_6_pct: pct(d.stat_center_cols, chars),
    }
}

/// Single left-to-right pass over a cleaned `[a-z]` stream.
pub fn run(
    model: &EffortModel,
    unknown_penalty: f64,
    table: &CharTable,
    chars: &[char],
    top_n: usize,
) -> Analysis {
    let mut acc = Accumulator::new(model, unknown_penalty);

    let resolve = |c: char| letter_index(c).and_then(|i| table[i]);

    let mut prev: Option<(char, Option<&'static PhysicalKey>)> = None;
    let mut prev2: Option<Option<&'static PhysicalKey>> = None;

    for &c in chars {
        let key = resolve(c);
        acc.add_char(key);

        if let Some((pc, pk)) = prev {
            acc.add_bigram([pc, c], pk, key);
            if let Some(ppk) = prev2 {
                acc.add_trigram(ppk, pk, key);
            }
            prev2 = Some(pk);
        }
        prev = Some((c, key));
    }

    acc.finish(top_n)
}
