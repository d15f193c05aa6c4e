mod common;

use common::{assert_close, qwerty};
use keyergo::layouts::{builtin_layouts, KnownLayout};
use keyergo::scorer::{AnalysisResult, Analyzer};
use rstest::rstest;

fn qwerty_default() -> AnalysisResult {
    keyergo::analyze(&qwerty(), None)
}

// Pinned values for the identity layout on the built-in corpus. Any change
// here means the model changed, not just the code.
#[rstest]
#[case("effort", 4.6440)]
#[case("distance", 13.8950)]
#[case("pinky_distance", 0.0087)]
#[case("pinky_off_home_pct", 2.0991)]
#[case("same_finger_bigrams_pct", 6.9984)]
#[case("skip_bigrams_pct", 5.3266)]
#[case("skip_bigrams2_pct", 3.9075)]
#[case("lateral_stretch_pct", 12.3250)]
#[case("pinky_scissors_pct", 0.0)]
#[case("scissors_pct", 5.2683)]
#[case("two_row_sfb_pct", 23.6111)]
#[case("two_row_jumps_pct", 16.6407)]
#[case("trigram_alt_pct", 27.0659)]
#[case("tri_redirect_pct", 11.9386)]
#[case("roll_in_pct", 21.4077)]
#[case("roll_out_pct", 20.1050)]
#[case("col5_6_pct", 28.0466)]
fn test_qwerty_pinned(#[case] field: &str, #[case] expected: f64) {
    let r = qwerty_default();
    let actual = r.get(field).unwrap();
    assert_close(actual, expected, field);
}

#[test]
fn test_default_corpus_counts() {
    let analysis = Analyzer::default().analyze_detailed(&qwerty(), None);
    let d = &analysis.details;
    assert_eq!(d.total_chars, 5145);
    assert_eq!(d.stat_sfb, 360);
    assert_eq!(d.stat_two_row_sfb, 85);
    assert_eq!(d.unknown_chars, 0);
}

#[test]
fn test_modern_layouts_beat_qwerty() {
    let base = qwerty_default();
    for (name, layout) in builtin_layouts() {
        if name == "qwerty" {
            continue;
        }
        let r = keyergo::analyze(&layout, None);
        assert!(r.effort < base.effort, "{} effort {} >= qwerty", name, r.effort);
        assert!(
            r.same_finger_bigrams_pct < base.same_finger_bigrams_pct,
            "{} sfb {} >= qwerty",
            name,
            r.same_finger_bigrams_pct
        );
    }
}

#[test]
fn test_colemak_dh_reduces_center_column_use() {
    let colemak = keyergo::analyze(&KnownLayout::Colemak.mapping(), None);
    let dh = keyergo::analyze(&KnownLayout::ColemakDh.mapping(), None);
    assert!(dh.col5_6_pct < colemak.col5_6_pct);
    // Same letters on the same fingers
    assert_close(dh.same_finger_bigrams_pct, colemak.same_finger_bigrams_pct, "sfb");
}
