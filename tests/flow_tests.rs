mod common;

use common::key;
use keyergo::geometry::Finger;
use keyergo::scorer::flow::{classify, classify_keys, roll_direction, RollDirection, TrigramCategory};
use rstest::rstest;

fn tri(s: &str) -> TrigramCategory {
    let keys: Vec<_> = s.chars().map(key).collect();
    classify(keys[0], keys[1], keys[2])
}

#[rstest]
#[case("fjd", TrigramCategory::Alt)]
#[case("akd", TrigramCategory::Alt)]
#[case("fjf", TrigramCategory::AltSfs)]
#[case("fjr", TrigramCategory::AltSfs)] // Same finger, different key
#[case("asd", TrigramCategory::RollIn)]
#[case("qwe", TrigramCategory::RollIn)]
#[case(";lk", TrigramCategory::RollIn)]
#[case("dsa", TrigramCategory::RollOut)]
#[case("jkl", TrigramCategory::RollOut)]
#[case("fad", TrigramCategory::Redirect)]
#[case("jlk", TrigramCategory::Redirect)]
#[case("sad", TrigramCategory::WeakRedirect)]
#[case("lk;", TrigramCategory::WeakRedirect)]
#[case("sdj", TrigramCategory::BigramRollIn)]
#[case("jds", TrigramCategory::BigramRollOut)]
#[case("jsd", TrigramCategory::BigramRollIn)]
#[case("frd", TrigramCategory::Other)] // Same finger first step
#[case("aaa", TrigramCategory::Other)]
#[case("ffj", TrigramCategory::Other)]
fn test_classify(#[case] s: &str, #[case] expected: TrigramCategory) {
    assert_eq!(tri(s), expected, "trigram '{}'", s);
}

#[test]
fn test_unknown_keys_are_other() {
    let a = key('a');
    let s = key('s');
    assert_eq!(classify_keys(None, Some(a), Some(s)), TrigramCategory::Other);
    assert_eq!(classify_keys(Some(a), Some(s), None), TrigramCategory::Other);
    assert_eq!(
        classify_keys(Some(a), Some(s), Some(key('d'))),
        TrigramCategory::RollIn
    );
}

#[rstest]
#[case(Finger::LeftPinky, Finger::LeftRing, Some(RollDirection::Inward))]
#[case(Finger::LeftIndex, Finger::LeftMiddle, Some(RollDirection::Outward))]
#[case(Finger::RightPinky, Finger::RightRing, Some(RollDirection::Inward))]
#[case(Finger::RightIndex, Finger::RightMiddle, Some(RollDirection::Outward))]
#[case(Finger::LeftIndex, Finger::LeftIndex, None)]
fn test_roll_direction(
    #[case] f1: Finger,
    #[case] f2: Finger,
    #[case] expected: Option<RollDirection>,
) {
    assert_eq!(roll_direction(f1, f2), expected);
}
