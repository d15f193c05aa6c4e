#![allow(dead_code)]

use keyergo::geometry::{lookup, PhysicalKey};
use keyergo::layouts::{KnownLayout, LayoutMapping};
use keyergo::scorer::AnalysisResult;

pub const TOLERANCE: f64 = 0.01;

pub fn key(c: char) -> &'static PhysicalKey {
    lookup(c).unwrap_or_else(|| panic!("'{}' is not a physical key", c))
}

pub fn qwerty() -> LayoutMapping {
    KnownLayout::Qwerty.mapping()
}

pub fn analyze_qwerty(text: &str) -> AnalysisResult {
    keyergo::analyze(&qwerty(), Some(text))
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{}: expected {:.4}, got {:.4}",
        what,
        expected,
        actual
    );
}
