mod common;

use common::qwerty;
use keyergo::api::AnalysisService;
use keyergo::cache::{cache_key, AnalysisCache};
use keyergo::config::{AnalyzerConfig, BigramMultipliers};
use keyergo::error::KeyErgoError;
use keyergo::layouts::{KnownLayout, LayoutMapping};
use keyergo::scorer::Analyzer;

#[test]
fn test_named_and_json_layouts_share_cache_entries() {
    let service = AnalysisService::default();

    let named = service.analyze_named("qwerty", None).unwrap();
    assert_eq!(service.cache_len().unwrap(), 1);

    // Explicit identity entries normalise to the same key as QWERTY.
    let from_json = service
        .analyze_layout_json(r#"{"q": "q", "a": "a"}"#, None)
        .unwrap();
    assert_eq!(service.cache_len().unwrap(), 1);
    assert_eq!(named, from_json);

    service.analyze_named("colemak", None).unwrap();
    assert_eq!(service.cache_len().unwrap(), 2);

    service.clear_cache().unwrap();
    assert_eq!(service.cache_len().unwrap(), 0);
}

#[test]
fn test_unknown_layout_is_rejected() {
    let service = AnalysisService::default();
    let err = service.analyze_named("azerty", None).unwrap_err();
    assert!(matches!(err, KeyErgoError::Validation(_)));
}

#[test]
fn test_bad_json_is_rejected() {
    let service = AnalysisService::default();
    let err = service.analyze_layout_json("[1, 2]", None).unwrap_err();
    assert!(matches!(err, KeyErgoError::Json(_)));
}

#[test]
fn test_rank_orders_ascending() {
    let service = AnalysisService::default();
    let ranked = service
        .rank(&["qwerty", "colemak", "dvorak"], None, "same_finger_bigrams_pct")
        .unwrap();

    let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names.last(), Some(&"qwerty"));
    for pair in ranked.windows(2) {
        assert!(pair[0].1.same_finger_bigrams_pct <= pair[1].1.same_finger_bigrams_pct);
    }
}

#[test]
fn test_rank_rejects_unknown_metric() {
    let service = AnalysisService::default();
    let err = service.rank(&["qwerty"], None, "speed").unwrap_err();
    assert!(matches!(err, KeyErgoError::Validation(_)));
}

#[test]
fn test_report_heatmap() {
    let service = AnalysisService::default();
    let report = service.report("qwerty", &qwerty(), Some("eeee t"));
    assert_eq!(report.heatmap.len(), keyergo::geometry::KEYS.len());

    let e = keyergo::geometry::slot_index('e').unwrap();
    let t = keyergo::geometry::slot_index('t').unwrap();
    assert_eq!(report.heatmap[e], 1.0);
    assert_eq!(report.heatmap[t], 0.25);
}

#[test]
fn test_cache_separates_corpora_and_configs() {
    let mut cache = AnalysisCache::new(8);
    let layout = KnownLayout::Workman.mapping();
    let analyzer = Analyzer::default();

    let a = cache.get_or_analyze(&analyzer, &layout, None);
    let b = cache.get_or_analyze(&analyzer, &layout, None);
    assert_eq!(a, b);
    assert_eq!(cache.len(), 1);

    cache.get_or_analyze(&analyzer, &layout, Some("the quick brown fox"));
    assert_eq!(cache.len(), 2);

    let strict = Analyzer::new(AnalyzerConfig {
        multipliers: BigramMultipliers {
            same_finger: 20.0,
            ..BigramMultipliers::DEFAULT
        },
        ..Default::default()
    })
    .unwrap();
    let c = cache.get_or_analyze(&strict, &layout, None);
    assert_eq!(cache.len(), 3);
    assert!(c.effort > a.effort);
}

#[test]
fn test_default_corpus_shares_cache_entry() {
    let service = AnalysisService::default();
    let implicit = service.analyze_named("dvorak", None).unwrap();
    let explicit = service
        .analyze_named("dvorak", Some(keyergo::corpus::DEFAULT_CORPUS))
        .unwrap();
    assert_eq!(implicit, explicit);
    assert_eq!(service.cache_len().unwrap(), 1);
}

#[test]
fn test_report_heatmap_matches_key_usage() {
    let service = AnalysisService::default();
    let layout = KnownLayout::Colemak.mapping();
    let report = service.report("colemak", &layout, None);
    let details = service.analyzer.analyze_detailed(&layout, None).details;

    let busiest = details.key_usage.iter().copied().max().unwrap();
    for (i, &n) in details.key_usage.iter().enumerate() {
        assert_eq!(report.heatmap[i], n as f64 / busiest as f64);
    }
    assert_eq!(
        details.key_usage.iter().sum::<usize>() + details.unknown_chars,
        details.total_chars
    );
}

#[test]
fn test_cache_evict() {
    let mut cache = AnalysisCache::new(4);
    let layout = LayoutMapping::identity();
    let key = cache_key(&layout, None);
    cache.insert(key.clone(), keyergo::analyze(&layout, Some("abc")));

    assert!(cache.evict(&key).is_some());
    assert!(cache.evict(&key).is_none());
    assert!(cache.is_empty());
}
