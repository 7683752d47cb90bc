#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use nohang_indicator::application::daemon_config::parse_config_file;
use nohang_indicator::domain::entities::snapshot::{MemoryInfo, PsiInfo, SystemSnapshot};
use nohang_indicator::domain::ports::collector::SystemCollector;
use nohang_indicator::domain::rules::{RuleEngine, classify, default_rules, resolve};
use nohang_indicator::domain::value_objects::severity::Severity;
use nohang_indicator::domain::value_objects::threshold_value::ThresholdValue;
use nohang_indicator::domain::value_objects::thresholds::{RawThresholds, RawTier};
use nohang_indicator::infrastructure::collectors::procfs::ProcfsCollector;

fn fixture(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
}

fn fixture_snapshot() -> SystemSnapshot {
    ProcfsCollector::new(fixture("host/proc"), fixture("host/sys")).collect()
}

fn memory_snapshot(total_mib: f64, available_mib: f64) -> SystemSnapshot {
    SystemSnapshot {
        memory: MemoryInfo::from_kib(total_mib * 1024.0, available_mib * 1024.0, 0.0, 0.0),
        ..SystemSnapshot::default()
    }
}

fn memory_tiers(warn: f64, soft: f64, hard: f64) -> RawThresholds {
    let tier = |p| RawTier {
        mem_free: Some(ThresholdValue::Percent(p)),
        ..RawTier::default()
    };
    RawThresholds {
        warn: tier(warn),
        soft: tier(soft),
        hard: tier(hard),
        ..RawThresholds::default()
    }
}

#[test]
fn fixture_host_is_warning() {
    let raw = parse_config_file(&fixture("nohang.conf"));
    let snapshot = fixture_snapshot();
    let thresholds = resolve(&raw, &snapshot);

    let engine = RuleEngine::new(default_rules());
    assert_eq!(engine.classify(&snapshot, &thresholds), Severity::Warning);

    let fired: Vec<&str> = engine
        .triggered(&snapshot, &thresholds)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(fired.contains(&"memory_free"));
    assert!(fired.contains(&"zram_used"));
    assert!(!fired.contains(&"swap_free"));
    assert!(!fired.contains(&"psi"));
}

#[test]
fn memory_tiers_are_monotonic() {
    let raw = memory_tiers(40.0, 30.0, 20.0);
    let cases = [
        (50.0, Severity::Normal),
        (35.0, Severity::Warning),
        (25.0, Severity::Warning),
        (20.0, Severity::Warning),
        (19.9, Severity::Critical),
        (15.0, Severity::Critical),
    ];
    for (available, expected) in cases {
        let snapshot = memory_snapshot(100.0, available);
        let severity = classify(&resolve(&raw, &snapshot), &snapshot);
        assert_eq!(severity, expected, "available {available}");
    }
}

#[test]
fn percent_resolves_against_total() {
    let raw = memory_tiers(90.0, 80.0, 70.0);
    let snapshot = memory_snapshot(1000.0, 500.0);
    let resolved = resolve(&raw, &snapshot);
    assert_eq!(resolved.hard.mem_free.mib, Some(700.0));
    assert_eq!(resolved.hard.mem_free.percent, Some(70.0));
    assert_eq!(resolve(&raw, &snapshot), resolved);
}

#[test]
fn absent_zram_ignores_zram_thresholds() {
    let raw = RawThresholds {
        hard: RawTier {
            zram_used: Some(ThresholdValue::AbsoluteSize(1.0)),
            ..RawTier::default()
        },
        ..RawThresholds::default()
    };
    let mut snapshot = fixture_snapshot();
    assert_eq!(
        classify(&resolve(&raw, &snapshot), &snapshot),
        Severity::Critical
    );

    snapshot.zram = Default::default();
    assert_eq!(
        classify(&resolve(&raw, &snapshot), &snapshot),
        Severity::Normal
    );
}

#[test]
fn psi_metric_selects_average() {
    let snapshot = SystemSnapshot {
        psi: PsiInfo {
            some_avg10: 80.0,
            full_avg10: 10.0,
        },
        ..SystemSnapshot::default()
    };
    let mut raw = RawThresholds {
        hard: RawTier {
            psi: Some(50.0),
            ..RawTier::default()
        },
        ..RawThresholds::default()
    };

    assert_eq!(classify(&resolve(&raw, &snapshot), &snapshot), Severity::Normal);

    raw.psi_metrics = Some("some".to_string());
    assert_eq!(
        classify(&resolve(&raw, &snapshot), &snapshot),
        Severity::Critical
    );

    raw.psi_metrics = Some("full_avg10".to_string());
    assert_eq!(classify(&resolve(&raw, &snapshot), &snapshot), Severity::Normal);
}

#[test]
fn absolute_size_survives_parse_and_resolve() {
    let raw = nohang_indicator::application::daemon_config::parse_config_str(
        "hard_threshold_min_mem = 512M\n",
    );
    let snapshot = memory_snapshot(16000.0, 500.0);
    let resolved = resolve(&raw, &snapshot);
    assert_eq!(resolved.hard.mem_free.mib, Some(512.0));
    assert_eq!(resolved.hard.mem_free.percent, None);
    assert_eq!(classify(&resolved, &snapshot), Severity::Critical);
}
