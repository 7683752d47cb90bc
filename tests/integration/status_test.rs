#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nohang_indicator::application::daemon_config::DaemonConfigCache;
use nohang_indicator::application::services::monitor::StatusMonitor;
use nohang_indicator::domain::ports::process::ProcessError;
use nohang_indicator::domain::ports::service::ServiceInspector;
use nohang_indicator::domain::value_objects::severity::Severity;
use nohang_indicator::infrastructure::collectors::procfs::ProcfsCollector;

fn fixture(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(rel)
}

struct FixedInspector {
    active: bool,
    config: Option<PathBuf>,
}

#[async_trait]
impl ServiceInspector for FixedInspector {
    async fn is_active(&self) -> Result<bool, ProcessError> {
        Ok(self.active)
    }

    async fn config_path(&self) -> Result<Option<PathBuf>, ProcessError> {
        Ok(self.config.clone())
    }
}

fn missing_cache() -> DaemonConfigCache {
    DaemonConfigCache::new(
        fixture("missing/nohang-desktop.conf"),
        fixture("missing/nohang.conf"),
    )
}

#[tokio::test]
async fn full_report_for_fixture_host() {
    let collector = ProcfsCollector::new(fixture("host/proc"), fixture("host/sys"));
    let config = fixture("nohang.conf");
    let inspector = FixedInspector {
        active: true,
        config: Some(config.clone()),
    };

    let mut monitor = StatusMonitor::new(&collector, &inspector, missing_cache());
    let update = monitor.tick().await;

    assert_eq!(update.severity, Severity::Warning);
    assert_eq!(update.icon, "security-medium");
    assert_eq!(update.title, "nohang, active");

    let expected = [
        "status: active".to_string(),
        format!("config: {}", config.display()),
        "RAM: total 16000 MiB, available 2000 MiB (12.5 %)".to_string(),
        "Swap: total 4096 MiB, free 3072 MiB (75.0 %)".to_string(),
        "ZRAM: size 4096 MiB, logical used 1024 MiB (25.0 %), physical used 272 MiB".to_string(),
        "PSI: full avg10 0.50, some avg10 1.25, metric some, duration 60 s".to_string(),
        "Thresholds:".to_string(),
        "  RAM warn if free < 20.0 % (\u{2248} 3200 MiB)".to_string(),
        "  RAM soft action if free < 10.0 % (\u{2248} 1600 MiB)".to_string(),
        "  RAM hard action if free < 512 MiB".to_string(),
        "  Swap warn if free < 25.0 % (\u{2248} 1024 MiB)".to_string(),
        "  Swap soft action if free < 10.0 % (\u{2248} 410 MiB)".to_string(),
        "  Swap hard action if free < 5.0 % (\u{2248} 205 MiB)".to_string(),
        "  ZRAM warn if used > 20.0 % (\u{2248} 819 MiB)".to_string(),
        "  ZRAM soft action if used > 55.0 % (\u{2248} 2253 MiB)".to_string(),
        "  ZRAM hard action if used > 60.0 % (\u{2248} 2458 MiB)".to_string(),
        "  PSI warn if > 100".to_string(),
        "  PSI soft action if > 60".to_string(),
        "  PSI hard action if > 90".to_string(),
    ];
    assert_eq!(update.report, expected.join("\n"));
}

#[tokio::test]
async fn inactive_daemon_without_config() {
    let collector = ProcfsCollector::new(fixture("host/proc"), fixture("host/sys"));
    let inspector = FixedInspector {
        active: false,
        config: None,
    };

    let mut monitor = StatusMonitor::new(&collector, &inspector, missing_cache());
    let update = monitor.tick().await;

    assert!(!update.active);
    assert_eq!(update.severity, Severity::Normal);
    assert_eq!(update.icon, "security-low");
    assert!(update.config_path.is_empty());
    assert!(update.report.starts_with("status: inactive\nRAM: "));
    assert!(update.report.ends_with("Thresholds:\n  none configured"));
}

#[tokio::test]
async fn status_update_serializes_for_json_output() {
    let collector = ProcfsCollector::new(fixture("host/proc"), fixture("host/sys"));
    let inspector = FixedInspector {
        active: true,
        config: Some(fixture("nohang.conf")),
    };

    let mut monitor = StatusMonitor::new(&collector, &inspector, missing_cache());
    let update = monitor.tick().await;

    let json: serde_json::Value =
        serde_json::to_value(&update).expect("serialize status update");
    assert_eq!(json["severity"], "Warning");
    assert_eq!(json["active"], true);
    assert_eq!(json["snapshot"]["zram"]["present"], true);
}
