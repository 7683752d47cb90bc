use std::path::PathBuf;

use crate::application::daemon_config::DaemonConfigCache;
use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::entities::status::StatusUpdate;
use crate::domain::ports::collector::SystemCollector;
use crate::domain::ports::service::ServiceInspector;
use crate::domain::rules::{RuleEngine, default_rules, resolve};

use super::report::compose;

/// Owns the state of the indicator between ticks: the daemon config cache,
/// the last snapshot and the last known daemon state.
///
/// Every entry point takes `&mut self`; the host loop is the only caller.
pub struct StatusMonitor<'a> {
    collector: &'a dyn SystemCollector,
    inspector: &'a dyn ServiceInspector,
    rule_engine: RuleEngine,
    cache: DaemonConfigCache,
    snapshot: SystemSnapshot,
    active: bool,
    requested_config: Option<PathBuf>,
}

impl<'a> StatusMonitor<'a> {
    #[must_use]
    pub fn new(
        collector: &'a dyn SystemCollector,
        inspector: &'a dyn ServiceInspector,
        cache: DaemonConfigCache,
    ) -> Self {
        Self {
            collector,
            inspector,
            rule_engine: RuleEngine::new(default_rules()),
            cache,
            snapshot: SystemSnapshot::default(),
            active: false,
            requested_config: None,
        }
    }

    /// Full refresh cycle: daemon state, config, snapshot, classification.
    pub async fn tick(&mut self) -> StatusUpdate {
        self.active = match self.inspector.is_active().await {
            Ok(active) => active,
            Err(e) => {
                tracing::warn!("cannot query daemon state: {e}");
                false
            }
        };
        self.requested_config = match self.inspector.config_path().await {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("cannot query daemon config path: {e}");
                None
            }
        };

        self.cache.ensure_parsed(self.requested_config.as_deref());
        self.refresh();
        self.status()
    }

    /// Re-parses the daemon config if its file changed and, only then,
    /// recomposes the status against the last snapshot.
    pub fn check_config(&mut self) -> Option<StatusUpdate> {
        if !self.cache.ensure_parsed(self.requested_config.as_deref()) {
            return None;
        }
        tracing::info!(
            config = %self.config_path(),
            "daemon config changed"
        );
        Some(self.status())
    }

    /// Replaces the stored snapshot with a fresh reading.
    pub fn refresh(&mut self) {
        self.snapshot = self.collector.collect();
    }

    #[must_use]
    pub const fn snapshot(&self) -> &SystemSnapshot {
        &self.snapshot
    }

    fn config_path(&self) -> String {
        self.cache
            .source_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    fn status(&self) -> StatusUpdate {
        let raw = self.cache.thresholds();
        let thresholds = resolve(raw, &self.snapshot);
        let severity = self.rule_engine.classify(&self.snapshot, &thresholds);
        for (rule, level) in self.rule_engine.triggered(&self.snapshot, &thresholds) {
            tracing::debug!("{rule}: {level}");
        }

        let config_path = self.config_path();
        StatusUpdate {
            active: self.active,
            severity,
            icon: StatusUpdate::icon_for(self.active, severity).to_string(),
            title: StatusUpdate::title_for(self.active),
            report: compose(raw, &self.snapshot, self.active, &config_path),
            config_path,
            snapshot: self.snapshot.clone(),
        }
    }
}
