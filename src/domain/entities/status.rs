use serde::{Deserialize, Serialize};

use super::snapshot::SystemSnapshot;
use crate::domain::value_objects::severity::Severity;

/// Everything the presentation layer needs after one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// Whether the daemon unit is running
    pub active: bool,
    pub severity: Severity,
    /// Icon name; always the normal icon while the daemon is inactive
    pub icon: String,
    pub title: String,
    /// Daemon config file the thresholds came from, empty if none was found
    pub config_path: String,
    pub report: String,
    pub snapshot: SystemSnapshot,
}

impl StatusUpdate {
    /// Title shown next to the icon.
    #[must_use]
    pub fn title_for(active: bool) -> String {
        if active {
            "nohang, active".to_string()
        } else {
            "nohang, inactive".to_string()
        }
    }

    /// Icon for the given state; an inactive daemon never shows pressure.
    #[must_use]
    pub const fn icon_for(active: bool, severity: Severity) -> &'static str {
        if active {
            severity.icon_name()
        } else {
            Severity::Normal.icon_name()
        }
    }
}
