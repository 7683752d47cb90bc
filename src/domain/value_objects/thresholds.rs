use serde::{Deserialize, Serialize};

use super::threshold_value::ThresholdValue;

/// Thresholds of one tier exactly as configured in the daemon file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTier {
    /// `*_threshold_min_mem`: available RAM floor
    pub mem_free: Option<ThresholdValue>,
    /// `*_threshold_min_swap`: free swap floor
    pub swap_free: Option<ThresholdValue>,
    /// `*_threshold_max_zram`: zram logical usage ceiling
    pub zram_used: Option<ThresholdValue>,
    /// `*_threshold_max_psi`: PSI ceiling
    pub psi: Option<f64>,
}

impl RawTier {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.mem_free.is_none()
            && self.swap_free.is_none()
            && self.zram_used.is_none()
            && self.psi.is_none()
    }
}

/// Parsed daemon thresholds. An absent slot disables that check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawThresholds {
    pub warn: RawTier,
    pub soft: RawTier,
    pub hard: RawTier,
    pub psi_metrics: Option<String>,
    pub psi_excess_duration: Option<f64>,
}

impl RawThresholds {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warn.is_empty()
            && self.soft.is_empty()
            && self.hard.is_empty()
            && self.psi_metrics.is_none()
            && self.psi_excess_duration.is_none()
    }
}

/// A threshold after unit resolution against the current totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedThreshold {
    /// Set only when configured as a percentage
    pub percent: Option<f64>,
    /// Absolute MiB, configured directly or derived from the percentage
    pub mib: Option<f64>,
}

/// Resolved thresholds of one tier, comparable with live readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub mem_free: ResolvedThreshold,
    pub swap_free: ResolvedThreshold,
    pub zram_used: ResolvedThreshold,
    pub psi: Option<f64>,
}

/// Warn, soft and hard tiers resolved for one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub warn: TierThresholds,
    pub soft: TierThresholds,
    pub hard: TierThresholds,
    pub psi_metrics: Option<String>,
    pub psi_excess_duration: Option<f64>,
}
