use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::threshold_value::ThresholdValue;
use crate::domain::value_objects::thresholds::{
    RawThresholds, RawTier, ResolvedThreshold, ThresholdSet, TierThresholds,
};

/// Converts configured thresholds into absolute MiB using the snapshot totals.
///
/// Memory slots scale with total RAM, swap slots with total swap and zram
/// slots with the zram logical capacity. PSI values pass through unchanged.
#[must_use]
pub fn resolve(raw: &RawThresholds, snapshot: &SystemSnapshot) -> ThresholdSet {
    let totals = Totals {
        mem: snapshot.memory.total_mib,
        swap: snapshot.memory.swap_total_mib,
        zram: snapshot.zram.disk_size_mib,
    };

    ThresholdSet {
        warn: resolve_tier(&raw.warn, &totals),
        soft: resolve_tier(&raw.soft, &totals),
        hard: resolve_tier(&raw.hard, &totals),
        psi_metrics: raw.psi_metrics.clone(),
        psi_excess_duration: raw.psi_excess_duration,
    }
}

struct Totals {
    mem: f64,
    swap: f64,
    zram: f64,
}

fn resolve_tier(tier: &RawTier, totals: &Totals) -> TierThresholds {
    TierThresholds {
        mem_free: resolve_value(tier.mem_free, totals.mem),
        swap_free: resolve_value(tier.swap_free, totals.swap),
        zram_used: resolve_value(tier.zram_used, totals.zram),
        psi: tier.psi,
    }
}

fn resolve_value(raw: Option<ThresholdValue>, total_mib: f64) -> ResolvedThreshold {
    match raw {
        None => ResolvedThreshold::default(),
        Some(ThresholdValue::AbsoluteSize(mib)) => ResolvedThreshold {
            percent: None,
            mib: Some(mib.abs()),
        },
        Some(ThresholdValue::Percent(percent)) => ResolvedThreshold {
            percent: Some(percent),
            mib: (total_mib > 0.0).then(|| percent * total_mib / 100.0),
        },
    }
}
