use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::rules::resolve;
use crate::domain::value_objects::threshold_value::ThresholdValue;
use crate::domain::value_objects::thresholds::{RawThresholds, RawTier, ResolvedThreshold, TierThresholds};

const TIERS: [&str; 3] = ["warn", "soft action", "hard action"];

/// Renders the status report shown next to the indicator.
///
/// The layout is fixed: status, optional config path, one line per reading
/// group, then a `Thresholds:` block listing every configured tier.
#[must_use]
pub fn compose(
    raw: &RawThresholds,
    snapshot: &SystemSnapshot,
    active: bool,
    config_path: &str,
) -> String {
    let resolved = resolve(raw, snapshot);
    let mem = &snapshot.memory;
    let zram = &snapshot.zram;
    let psi = snapshot.psi;

    let mut lines = vec![format!(
        "status: {}",
        if active { "active" } else { "inactive" }
    )];
    if !config_path.is_empty() {
        lines.push(format!("config: {config_path}"));
    }

    lines.push(format!(
        "RAM: total {:.0} MiB, available {:.0} MiB ({:.1} %)",
        mem.total_mib, mem.available_mib, mem.available_percent
    ));
    lines.push(format!(
        "Swap: total {:.0} MiB, free {:.0} MiB ({:.1} %)",
        mem.swap_total_mib, mem.swap_free_mib, mem.swap_free_percent
    ));
    if zram.present {
        lines.push(format!(
            "ZRAM: size {:.0} MiB, logical used {:.0} MiB ({:.1} %), physical used {:.0} MiB",
            zram.disk_size_mib, zram.orig_data_mib, zram.logical_used_percent, zram.mem_used_total_mib
        ));
    }

    let mut psi_line = format!(
        "PSI: full avg10 {:.2}, some avg10 {:.2}",
        psi.full_avg10, psi.some_avg10
    );
    if let Some(metric) = &raw.psi_metrics {
        psi_line.push_str(&format!(", metric {metric}"));
    }
    if let Some(duration) = raw.psi_excess_duration {
        psi_line.push_str(&format!(", duration {duration:.0} s"));
    }
    lines.push(psi_line);

    lines.push("Thresholds:".to_string());
    let raw_tiers = [&raw.warn, &raw.soft, &raw.hard];
    let resolved_tiers = [&resolved.warn, &resolved.soft, &resolved.hard];
    let before = lines.len();

    size_lines(&mut lines, "RAM", "free <", &raw_tiers, &resolved_tiers, |r| r.mem_free, |t| t.mem_free);
    size_lines(&mut lines, "Swap", "free <", &raw_tiers, &resolved_tiers, |r| r.swap_free, |t| t.swap_free);
    if zram.present {
        size_lines(&mut lines, "ZRAM", "used >", &raw_tiers, &resolved_tiers, |r| r.zram_used, |t| t.zram_used);
    }
    for (label, tier) in TIERS.iter().zip(raw_tiers) {
        if let Some(limit) = tier.psi {
            lines.push(format!("  PSI {label} if > {limit:.0}"));
        }
    }

    if lines.len() == before {
        lines.push("  none configured".to_string());
    }

    lines.join("\n")
}

fn size_lines(
    lines: &mut Vec<String>,
    dimension: &str,
    comparison: &str,
    raw: &[&RawTier; 3],
    resolved: &[&TierThresholds; 3],
    raw_slot: impl Fn(&RawTier) -> Option<ThresholdValue>,
    resolved_slot: impl Fn(&TierThresholds) -> ResolvedThreshold,
) {
    for ((label, raw_tier), resolved_tier) in TIERS.iter().zip(raw).zip(resolved) {
        let Some(value) = raw_slot(raw_tier) else {
            continue;
        };
        let limit = match value {
            ThresholdValue::Percent(p) => match resolved_slot(resolved_tier).mib {
                Some(mib) => format!("{p:.1} % (\u{2248} {mib:.0} MiB)"),
                None => format!("{p:.1} % (\u{2248} ?)"),
            },
            ThresholdValue::AbsoluteSize(mib) => format!("{mib:.0} MiB"),
        };
        lines.push(format!("  {dimension} {label} if {comparison} {limit}"));
    }
}
