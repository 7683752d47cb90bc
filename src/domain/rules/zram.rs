use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{Rule, above, tiered};

/// Fires when zram logical usage rises above a `*_threshold_max_zram` ceiling.
/// Silent when the host has no zram device.
pub struct ZramUsedRule;

impl Rule for ZramUsedRule {
    fn name(&self) -> &'static str {
        "zram_used"
    }

    fn evaluate(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity {
        if !snapshot.zram.present {
            return Severity::Normal;
        }
        let used = snapshot.zram.orig_data_mib;
        tiered(thresholds, |tier| above(used, &tier.zram_used))
    }
}
