use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{Rule, below, tiered};

/// Fires when available RAM drops below a `*_threshold_min_mem` floor.
pub struct MemoryFreeRule;

impl Rule for MemoryFreeRule {
    fn name(&self) -> &'static str {
        "memory_free"
    }

    fn evaluate(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity {
        let available = snapshot.memory.available_mib;
        tiered(thresholds, |tier| below(available, &tier.mem_free))
    }
}
