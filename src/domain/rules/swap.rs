use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{Rule, below, tiered};

/// Fires when free swap drops below a `*_threshold_min_swap` floor.
pub struct SwapFreeRule;

impl Rule for SwapFreeRule {
    fn name(&self) -> &'static str {
        "swap_free"
    }

    fn evaluate(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity {
        let free = snapshot.memory.swap_free_mib;
        tiered(thresholds, |tier| below(free, &tier.swap_free))
    }
}
