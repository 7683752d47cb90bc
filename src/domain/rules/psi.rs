use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::psi_metric::PsiMetric;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::ThresholdSet;

use super::{Rule, tiered};

/// Fires when the selected memory PSI average exceeds a `*_threshold_max_psi` ceiling.
pub struct PsiRule;

impl Rule for PsiRule {
    fn name(&self) -> &'static str {
        "psi"
    }

    fn evaluate(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity {
        let current = match PsiMetric::from_selector(thresholds.psi_metrics.as_deref()) {
            PsiMetric::Some => snapshot.psi.some_avg10,
            PsiMetric::Full => snapshot.psi.full_avg10,
        };
        tiered(thresholds, |tier| tier.psi.is_some_and(|limit| current > limit))
    }
}
