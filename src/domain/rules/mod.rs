pub mod memory;
pub mod psi;
pub mod resolve;
pub mod swap;
pub mod zram;

use crate::domain::entities::snapshot::SystemSnapshot;
use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::{ResolvedThreshold, ThresholdSet, TierThresholds};

pub use resolve::resolve;

/// A deterministic check of one dimension of a snapshot against resolved thresholds.
/// Rules are pure functions: snapshot + thresholds in, severity out. No I/O.
pub trait Rule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a snapshot using the given thresholds
    fn evaluate(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity;
}

/// Returns the memory, swap, zram and PSI rules
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(memory::MemoryFreeRule),
        Box::new(swap::SwapFreeRule),
        Box::new(zram::ZramUsedRule),
        Box::new(psi::PsiRule),
    ]
}

/// Engine that runs a collection of rules against system snapshots
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Highest severity reported by any rule, `Normal` when none fires
    #[must_use]
    pub fn classify(&self, snapshot: &SystemSnapshot, thresholds: &ThresholdSet) -> Severity {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(snapshot, thresholds))
            .max()
            .unwrap_or_default()
    }

    /// Rules that fired, most severe first
    #[must_use]
    pub fn triggered(
        &self,
        snapshot: &SystemSnapshot,
        thresholds: &ThresholdSet,
    ) -> Vec<(&'static str, Severity)> {
        let mut fired: Vec<(&'static str, Severity)> = self
            .rules
            .iter()
            .map(|rule| (rule.name(), rule.evaluate(snapshot, thresholds)))
            .filter(|(_, severity)| *severity > Severity::Normal)
            .collect();
        fired.sort_by(|a, b| b.1.cmp(&a.1));
        fired
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// Classifies a snapshot with the default rules.
#[must_use]
pub fn classify(thresholds: &ThresholdSet, snapshot: &SystemSnapshot) -> Severity {
    RuleEngine::default().classify(snapshot, thresholds)
}

/// `current < threshold`; an unresolved threshold never fires.
pub(crate) fn below(current: f64, threshold: &ResolvedThreshold) -> bool {
    threshold.mib.is_some_and(|limit| current < limit)
}

/// `current > threshold`; an unresolved threshold never fires.
pub(crate) fn above(current: f64, threshold: &ResolvedThreshold) -> bool {
    threshold.mib.is_some_and(|limit| current > limit)
}

/// Hard tier maps to `Critical`, soft or warn to `Warning`.
pub(crate) fn tiered(
    thresholds: &ThresholdSet,
    fires: impl Fn(&TierThresholds) -> bool,
) -> Severity {
    if fires(&thresholds.hard) {
        Severity::Critical
    } else if fires(&thresholds.soft) || fires(&thresholds.warn) {
        Severity::Warning
    } else {
        Severity::Normal
    }
}
