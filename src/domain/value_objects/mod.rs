pub mod psi_metric;
pub mod severity;
pub mod threshold_value;
pub mod thresholds;

pub use psi_metric::PsiMetric;
pub use severity::Severity;
pub use threshold_value::ThresholdValue;
pub use thresholds::{RawThresholds, RawTier, ResolvedThreshold, ThresholdSet, TierThresholds};
