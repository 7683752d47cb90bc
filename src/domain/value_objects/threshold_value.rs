use serde::{Deserialize, Serialize};

/// A configured size threshold, tagged with the unit it was written in.
///
/// `Percent` is relative to the total of the dimension it applies to,
/// `AbsoluteSize` is in MiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum ThresholdValue {
    Percent(f64),
    AbsoluteSize(f64),
}
