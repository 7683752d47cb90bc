use serde::{Deserialize, Serialize};

/// Which memory PSI moving average the pressure thresholds apply to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PsiMetric {
    Some,
    #[default]
    Full,
}

impl PsiMetric {
    /// Maps the daemon's `psi_metrics` value. Only `some` selects the
    /// "some" average; anything else, or nothing, means "full".
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector.map(str::trim) {
            Some("some") => Self::Some,
            _ => Self::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_selector_routes_to_some() {
        assert_eq!(PsiMetric::from_selector(Some("some")), PsiMetric::Some);
        assert_eq!(PsiMetric::from_selector(Some(" some ")), PsiMetric::Some);
    }

    #[test]
    fn other_selectors_default_to_full() {
        assert_eq!(PsiMetric::from_selector(None), PsiMetric::Full);
        assert_eq!(PsiMetric::from_selector(Some("full")), PsiMetric::Full);
        assert_eq!(PsiMetric::from_selector(Some("full_avg10")), PsiMetric::Full);
        assert_eq!(PsiMetric::from_selector(Some("")), PsiMetric::Full);
    }
}
