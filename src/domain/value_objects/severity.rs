use serde::{Deserialize, Serialize};

/// Overall memory-pressure severity shown by the indicator
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl Severity {
    /// Freedesktop icon name used for the status item.
    #[must_use]
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Normal => "security-low",
            Self::Warning => "security-medium",
            Self::Critical => "security-high",
        }
    }

    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Normal => "green",
            Self::Warning => "yellow",
            Self::Critical => "bright red",
        }
    }
}
