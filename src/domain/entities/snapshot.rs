use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time memory, swap, zram and PSI readings.
///
/// Rebuilt in full on every refresh; nothing is carried over between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    pub taken_at: DateTime<Utc>,
    pub memory: MemoryInfo,
    pub zram: ZramInfo,
    pub psi: PsiInfo,
}

impl Default for SystemSnapshot {
    fn default() -> Self {
        Self {
            taken_at: Utc::now(),
            memory: MemoryInfo::default(),
            zram: ZramInfo::default(),
            psi: PsiInfo::default(),
        }
    }
}

/// RAM and swap, in MiB
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub total_mib: f64,
    pub available_mib: f64,
    pub available_percent: f64,
    pub swap_total_mib: f64,
    pub swap_free_mib: f64,
    pub swap_free_percent: f64,
}

/// The `zram0` compressed swap device. All zero when `present` is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZramInfo {
    pub present: bool,
    /// Logical capacity
    pub disk_size_mib: f64,
    /// Uncompressed data stored
    pub orig_data_mib: f64,
    pub compr_data_mib: f64,
    /// Physical RAM consumed by the device
    pub mem_used_total_mib: f64,
    pub logical_used_percent: f64,
}

/// Memory pressure stall averages over the last 10 seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PsiInfo {
    pub some_avg10: f64,
    pub full_avg10: f64,
}

/// Returns `part / whole * 100`, or `0.0` when `whole` is not positive.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part * 100.0 / whole } else { 0.0 }
}

impl MemoryInfo {
    /// Builds memory readings from kibibyte counts, deriving the percentages.
    #[must_use]
    pub fn from_kib(total: f64, available: f64, swap_total: f64, swap_free: f64) -> Self {
        let mut info = Self {
            total_mib: total / 1024.0,
            available_mib: available / 1024.0,
            ..Self::default()
        };
        info.available_percent = percent_of(info.available_mib, info.total_mib);
        info.set_swap_kib(swap_total, swap_free);
        info
    }

    /// Replaces the swap readings and recomputes the free percentage.
    pub fn set_swap_kib(&mut self, swap_total: f64, swap_free: f64) {
        self.swap_total_mib = swap_total / 1024.0;
        self.swap_free_mib = swap_free / 1024.0;
        self.swap_free_percent = percent_of(self.swap_free_mib, self.swap_total_mib);
    }
}
