use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::snapshot::{MemoryInfo, PsiInfo, SystemSnapshot, ZramInfo, percent_of};
use crate::domain::ports::collector::SystemCollector;

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Device whose presence gates the whole zram grouping.
const ZRAM_DEVICE: &str = "block/zram0";

/// Single-value files holding the first three `mm_stat` columns.
const ZRAM_STAT_FILES: [&str; 3] = ["orig_data_size", "compr_data_size", "mem_used_total"];

/// Reads memory, swap, zram and PSI straight from procfs and sysfs.
///
/// Roots are configurable so fixture trees can stand in for `/proc` and `/sys`.
pub struct ProcfsCollector {
    proc_root: PathBuf,
    sys_root: PathBuf,
}

impl ProcfsCollector {
    #[must_use]
    pub fn new(proc_root: impl Into<PathBuf>, sys_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
            sys_root: sys_root.into(),
        }
    }

    fn read_memory(&self) -> MemoryInfo {
        let meminfo = self.proc_root.join("meminfo");
        let mut memory = match fs::read_to_string(&meminfo) {
            Ok(content) => parse_meminfo(&content),
            Err(e) => {
                tracing::warn!("cannot read {}: {e}", meminfo.display());
                MemoryInfo::default()
            }
        };

        // /proc/meminfo only tracks what the kernel sums up; the swap table
        // covers every active device, so it wins when it has any capacity.
        if let Ok(content) = fs::read_to_string(self.proc_root.join("swaps")) {
            if let Some((total_kib, used_kib)) = parse_swaps(&content) {
                memory.set_swap_kib(total_kib, (total_kib - used_kib).max(0.0));
            }
        }

        memory
    }

    fn read_zram(&self) -> ZramInfo {
        let device = self.sys_root.join(ZRAM_DEVICE);
        let disksize = device.join("disksize");
        if !disksize.exists() {
            return ZramInfo::default();
        }

        let mut zram = ZramInfo {
            present: true,
            ..ZramInfo::default()
        };
        zram.disk_size_mib = read_number(&disksize).unwrap_or(0.0) / BYTES_PER_MIB;

        let [orig, compr, used] = read_zram_stats(&device);
        zram.orig_data_mib = orig / BYTES_PER_MIB;
        zram.compr_data_mib = compr / BYTES_PER_MIB;
        zram.mem_used_total_mib = used / BYTES_PER_MIB;
        zram.logical_used_percent = percent_of(zram.orig_data_mib, zram.disk_size_mib);
        zram
    }

    fn read_psi(&self) -> PsiInfo {
        let path = self.proc_root.join("pressure").join("memory");
        match fs::read_to_string(&path) {
            Ok(content) => parse_psi(&content),
            Err(e) => {
                tracing::debug!("PSI unavailable at {}: {e}", path.display());
                PsiInfo::default()
            }
        }
    }
}

impl Default for ProcfsCollector {
    fn default() -> Self {
        Self::new("/proc", "/sys")
    }
}

impl SystemCollector for ProcfsCollector {
    fn collect(&self) -> SystemSnapshot {
        SystemSnapshot {
            taken_at: chrono::Utc::now(),
            memory: self.read_memory(),
            zram: self.read_zram(),
            psi: self.read_psi(),
        }
    }
}

/// Parses `/proc/meminfo`. Values are kB; missing keys count as zero.
#[must_use]
pub fn parse_meminfo(content: &str) -> MemoryInfo {
    let mut total = 0.0;
    let mut available = 0.0;
    let mut swap_total = 0.0;
    let mut swap_free = 0.0;

    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let Some(value) = rest
            .split_whitespace()
            .next()
            .and_then(parse_size)
        else {
            continue;
        };
        match key.trim() {
            "MemTotal" => total = value,
            "MemAvailable" => available = value,
            "SwapTotal" => swap_total = value,
            "SwapFree" => swap_free = value,
            _ => {}
        }
    }

    MemoryInfo::from_kib(total, available, swap_total, swap_free)
}

/// Sums `(size, used)` in KiB over the rows of `/proc/swaps`.
///
/// Returns `None` when the table lists no capacity.
#[must_use]
pub fn parse_swaps(content: &str) -> Option<(f64, f64)> {
    let (total, used) = content
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|cols| cols.len() >= 5)
        .fold((0.0, 0.0), |(total, used), cols| {
            (
                total + parse_size(cols[2]).unwrap_or(0.0),
                used + parse_size(cols[3]).unwrap_or(0.0),
            )
        });
    (total > 0.0).then_some((total, used))
}

/// Extracts the `avg10` values of the `some` and `full` lines.
#[must_use]
pub fn parse_psi(content: &str) -> PsiInfo {
    let mut psi = PsiInfo::default();
    for line in content.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("some ") {
            if let Some(v) = parse_avg10(rest) {
                psi.some_avg10 = v;
            }
        } else if let Some(rest) = line.strip_prefix("full ") {
            if let Some(v) = parse_avg10(rest) {
                psi.full_avg10 = v;
            }
        }
    }
    psi
}

fn parse_avg10(fields: &str) -> Option<f64> {
    fields
        .split_whitespace()
        .find_map(|token| token.strip_prefix("avg10="))
        .and_then(parse_size)
}

/// Byte counts `[orig, compr, mem_used]`, from `mm_stat` or the per-field files.
fn read_zram_stats(device: &Path) -> [f64; 3] {
    if let Ok(content) = fs::read_to_string(device.join("mm_stat")) {
        let fields: Vec<f64> = content
            .split_whitespace()
            .map(|f| parse_size(f).unwrap_or(0.0))
            .collect();
        if fields.len() >= 3 {
            return [fields[0], fields[1], fields[2]];
        }
    }
    ZRAM_STAT_FILES.map(|name| read_number(&device.join(name)).unwrap_or(0.0))
}

fn read_number(path: &Path) -> Option<f64> {
    parse_size(fs::read_to_string(path).ok()?.trim())
}

/// Kernel counters are never negative; `-5`, `nan` or `inf` mean a corrupt token.
fn parse_size(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
