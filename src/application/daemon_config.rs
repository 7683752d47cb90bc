//! Best-effort reader for the nohang daemon configuration.
//!
//! Only the threshold keys matter here. Malformed lines and unknown keys are
//! skipped without complaint; the daemon itself is the schema authority.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;

use crate::domain::value_objects::thresholds::{RawThresholds, RawTier};
use crate::domain::value_objects::threshold_value::ThresholdValue;

static PERCENT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"^([0-9]+(?:\.[0-9]+)?)\s*%$"));
static MIB_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(?i)^([0-9]+(?:\.[0-9]+)?)\s*M(?:i?B)?$"));

/// Compiles a literal pattern. On failure only bare numbers are recognized.
fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| tracing::error!("invalid threshold pattern {pattern:?}: {e}"))
        .ok()
}

/// Parses a threshold literal such as `10 %`, `512M`, `512 MiB` or `5`.
///
/// Bare numbers are percentages. A negative bare number is an absolute size,
/// the sign being nohang's legacy marker for MiB.
#[must_use]
pub fn parse_threshold_value(raw: &str) -> Option<ThresholdValue> {
    let value = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if value.is_empty() {
        return None;
    }

    if let Some(n) = capture_number(Option::as_ref(&PERCENT_RE), &value) {
        return Some(ThresholdValue::Percent(n));
    }
    if let Some(n) = capture_number(Option::as_ref(&MIB_RE), &value) {
        return Some(ThresholdValue::AbsoluteSize(n));
    }

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n < 0.0 => Some(ThresholdValue::AbsoluteSize(n.abs())),
        Ok(n) if n.is_finite() => Some(ThresholdValue::Percent(n)),
        _ => None,
    }
}

fn capture_number(re: Option<&Regex>, value: &str) -> Option<f64> {
    re?.captures(value)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

fn parse_psi_value(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_suffix('%').map_or(raw, str::trim_end);
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses daemon config text into raw thresholds.
#[must_use]
pub fn parse_config_str(content: &str) -> RawThresholds {
    let mut out = RawThresholds::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('@') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            "psi_metrics" => {
                out.psi_metrics = (!value.is_empty()).then(|| value.to_string());
            }
            "psi_excess_duration" => out.psi_excess_duration = parse_psi_value(value),
            _ => {
                let Some((tier, slot)) = key.split_once("_threshold_") else {
                    continue;
                };
                let tier = match tier {
                    "warning" => &mut out.warn,
                    "soft" => &mut out.soft,
                    "hard" => &mut out.hard,
                    _ => continue,
                };
                assign_slot(tier, slot, value);
            }
        }
    }

    out
}

fn assign_slot(tier: &mut RawTier, slot: &str, value: &str) {
    match slot {
        "min_mem" => tier.mem_free = parse_threshold_value(value),
        "min_swap" => tier.swap_free = parse_threshold_value(value),
        "max_zram" => tier.zram_used = parse_threshold_value(value),
        "max_psi" => tier.psi = parse_psi_value(value),
        _ => {}
    }
}

/// Reads and parses a daemon config file. Unreadable files yield empty
/// thresholds.
#[must_use]
pub fn parse_config_file(path: &Path) -> RawThresholds {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config_str(&content),
        Err(e) => {
            tracing::warn!("cannot read daemon config {}: {e}", path.display());
            RawThresholds::default()
        }
    }
}

/// Parsed daemon thresholds, re-read only when the file or its mtime changes.
#[derive(Debug, Clone)]
pub struct DaemonConfigCache {
    default_path: PathBuf,
    fallback_path: PathBuf,
    source: Option<(PathBuf, SystemTime)>,
    thresholds: RawThresholds,
}

impl DaemonConfigCache {
    #[must_use]
    pub fn new(default_path: impl Into<PathBuf>, fallback_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            fallback_path: fallback_path.into(),
            source: None,
            thresholds: RawThresholds::default(),
        }
    }

    /// Makes the cached thresholds reflect the effective config file.
    ///
    /// `requested` falls back to the default path when absent or empty, then
    /// to the distribution fallback. Returns true when the source file or the
    /// thresholds changed.
    pub fn ensure_parsed(&mut self, requested: Option<&Path>) -> bool {
        let Some((path, mtime)) = self.locate(requested) else {
            let changed = self.source.is_some() || !self.thresholds.is_empty();
            if changed {
                tracing::warn!("no daemon config found, thresholds cleared");
            }
            self.source = None;
            self.thresholds = RawThresholds::default();
            return changed;
        };

        if let Some((ref last_path, last_mtime)) = self.source {
            if *last_path == path && last_mtime == mtime {
                return false;
            }
        }

        let thresholds = parse_config_file(&path);
        let changed = thresholds != self.thresholds
            || self.source.as_ref().is_none_or(|(last, _)| *last != path);
        tracing::debug!(path = %path.display(), changed, "parsed daemon config");
        self.thresholds = thresholds;
        self.source = Some((path, mtime));
        changed
    }

    fn locate(&self, requested: Option<&Path>) -> Option<(PathBuf, SystemTime)> {
        let primary = requested
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(self.default_path.as_path());

        [primary, self.fallback_path.as_path()]
            .into_iter()
            .find_map(|candidate| {
                let modified = std::fs::metadata(candidate)
                    .ok()
                    .filter(std::fs::Metadata::is_file)?
                    .modified()
                    .ok()?;
                Some((candidate.to_path_buf(), modified))
            })
    }

    #[must_use]
    pub const fn thresholds(&self) -> &RawThresholds {
        &self.thresholds
    }

    /// Path of the file the thresholds came from, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_ref().map(|(path, _)| path.as_path())
    }
}
