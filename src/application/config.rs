use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level indicator configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub daemon: DaemonConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Refresh cadence of the host loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_config_watch")]
    pub config_watch_secs: u64,
}

/// Where to find the nohang daemon, its unit and its config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_daemon_config")]
    pub default_config: PathBuf,
    #[serde(default = "default_fallback_config")]
    pub fallback_config: PathBuf,
    #[serde(default = "default_command_timeout")]
    pub command_timeout_ms: u64,
    #[serde(default = "default_tasks_timeout")]
    pub tasks_timeout_ms: u64,
}

/// Roots of the kernel pseudo-filesystems; overridable for fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_proc_root")]
    pub proc_root: PathBuf,
    #[serde(default = "default_sys_root")]
    pub sys_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub desktop: bool,
}

// --- Defaults ---

const fn default_poll_interval() -> u64 {
    5
}

const fn default_config_watch() -> u64 {
    3
}

fn default_unit() -> String {
    "nohang-desktop.service".into()
}

fn default_program() -> String {
    "nohang".into()
}

fn default_daemon_config() -> PathBuf {
    PathBuf::from("/etc/nohang/nohang-desktop.conf")
}

fn default_fallback_config() -> PathBuf {
    PathBuf::from("/usr/share/nohang/nohang.conf")
}

const fn default_command_timeout() -> u64 {
    1500
}

const fn default_tasks_timeout() -> u64 {
    3000
}

fn default_proc_root() -> PathBuf {
    PathBuf::from("/proc")
}

fn default_sys_root() -> PathBuf {
    PathBuf::from("/sys")
}

const fn default_true() -> bool {
    true
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
            config_watch_secs: default_config_watch(),
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            program: default_program(),
            default_config: default_daemon_config(),
            fallback_config: default_fallback_config(),
            command_timeout_ms: default_command_timeout(),
            tasks_timeout_ms: default_tasks_timeout(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            proc_root: default_proc_root(),
            sys_root: default_sys_root(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            desktop: default_true(),
        }
    }
}

// Zero would make `tokio::time::interval` panic.
impl GeneralConfig {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    #[must_use]
    pub fn config_watch_interval(&self) -> Duration {
        Duration::from_secs(self.config_watch_secs.max(1))
    }
}

impl DaemonConfig {
    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms.max(1))
    }

    #[must_use]
    pub fn tasks_timeout(&self) -> Duration {
        Duration::from_millis(self.tasks_timeout_ms.max(1))
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("nohang-indicator").join("config.toml"))
    }
}
