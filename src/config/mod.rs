//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::vendor::sysfs::DRM_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Vendor backend settings
    pub backend: BackendConfig,
    /// GPU selection settings
    pub gpu: GpuConfig,
}

impl Config {
    /// Watch interval as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.general.interval_seconds.max(1))
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Watch loop interval in seconds
    pub interval_seconds: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { interval_seconds: 2 }
    }
}

/// Vendor backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// DRM class directory the amdgpu backend reads from
    pub sysfs_root: PathBuf,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            sysfs_root: PathBuf::from(DRM_PATH),
        }
    }
}

/// GPU selection configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GpuConfig {
    /// Target GPU by index
    pub index: Option<u32>,
}
