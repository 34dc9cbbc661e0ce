//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod list;
pub mod query;
pub mod watch;

pub use list::run_list;
pub use query::run_query;
pub use watch::run_watch;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::nvml::Adapter;
use crate::vendor::SysfsLibrary;

/// Create and initialize an adapter over the configured amdgpu sysfs tree
pub fn open_adapter(config: &Config) -> Result<Adapter<SysfsLibrary>> {
    let mut adapter = Adapter::new(SysfsLibrary::new(&config.backend.sysfs_root));
    adapter.init()?;

    if adapter.device_get_count()? == 0 {
        return Err(AppError::NoGpusFound);
    }

    Ok(adapter)
}
