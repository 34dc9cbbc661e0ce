//! List command implementation
//!
//! Lists all detected AMD GPUs.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, GpuList, GpuListEntry};
use crate::commands::open_adapter;
use crate::config::Config;
use crate::error::Result;

/// Execute the list command
pub fn run_list(config: &Config, format: OutputFormat) -> Result<()> {
    let adapter = open_adapter(config)?;
    let driver_version = adapter.system_get_driver_version()?;

    let gpus = adapter
        .device_handles()?
        .iter()
        .map(GpuListEntry::from)
        .collect();

    let gpu_list = GpuList {
        gpus,
        driver_version,
    };

    print_output(&gpu_list, format)?;

    Ok(())
}
