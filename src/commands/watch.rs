//! Watch command implementation
//!
//! Samples the selected GPUs on an interval until interrupted or until
//! the requested number of samples has been printed. The interval comes
//! from the merged configuration (`--interval` overrides the file).

use crate::cli::args::{OutputFormat, WatchArgs};
use crate::cli::output::print_output;
use crate::commands::open_adapter;
use crate::commands::query::status_report;
use crate::config::Config;
use crate::error::Result;
use crate::services::{Monitor, MonitorConfig};

/// Execute the watch command
pub fn run_watch(args: &WatchArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let adapter = open_adapter(config)?;
    let driver_version = adapter.system_get_driver_version()?;

    let interval = config.interval();

    let monitor = Monitor::new(MonitorConfig {
        interval,
        count: args.count,
        gpu_index: config.gpu.index,
    });

    log::info!(
        "Watching {} GPU(s) every {:?}",
        config
            .gpu
            .index
            .map_or_else(|| adapter.device_get_count().unwrap_or(0), |_| 1),
        interval
    );

    monitor.run(&adapter, |samples| {
        let report = status_report(driver_version.clone(), samples);
        print_output(&report, format)?;
        Ok(())
    })
}
