//! Query command implementation
//!
//! Shows one sample of utilization, memory and temperature.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, DeviceStatus, StatusReport};
use crate::commands::open_adapter;
use crate::config::Config;
use crate::error::Result;
use crate::services::{DeviceSample, Monitor, MonitorConfig};

/// Execute the query command
pub fn run_query(config: &Config, format: OutputFormat) -> Result<()> {
    let adapter = open_adapter(config)?;

    let monitor = Monitor::new(MonitorConfig {
        gpu_index: config.gpu.index,
        ..MonitorConfig::default()
    });
    let samples = monitor.sample(&adapter)?;

    let report = status_report(adapter.system_get_driver_version()?, &samples);
    print_output(&report, format)?;

    Ok(())
}

/// Build the displayable report for a set of samples
pub(crate) fn status_report(driver_version: String, samples: &[DeviceSample]) -> StatusReport {
    StatusReport {
        driver_version,
        devices: samples.iter().map(DeviceStatus::from).collect(),
    }
}
