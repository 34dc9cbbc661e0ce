//! Sampling monitor
//!
//! Collects NVML-style readings from every selected GPU, once or on an
//! interval.

use crate::domain::{DeviceHandle, MemoryInfo, Reading, Temperature, TemperatureSensor, Utilization};
use crate::error::{AppError, NvmlError};
use crate::nvml::Adapter;
use crate::vendor::VendorLibrary;

use std::time::Duration;

/// Configuration for the monitor
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Interval between samples
    pub interval: Duration,
    /// Stop after this many samples; run forever when `None`
    pub count: Option<u64>,
    /// Only sample this GPU
    pub gpu_index: Option<u32>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            count: None,
            gpu_index: None,
        }
    }
}

/// Readings of one GPU at one point in time
#[derive(Debug, Clone)]
pub struct DeviceSample {
    pub handle: DeviceHandle,
    pub utilization: Reading<Utilization>,
    pub memory: Reading<MemoryInfo>,
    pub temperature: Reading<Temperature>,
}

/// Sampling monitor
pub struct Monitor {
    config: MonitorConfig,
}

impl Monitor {
    /// Create a new monitor with the given configuration
    pub fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Read every selected GPU once
    pub fn sample<L: VendorLibrary>(
        &self,
        adapter: &Adapter<L>,
    ) -> Result<Vec<DeviceSample>, NvmlError> {
        let handles = match self.config.gpu_index {
            Some(index) => vec![adapter.device_get_handle_by_index(index)?],
            None => adapter.device_handles()?,
        };

        handles
            .into_iter()
            .map(|handle| {
                Ok(DeviceSample {
                    utilization: adapter.utilization_reading(&handle)?,
                    memory: adapter.memory_reading(&handle)?,
                    temperature: adapter.temperature_reading(&handle, TemperatureSensor::Gpu)?,
                    handle,
                })
            })
            .collect()
    }

    /// Sample on the configured interval, handing each sample to `on_sample`
    ///
    /// A failed sample is logged and skipped; it still counts toward
    /// `count`. Errors from `on_sample` end the loop.
    pub fn run<L, F>(&self, adapter: &Adapter<L>, mut on_sample: F) -> Result<(), AppError>
    where
        L: VendorLibrary,
        F: FnMut(&[DeviceSample]) -> Result<(), AppError>,
    {
        let mut taken: u64 = 0;

        loop {
            if self.config.count.is_some_and(|count| taken >= count) {
                log::debug!("Collected {} sample(s), stopping", taken);
                break;
            }

            if taken > 0 {
                std::thread::sleep(self.config.interval);
            }

            match self.sample(adapter) {
                Ok(samples) => on_sample(&samples)?,
                Err(e) => log::error!("Sample failed: {}", e),
            }
            taken += 1;
        }

        Ok(())
    }

    /// Get the monitor configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
