//! Mock implementations for testing
//!
//! Provides a mock vendor library for exercising the adapter without AMD
//! hardware. `MockLibrary` is cheaply cloneable; clones share state, so a
//! test can keep one clone to inject failures and inspect call counters
//! after handing the other to an adapter.

use crate::error::VendorError;
use crate::vendor::{
    GpuList, MetricsSnapshot, PerformanceMonitor, SystemServices, VendorGpu, VendorLibrary,
    VramRange,
};

use std::sync::{Arc, Mutex, MutexGuard};

/// Mock GPU description
///
/// A `None` field makes the corresponding read fail.
#[derive(Debug, Clone)]
pub struct MockDevice {
    name: Option<String>,
    usage: Option<f64>,
    vram_used_mb: Option<u64>,
    vram_max_mb: Option<u64>,
    temperature: Option<f64>,
    metrics_fail: bool,
}

impl MockDevice {
    /// Create a new mock device with default values
    pub fn new(index: u32) -> Self {
        Self {
            name: Some(format!("Mock Radeon {}", index)),
            usage: Some(25.0),
            vram_used_mb: Some(2048),
            vram_max_mb: Some(8192),
            temperature: Some(45.0),
            metrics_fail: false,
        }
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: make the name unreadable
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Builder: set GPU usage percentage
    pub fn with_usage(mut self, usage: f64) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Builder: set used and maximum VRAM in MB
    pub fn with_vram(mut self, used_mb: u64, max_mb: u64) -> Self {
        self.vram_used_mb = Some(used_mb);
        self.vram_max_mb = Some(max_mb);
        self
    }

    /// Builder: make the VRAM range query fail
    pub fn without_vram_range(mut self) -> Self {
        self.vram_max_mb = None;
        self
    }

    /// Builder: make the VRAM usage read fail
    pub fn without_vram_usage(mut self) -> Self {
        self.vram_used_mb = None;
        self
    }

    /// Builder: set temperature in Celsius
    pub fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Builder: make the temperature read fail
    pub fn without_temperature(mut self) -> Self {
        self.temperature = None;
        self
    }

    /// Builder: make every metrics snapshot fail
    pub fn failing_metrics(mut self) -> Self {
        self.metrics_fail = true;
        self
    }
}

#[derive(Debug, Default)]
struct MockState {
    devices: Vec<MockDevice>,
    fail_initialize: bool,
    fail_gpu_list: bool,
    fail_monitoring: bool,
    sessions_opened: u32,
    sessions_terminated: u32,
    vram_range_queries: u32,
}

/// Mock vendor library
#[derive(Debug, Clone, Default)]
pub struct MockLibrary {
    state: Arc<Mutex<MockState>>,
}

impl MockLibrary {
    /// Create a mock library with the specified number of devices
    pub fn new(device_count: u32) -> Self {
        Self::with_devices((0..device_count).map(MockDevice::new).collect())
    }

    /// Create a mock library with custom devices
    pub fn with_devices(devices: Vec<MockDevice>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                devices,
                ..MockState::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Make session initialization fail
    pub fn set_fail_initialize(&self, fail: bool) {
        self.state().fail_initialize = fail;
    }

    /// Make the GPU list unavailable
    pub fn set_fail_gpu_list(&self, fail: bool) {
        self.state().fail_gpu_list = fail;
    }

    /// Make the performance monitoring service unavailable
    pub fn set_fail_monitoring(&self, fail: bool) {
        self.state().fail_monitoring = fail;
    }

    /// Make metrics snapshots of one device fail
    pub fn set_fail_metrics(&self, index: u32, fail: bool) {
        if let Some(device) = self.state().devices.get_mut(index as usize) {
            device.metrics_fail = fail;
        }
    }

    /// Change the reported VRAM usage of one device
    pub fn set_vram_used(&self, index: u32, used_mb: u64) {
        if let Some(device) = self.state().devices.get_mut(index as usize) {
            device.vram_used_mb = Some(used_mb);
        }
    }

    /// Number of sessions opened so far
    pub fn sessions_opened(&self) -> u32 {
        self.state().sessions_opened
    }

    /// Number of sessions terminated so far
    pub fn sessions_terminated(&self) -> u32 {
        self.state().sessions_terminated
    }

    /// Number of VRAM range queries so far
    pub fn vram_range_queries(&self) -> u32 {
        self.state().vram_range_queries
    }

    fn device(&self, index: u32) -> Result<MockDevice, VendorError> {
        self.state()
            .devices
            .get(index as usize)
            .cloned()
            .ok_or_else(|| VendorError::Unavailable(format!("GPU at index {}", index)))
    }
}

impl VendorLibrary for MockLibrary {
    type System = MockLibrary;

    fn initialize(&mut self) -> Result<Self::System, VendorError> {
        let mut state = self.state();
        if state.fail_initialize {
            return Err(VendorError::Failed("mock session refused".to_string()));
        }
        state.sessions_opened += 1;
        Ok(self.clone())
    }

    fn terminate(&mut self) -> Result<(), VendorError> {
        self.state().sessions_terminated += 1;
        Ok(())
    }
}

impl SystemServices for MockLibrary {
    type Gpus = MockGpuList;
    type Monitoring = MockMonitor;

    fn gpu_list(&self) -> Result<Self::Gpus, VendorError> {
        if self.state().fail_gpu_list {
            return Err(VendorError::Unavailable("GPU list".to_string()));
        }
        Ok(MockGpuList {
            library: self.clone(),
        })
    }

    fn performance_monitoring(&self) -> Result<Self::Monitoring, VendorError> {
        if self.state().fail_monitoring {
            return Err(VendorError::Unavailable(
                "performance monitoring".to_string(),
            ));
        }
        Ok(MockMonitor {
            library: self.clone(),
        })
    }
}

/// Mock GPU list
#[derive(Debug, Clone)]
pub struct MockGpuList {
    library: MockLibrary,
}

impl GpuList for MockGpuList {
    type Gpu = MockGpu;

    fn size(&self) -> u32 {
        u32::try_from(self.library.state().devices.len()).unwrap_or(u32::MAX)
    }

    fn at(&self, index: u32) -> Result<Self::Gpu, VendorError> {
        self.library.device(index)?;
        Ok(MockGpu {
            index,
            library: self.library.clone(),
        })
    }
}

/// Mock native GPU reference
#[derive(Debug, Clone)]
pub struct MockGpu {
    index: u32,
    library: MockLibrary,
}

impl VendorGpu for MockGpu {
    fn name(&self) -> Result<String, VendorError> {
        self.library
            .device(self.index)?
            .name
            .ok_or_else(|| VendorError::Unavailable("GPU name".to_string()))
    }
}

/// Mock performance monitoring service
#[derive(Debug, Clone)]
pub struct MockMonitor {
    library: MockLibrary,
}

impl PerformanceMonitor for MockMonitor {
    type Gpu = MockGpu;
    type Metrics = MockMetrics;

    fn current_metrics(&self, gpu: &Self::Gpu) -> Result<Self::Metrics, VendorError> {
        let device = self.library.device(gpu.index)?;
        if device.metrics_fail {
            return Err(VendorError::Failed("metrics snapshot failed".to_string()));
        }
        Ok(MockMetrics {
            usage: device.usage,
            vram_used_mb: device.vram_used_mb,
            temperature: device.temperature,
        })
    }

    fn vram_range(&self, gpu: &Self::Gpu) -> Result<VramRange, VendorError> {
        self.library.state().vram_range_queries += 1;
        self.library
            .device(gpu.index)?
            .vram_max_mb
            .map(|max| VramRange::new(0, max))
            .ok_or_else(|| VendorError::Unavailable("VRAM range".to_string()))
    }
}

/// Mock metrics snapshot
#[derive(Debug, Clone, Copy)]
pub struct MockMetrics {
    usage: Option<f64>,
    vram_used_mb: Option<u64>,
    temperature: Option<f64>,
}

impl MetricsSnapshot for MockMetrics {
    fn gpu_usage(&self) -> Result<f64, VendorError> {
        self.usage
            .ok_or_else(|| VendorError::Unavailable("GPU usage".to_string()))
    }

    fn gpu_vram(&self) -> Result<u64, VendorError> {
        self.vram_used_mb
            .ok_or_else(|| VendorError::Unavailable("GPU VRAM".to_string()))
    }

    fn gpu_temperature(&self) -> Result<f64, VendorError> {
        self.temperature
            .ok_or_else(|| VendorError::Unavailable("GPU temperature".to_string()))
    }
}
