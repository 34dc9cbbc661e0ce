//! NVML-compatible adapter
//!
//! Exposes the NVML call surface (`init`, `device_get_count`, ...) and
//! answers each call through a [`VendorLibrary`].
//!
//! Lifecycle is uninitialized -> initialized -> uninitialized. While
//! initialized the adapter holds the vendor's system services, GPU list
//! and (optionally) performance monitoring service, plus the VRAM
//! capacity of every GPU, read once during `init`. Native GPU objects
//! are never kept: every metric query fetches a fresh one from the list
//! and drops it before returning.
//!
//! Metric reads are best effort. A failed read yields zero; the
//! `*_reading` methods additionally report whether the value was
//! actually measured.

use crate::domain::{
    mb_to_bytes, DeviceHandle, MemoryInfo, Reading, Temperature, TemperatureSensor, Utilization,
};
use crate::error::{NvmlError, VendorError};
use crate::vendor::{
    GpuList, MetricsSnapshot, PerformanceMonitor, SystemServices, VendorGpu, VendorLibrary,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Returned by `system_get_driver_version`; the vendor library has no
/// driver version query
pub const DRIVER_VERSION_PLACEHOLDER: &str = "AMD Driver: Unknown";

/// Init generations, unique across every adapter in the process
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

type SystemOf<L> = <L as VendorLibrary>::System;
type GpusOf<L> = <SystemOf<L> as SystemServices>::Gpus;
type MonitoringOf<L> = <SystemOf<L> as SystemServices>::Monitoring;
type MetricsOf<L> = <MonitoringOf<L> as PerformanceMonitor>::Metrics;

/// Vendor objects held while initialized
///
/// Fields drop in declaration order, so the list and the monitoring
/// service are released before the system services they came from.
struct Session<L: VendorLibrary> {
    gpus: GpusOf<L>,
    monitoring: Option<MonitoringOf<L>>,
    vram_capacity_mb: HashMap<u32, u64>,
    _system: SystemOf<L>,
}

impl<L: VendorLibrary> Session<L> {
    fn capacity_mb(&self, index: u32) -> u64 {
        self.vram_capacity_mb.get(&index).copied().unwrap_or(0)
    }

    /// Snapshot current metrics through a transient GPU reference
    fn current_metrics(&self, index: u32) -> Option<MetricsOf<L>> {
        let Some(monitoring) = self.monitoring.as_ref() else {
            log::debug!("GPU {}: performance monitoring unavailable", index);
            return None;
        };

        let gpu = self
            .gpus
            .at(index)
            .map_err(|e| log::debug!("GPU {}: failed to get GPU object: {}", index, e))
            .ok()?;

        monitoring
            .current_metrics(&gpu)
            .map_err(|e| log::debug!("GPU {}: failed to read current metrics: {}", index, e))
            .ok()
    }
}

/// NVML-compatible front end over a vendor GPU library
pub struct Adapter<L: VendorLibrary> {
    library: L,
    session: Option<Session<L>>,
    generation: u64,
}

impl<L: VendorLibrary> Adapter<L> {
    /// Create an uninitialized adapter over a vendor library binding
    pub fn new(library: L) -> Self {
        Self {
            library,
            session: None,
            generation: 0,
        }
    }

    /// Get a reference to the underlying vendor library binding
    pub fn library(&self) -> &L {
        &self.library
    }

    /// True between a successful `init` and `shutdown`
    pub fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    /// Initialize the vendor library (emulates `nvmlInit`)
    ///
    /// Calling this while already initialized does nothing. On failure
    /// everything acquired so far is released again.
    pub fn init(&mut self) -> Result<(), NvmlError> {
        if self.session.is_some() {
            log::debug!("init called while already initialized");
            return Ok(());
        }

        let system = self
            .library
            .initialize()
            .map_err(|e| NvmlError::InitializationFailed(e.to_string()))?;

        let gpus = match system.gpu_list() {
            Ok(gpus) => gpus,
            Err(e) => {
                drop(system);
                self.terminate_library();
                return Err(NvmlError::InitializationFailed(format!(
                    "failed to get GPU list: {}",
                    e
                )));
            }
        };

        let monitoring = match system.performance_monitoring() {
            Ok(monitoring) => Some(monitoring),
            Err(e) => {
                log::warn!(
                    "Performance monitoring unavailable, metrics will read as zero: {}",
                    e
                );
                None
            }
        };

        let vram_capacity_mb = cache_vram_capacity(&gpus, monitoring.as_ref());

        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        log::info!("Initialized AMD GPU library with {} device(s)", gpus.size());

        self.session = Some(Session {
            gpus,
            monitoring,
            vram_capacity_mb,
            _system: system,
        });

        Ok(())
    }

    /// Release all vendor objects (emulates `nvmlShutdown`)
    ///
    /// Safe to call at any time, any number of times.
    pub fn shutdown(&mut self) {
        let Some(session) = self.session.take() else {
            log::debug!("shutdown called while not initialized");
            return;
        };

        drop(session);
        self.terminate_library();
        log::debug!("AMD GPU library shut down");
    }

    fn terminate_library(&mut self) {
        if let Err(e) = self.library.terminate() {
            log::debug!("Ignoring error while terminating library session: {}", e);
        }
    }

    fn session(&self) -> Result<&Session<L>, NvmlError> {
        self.session.as_ref().ok_or(NvmlError::Uninitialized)
    }

    /// Session, after checking the handle belongs to the current init cycle
    fn session_for(&self, handle: &DeviceHandle) -> Result<&Session<L>, NvmlError> {
        let session = self.session()?;
        if handle.generation() != self.generation {
            return Err(NvmlError::StaleHandle(handle.index()));
        }
        Ok(session)
    }

    /// Get the number of GPU devices (emulates `nvmlDeviceGetCount`)
    pub fn device_get_count(&self) -> Result<u32, NvmlError> {
        Ok(self.session()?.gpus.size())
    }

    /// Get a device handle by index (emulates `nvmlDeviceGetHandleByIndex`)
    ///
    /// The device name is read now and cached in the handle. If it cannot
    /// be read, a synthetic `AMD GPU {index}` name is used.
    pub fn device_get_handle_by_index(&self, index: u32) -> Result<DeviceHandle, NvmlError> {
        let session = self.session()?;

        let count = session.gpus.size();
        if index >= count {
            return Err(NvmlError::InvalidArgument(format!(
                "device index {} out of range (device count: {})",
                index, count
            )));
        }

        let gpu = session.gpus.at(index).map_err(|e| {
            log::debug!("GPU {}: failed to get GPU object: {}", index, e);
            NvmlError::DeviceNotFound(index)
        })?;

        let name = match gpu.name() {
            Ok(name) if !name.trim().is_empty() => name,
            Ok(_) => fallback_name(index),
            Err(e) => {
                log::debug!("GPU {}: failed to read name: {}", index, e);
                fallback_name(index)
            }
        };

        Ok(DeviceHandle::new(index, name, self.generation))
    }

    /// Get handles for every device
    pub fn device_handles(&self) -> Result<Vec<DeviceHandle>, NvmlError> {
        (0..self.device_get_count()?)
            .map(|index| self.device_get_handle_by_index(index))
            .collect()
    }

    /// Get the device name (emulates `nvmlDeviceGetName`)
    ///
    /// Returns the name cached in the handle; the vendor library is not
    /// consulted.
    pub fn device_get_name(&self, handle: &DeviceHandle) -> Result<String, NvmlError> {
        self.session_for(handle)?;
        Ok(handle.name().to_string())
    }

    /// Get the driver version (emulates `nvmlSystemGetDriverVersion`)
    pub fn system_get_driver_version(&self) -> Result<String, NvmlError> {
        self.session()?;
        Ok(DRIVER_VERSION_PLACEHOLDER.to_string())
    }

    /// Get utilization rates, reporting whether they were measured
    ///
    /// Memory utilization is VRAM in use relative to the capacity cached
    /// at `init`. With no cached capacity it is 0.
    pub fn utilization_reading(
        &self,
        handle: &DeviceHandle,
    ) -> Result<Reading<Utilization>, NvmlError> {
        let session = self.session_for(handle)?;
        let index = handle.index();

        let Some(metrics) = session.current_metrics(index) else {
            return Ok(Reading::unavailable());
        };

        let gpu = metrics
            .gpu_usage()
            .map_err(|e| log_read_failure(index, "GPU usage", e))
            .ok();

        let memory = metrics
            .gpu_vram()
            .map_err(|e| log_read_failure(index, "VRAM usage", e))
            .ok()
            .map(|used_mb| memory_utilization(index, used_mb, session.capacity_mb(index)));

        let utilization =
            Utilization::from_percentages(gpu.unwrap_or(0.0), memory.unwrap_or(0.0));

        Ok(if gpu.is_some() && memory.is_some() {
            Reading::measured(utilization)
        } else {
            Reading::substituted(utilization)
        })
    }

    /// Get utilization rates (emulates `nvmlDeviceGetUtilizationRates`)
    pub fn device_get_utilization_rates(
        &self,
        handle: &DeviceHandle,
    ) -> Result<Utilization, NvmlError> {
        Ok(self.utilization_reading(handle)?.into_value())
    }

    /// Get memory information, reporting whether usage was measured
    ///
    /// Total is the capacity cached at `init`; it is known even when the
    /// usage read fails.
    pub fn memory_reading(&self, handle: &DeviceHandle) -> Result<Reading<MemoryInfo>, NvmlError> {
        let session = self.session_for(handle)?;
        let index = handle.index();

        let total = mb_to_bytes(session.capacity_mb(index));
        let used = session.current_metrics(index).and_then(|metrics| {
            metrics
                .gpu_vram()
                .map_err(|e| log_read_failure(index, "VRAM usage", e))
                .ok()
        });

        Ok(match used {
            Some(used_mb) => Reading::measured(MemoryInfo::new(total, mb_to_bytes(used_mb))),
            None => Reading::substituted(MemoryInfo::new(total, 0)),
        })
    }

    /// Get memory information in bytes (emulates `nvmlDeviceGetMemoryInfo`)
    pub fn device_get_memory_info(&self, handle: &DeviceHandle) -> Result<MemoryInfo, NvmlError> {
        Ok(self.memory_reading(handle)?.into_value())
    }

    /// Get a temperature, reporting whether it was measured
    pub fn temperature_reading(
        &self,
        handle: &DeviceHandle,
        sensor: TemperatureSensor,
    ) -> Result<Reading<Temperature>, NvmlError> {
        let session = self.session_for(handle)?;
        let index = handle.index();

        let celsius = session.current_metrics(index).and_then(|metrics| match sensor {
            TemperatureSensor::Gpu => metrics
                .gpu_temperature()
                .map_err(|e| log_read_failure(index, "GPU temperature", e))
                .ok(),
        });

        Ok(Reading::from_option(celsius.map(Temperature::from_celsius_f64)))
    }

    /// Get a temperature in whole degrees (emulates `nvmlDeviceGetTemperature`)
    pub fn device_get_temperature(
        &self,
        handle: &DeviceHandle,
        sensor: TemperatureSensor,
    ) -> Result<Temperature, NvmlError> {
        Ok(self.temperature_reading(handle, sensor)?.into_value())
    }
}

impl<L: VendorLibrary> Drop for Adapter<L> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn cache_vram_capacity<G, M>(gpus: &G, monitoring: Option<&M>) -> HashMap<u32, u64>
where
    G: GpuList,
    M: PerformanceMonitor<Gpu = G::Gpu>,
{
    let mut capacities = HashMap::new();

    let Some(monitoring) = monitoring else {
        return capacities;
    };

    for index in 0..gpus.size() {
        let capacity = gpus
            .at(index)
            .and_then(|gpu| monitoring.vram_range(&gpu))
            .map(|range| range.max_mb)
            .unwrap_or_else(|e| {
                log::debug!("GPU {}: failed to read VRAM range: {}", index, e);
                0
            });

        log::debug!("GPU {}: cached VRAM capacity {} MB", index, capacity);
        capacities.insert(index, capacity);
    }

    capacities
}

fn memory_utilization(index: u32, used_mb: u64, capacity_mb: u64) -> f64 {
    if capacity_mb == 0 {
        log::debug!(
            "GPU {}: VRAM capacity is 0, cannot calculate memory utilization",
            index
        );
        return 0.0;
    }
    used_mb as f64 / capacity_mb as f64 * 100.0
}

fn fallback_name(index: u32) -> String {
    format!("AMD GPU {}", index)
}

fn log_read_failure(index: u32, what: &str, err: VendorError) {
    log::debug!("GPU {}: failed to read {}: {}", index, what, err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDevice, MockLibrary};

    fn initialized(lib: &MockLibrary) -> Adapter<MockLibrary> {
        let mut adapter = Adapter::new(lib.clone());
        adapter.init().unwrap();
        adapter
    }

    #[test]
    fn test_queries_before_init_fail() {
        let adapter = Adapter::new(MockLibrary::new(1));
        assert_eq!(adapter.device_get_count(), Err(NvmlError::Uninitialized));
        assert_eq!(
            adapter.device_get_handle_by_index(0),
            Err(NvmlError::Uninitialized)
        );
        assert_eq!(
            adapter.system_get_driver_version(),
            Err(NvmlError::Uninitialized)
        );
        assert!(!adapter.is_initialized());
    }

    #[test]
    fn test_double_init_is_noop() {
        let lib = MockLibrary::new(2);
        let mut adapter = initialized(&lib);
        adapter.init().unwrap();

        assert_eq!(lib.sessions_opened(), 1);
        assert_eq!(lib.vram_range_queries(), 2);
    }

    #[test]
    fn test_init_failure() {
        let lib = MockLibrary::new(1);
        lib.set_fail_initialize(true);
        let mut adapter = Adapter::new(lib.clone());

        assert!(matches!(
            adapter.init(),
            Err(NvmlError::InitializationFailed(_))
        ));
        assert!(!adapter.is_initialized());
        assert_eq!(adapter.device_get_count(), Err(NvmlError::Uninitialized));
    }

    #[test]
    fn test_init_without_gpu_list_releases_session() {
        let lib = MockLibrary::new(1);
        lib.set_fail_gpu_list(true);
        let mut adapter = Adapter::new(lib.clone());

        assert!(matches!(
            adapter.init(),
            Err(NvmlError::InitializationFailed(_))
        ));
        assert_eq!(lib.sessions_opened(), 1);
        assert_eq!(lib.sessions_terminated(), 1);
    }

    #[test]
    fn test_init_without_monitoring_degrades() {
        let lib = MockLibrary::new(1);
        lib.set_fail_monitoring(true);
        let adapter = initialized(&lib);

        let handle = adapter.device_get_handle_by_index(0).unwrap();
        let util = adapter.utilization_reading(&handle).unwrap();
        assert!(!util.is_available());
        assert_eq!(util.into_value(), Utilization::new(0, 0));

        let mem = adapter.device_get_memory_info(&handle).unwrap();
        assert_eq!(mem, MemoryInfo::new(0, 0));
    }

    #[test]
    fn test_handle_bounds() {
        let adapter = initialized(&MockLibrary::new(2));
        assert_eq!(adapter.device_get_count().unwrap(), 2);

        assert!(matches!(
            adapter.device_get_handle_by_index(2),
            Err(NvmlError::InvalidArgument(_))
        ));
        let handle = adapter.device_get_handle_by_index(1).unwrap();
        assert_eq!(handle.index(), 1);
    }

    #[test]
    fn test_device_name() {
        let lib = MockLibrary::with_devices(vec![
            MockDevice::new(0).with_name("AMD Radeon RX 7900 XTX"),
            MockDevice::new(1).without_name(),
            MockDevice::new(2).with_name("   "),
        ]);
        let adapter = initialized(&lib);

        let names: Vec<String> = adapter
            .device_handles()
            .unwrap()
            .iter()
            .map(|h| adapter.device_get_name(h).unwrap())
            .collect();

        assert_eq!(names, ["AMD Radeon RX 7900 XTX", "AMD GPU 1", "AMD GPU 2"]);
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_driver_version_placeholder() {
        let adapter = initialized(&MockLibrary::new(1));
        assert_eq!(
            adapter.system_get_driver_version().unwrap(),
            DRIVER_VERSION_PLACEHOLDER
        );
    }

    #[test]
    fn test_utilization() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0)
            .with_usage(63.7)
            .with_vram(2048, 8192)]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let reading = adapter.utilization_reading(&handle).unwrap();
        assert!(reading.is_available());
        assert_eq!(reading.into_value(), Utilization::new(63, 25));
    }

    #[test]
    fn test_utilization_metrics_failure_is_zero() {
        let lib = MockLibrary::new(1);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        lib.set_fail_metrics(0, true);

        let util = adapter.device_get_utilization_rates(&handle).unwrap();
        assert_eq!(util, Utilization::new(0, 0));
        assert!(!adapter.utilization_reading(&handle).unwrap().is_available());
    }

    #[test]
    fn test_memory_utilization_zero_capacity() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0)
            .with_usage(10.0)
            .with_vram(4096, 0)]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let util = adapter.device_get_utilization_rates(&handle).unwrap();
        assert_eq!(util.memory, 0);
        assert_eq!(util.gpu, 10);
    }

    #[test]
    fn test_memory_utilization_uncached_capacity() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0).without_vram_range()]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let util = adapter.device_get_utilization_rates(&handle).unwrap();
        assert_eq!(util.memory, 0);
    }

    #[test]
    fn test_memory_utilization_clamped() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0).with_vram(1024, 1024)]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        for used in [0, 1, 512, 1023, 1024, 4096] {
            lib.set_vram_used(0, used);
            let util = adapter.device_get_utilization_rates(&handle).unwrap();
            assert!(util.memory <= 100, "used {} gave {}", used, util.memory);
        }
    }

    #[test]
    fn test_capacity_is_cached_at_init() {
        let lib = MockLibrary::new(1);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        adapter.device_get_utilization_rates(&handle).unwrap();
        adapter.device_get_memory_info(&handle).unwrap();
        adapter.device_get_memory_info(&handle).unwrap();

        assert_eq!(lib.vram_range_queries(), 1);
    }

    #[test]
    fn test_memory_info() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0).with_vram(3072, 8192)]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let mem = adapter.device_get_memory_info(&handle).unwrap();
        assert_eq!(mem.total, 8192 * 1024 * 1024);
        assert_eq!(mem.used, 3072 * 1024 * 1024);
        assert_eq!(mem.free, 5120 * 1024 * 1024);
    }

    #[test]
    fn test_memory_info_free_never_negative() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0).with_vram(9000, 8192)]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let mem = adapter.device_get_memory_info(&handle).unwrap();
        assert_eq!(mem.free, mem.total.saturating_sub(mem.used));
        assert_eq!(mem.free, 0);
    }

    #[test]
    fn test_memory_info_usage_failure_keeps_total() {
        let lib = MockLibrary::with_devices(vec![MockDevice::new(0)
            .with_vram(1, 2048)
            .without_vram_usage()]);
        let adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        let reading = adapter.memory_reading(&handle).unwrap();
        assert!(!reading.is_available());
        let mem = reading.into_value();
        assert_eq!(mem.used, 0);
        assert_eq!(mem.total, 2048 * 1024 * 1024);
        assert_eq!(mem.free, mem.total);
    }

    #[test]
    fn test_temperature() {
        let lib = MockLibrary::with_devices(vec![
            MockDevice::new(0).with_temperature(71.8),
            MockDevice::new(1).without_temperature(),
        ]);
        let adapter = initialized(&lib);

        let h0 = adapter.device_get_handle_by_index(0).unwrap();
        let h1 = adapter.device_get_handle_by_index(1).unwrap();

        let temp = adapter
            .device_get_temperature(&h0, TemperatureSensor::Gpu)
            .unwrap();
        assert_eq!(temp.as_celsius(), 71);

        let reading = adapter
            .temperature_reading(&h1, TemperatureSensor::Gpu)
            .unwrap();
        assert!(!reading.is_available());
        assert_eq!(reading.into_value().as_celsius(), 0);
    }

    #[test]
    fn test_shutdown_resets_state() {
        let lib = MockLibrary::new(2);
        let mut adapter = initialized(&lib);
        let handle = adapter.device_get_handle_by_index(0).unwrap();

        adapter.shutdown();

        assert!(!adapter.is_initialized());
        assert_eq!(lib.sessions_terminated(), 1);
        assert_eq!(adapter.device_get_count(), Err(NvmlError::Uninitialized));
        assert_eq!(
            adapter.device_get_name(&handle),
            Err(NvmlError::Uninitialized)
        );
        assert_eq!(
            adapter.device_get_memory_info(&handle),
            Err(NvmlError::Uninitialized)
        );
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let lib = MockLibrary::new(1);
        let mut adapter = Adapter::new(lib.clone());
        adapter.shutdown();
        adapter.init().unwrap();
        adapter.shutdown();
        adapter.shutdown();

        assert_eq!(lib.sessions_terminated(), 1);
    }

    #[test]
    fn test_reinit_repopulates_capacity_and_rejects_old_handles() {
        let lib = MockLibrary::new(1);
        let mut adapter = initialized(&lib);
        let old = adapter.device_get_handle_by_index(0).unwrap();

        adapter.shutdown();
        adapter.init().unwrap();

        assert_eq!(lib.vram_range_queries(), 2);
        assert_eq!(
            adapter.device_get_utilization_rates(&old),
            Err(NvmlError::StaleHandle(0))
        );

        let fresh = adapter.device_get_handle_by_index(0).unwrap();
        assert!(adapter.device_get_utilization_rates(&fresh).is_ok());
    }

    #[test]
    fn test_handle_from_other_adapter_is_rejected() {
        let first = initialized(&MockLibrary::new(2));
        let second = initialized(&MockLibrary::new(1));
        let handle = first.device_get_handle_by_index(1).unwrap();

        assert_eq!(
            second.device_get_utilization_rates(&handle),
            Err(NvmlError::StaleHandle(1))
        );
        assert_eq!(second.device_get_name(&handle), Err(NvmlError::StaleHandle(1)));
        assert!(first.device_get_utilization_rates(&handle).is_ok());
    }

    #[test]
    fn test_failing_metrics_device_reads_zero() {
        let lib = MockLibrary::with_devices(vec![
            MockDevice::new(0).failing_metrics(),
            MockDevice::new(1).with_usage(42.0),
        ]);
        let adapter = initialized(&lib);
        let broken = adapter.device_get_handle_by_index(0).unwrap();
        let healthy = adapter.device_get_handle_by_index(1).unwrap();

        let reading = adapter.utilization_reading(&broken).unwrap();
        assert!(!reading.is_available());
        assert_eq!(reading.into_value(), Utilization::new(0, 0));
        assert_eq!(
            adapter.device_get_utilization_rates(&healthy).unwrap().gpu,
            42
        );
    }

    #[test]
    fn test_library_reflects_session_state() {
        let lib = MockLibrary::new(1);
        let mut adapter = initialized(&lib);
        assert_eq!(adapter.library().sessions_opened(), 1);

        adapter.shutdown();
        assert_eq!(adapter.library().sessions_terminated(), 1);
    }

    #[test]
    fn test_drop_terminates_session() {
        let lib = MockLibrary::new(1);
        {
            let _adapter = initialized(&lib);
        }
        assert_eq!(lib.sessions_terminated(), 1);
    }
}
