//! Domain models for nvml-amd
//!
//! NVML-shaped value types returned by the adapter.

pub mod gpu;
pub mod performance;
pub mod reading;
pub mod thermal;

pub use gpu::DeviceHandle;
pub use performance::{mb_to_bytes, MemoryInfo, Utilization, BYTES_PER_MB};
pub use reading::Reading;
pub use thermal::{Temperature, TemperatureSensor, NVML_TEMPERATURE_GPU};
