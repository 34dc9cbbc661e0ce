//! nvml-amd - NVML-compatible GPU monitoring for AMD GPUs
//!
//! This library lets code written against NVML's device queries run on
//! AMD hardware. An [`nvml::Adapter`] answers NVML-shaped calls by
//! translating them to a vendor GPU library described by the traits in
//! [`vendor`].
//!
//! # Example
//!
//! ```no_run
//! use nvml_amd::domain::TemperatureSensor;
//! use nvml_amd::nvml::Adapter;
//! use nvml_amd::vendor::SysfsLibrary;
//!
//! let mut nvml = Adapter::new(SysfsLibrary::default());
//! nvml.init()?;
//! for index in 0..nvml.device_get_count()? {
//!     let handle = nvml.device_get_handle_by_index(index)?;
//!     let util = nvml.device_get_utilization_rates(&handle)?;
//!     let temp = nvml.device_get_temperature(&handle, TemperatureSensor::Gpu)?;
//!     println!("{}: {}% busy, {}", nvml.device_get_name(&handle)?, util.gpu, temp);
//! }
//! nvml.shutdown();
//! # Ok::<(), nvml_amd::error::NvmlError>(())
//! ```
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: NVML-shaped value types
//! - [`error`]: Error types
//! - [`nvml`]: NVML-compatible adapter
//! - [`services`]: Sampling services
//! - [`vendor`]: Vendor library abstraction layer

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod nvml;
pub mod services;
pub mod vendor;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, NvmlError, Result};
