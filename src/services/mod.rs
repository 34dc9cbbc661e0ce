//! Service layer
//!
//! Services encapsulate the logic shared by the CLI commands.

pub mod monitor;

pub use monitor::{DeviceSample, Monitor, MonitorConfig};
