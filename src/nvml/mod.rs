//! NVML-compatible API layer
//!
//! Provides the adapter that answers NVML-shaped calls from a vendor
//! GPU library.

pub mod adapter;

pub use adapter::{Adapter, DRIVER_VERSION_PLACEHOLDER};
