//! Unified error types for nvml-amd
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the NVML-compatible adapter
    #[error("NVML error: {0}")]
    Nvml(#[from] NvmlError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No GPUs detected in the system
    #[error("No AMD GPUs detected")]
    NoGpusFound,

    /// IO error (stdout, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the NVML-compatible adapter
///
/// These are precondition failures only. Metric reads that fail during a
/// query never produce an error; they degrade to a zero reading instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NvmlError {
    /// A query was made before `init` or after `shutdown`
    #[error("NVML not initialized")]
    Uninitialized,

    /// The vendor library session could not be brought up
    #[error("Failed to initialize AMD GPU library: {0}")]
    InitializationFailed(String),

    /// Invalid argument, e.g. a device index past the device count
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The device list returned nothing for an in-range index
    #[error("GPU device not found at index {0}")]
    DeviceNotFound(u32),

    /// Handle was produced by an earlier init/shutdown cycle
    #[error("Device handle for GPU {0} is no longer valid (library was re-initialized)")]
    StaleHandle(u32),
}

/// Errors reported by a vendor library backend
#[derive(Error, Debug)]
pub enum VendorError {
    /// A service or object the backend needs is not present
    #[error("{0} unavailable")]
    Unavailable(String),

    /// Reading a backend file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A backend file held something other than the expected number
    #[error("Unexpected value {value:?} in {path}")]
    Parse { path: PathBuf, value: String },

    /// Generic backend failure
    #[error("{0}")]
    Failed(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
