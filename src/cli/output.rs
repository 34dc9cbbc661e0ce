//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{DeviceHandle, MemoryInfo, Reading, Temperature, Utilization};
use crate::services::DeviceSample;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

const NOT_AVAILABLE: &str = "N/A";

/// GPU list entry for display
#[derive(Debug, Clone, Serialize)]
pub struct GpuListEntry {
    pub index: u32,
    pub name: String,
}

impl From<&DeviceHandle> for GpuListEntry {
    fn from(handle: &DeviceHandle) -> Self {
        Self {
            index: handle.index(),
            name: handle.name().to_string(),
        }
    }
}

impl TableDisplay for GpuListEntry {
    fn to_table(&self) -> String {
        format!("[{}] {}", self.index, self.name)
    }

    fn to_compact(&self) -> String {
        format!("{}:{}", self.index, self.name)
    }
}

/// GPU list for display
#[derive(Debug, Clone, Serialize)]
pub struct GpuList {
    pub gpus: Vec<GpuListEntry>,
    pub driver_version: String,
}

impl TableDisplay for GpuList {
    fn to_table(&self) -> String {
        let mut output = format!("Driver Version: {}\n", self.driver_version);
        output.push_str(&format!("GPUs Found: {}\n\n", self.gpus.len()));

        for gpu in &self.gpus {
            output.push_str(&gpu.to_table());
            output.push('\n');
        }

        output
    }

    fn to_compact(&self) -> String {
        self.gpus
            .iter()
            .map(|g| g.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Memory figures in MiB for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MemoryMib {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl From<MemoryInfo> for MemoryMib {
    fn from(info: MemoryInfo) -> Self {
        Self {
            total: info.total_mb(),
            used: info.used_mb(),
            free: info.free_mb(),
        }
    }
}

/// Status of one GPU, as shown by `query` and `watch`
#[derive(Debug, Clone, Serialize)]
pub struct DeviceStatus {
    pub index: u32,
    pub name: String,
    pub gpu_utilization: Reading<u32>,
    pub memory_utilization: Reading<u32>,
    pub memory_mib: Reading<MemoryMib>,
    pub temperature_celsius: Reading<i32>,
}

impl DeviceStatus {
    /// Assemble from adapter readings
    pub fn new(
        handle: &DeviceHandle,
        utilization: Reading<Utilization>,
        memory: Reading<MemoryInfo>,
        temperature: Reading<Temperature>,
    ) -> Self {
        Self {
            index: handle.index(),
            name: handle.name().to_string(),
            gpu_utilization: utilization.map(|u| u.gpu),
            memory_utilization: utilization.map(|u| u.memory),
            memory_mib: memory.map(MemoryMib::from),
            temperature_celsius: temperature.map(|t| t.as_celsius()),
        }
    }
}

impl From<&DeviceSample> for DeviceStatus {
    fn from(sample: &DeviceSample) -> Self {
        Self::new(
            &sample.handle,
            sample.utilization,
            sample.memory,
            sample.temperature,
        )
    }
}

fn show<T: std::fmt::Display>(reading: &Reading<T>, unit: &str) -> String {
    if reading.is_available() {
        format!("{}{}", reading.value(), unit)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

impl TableDisplay for DeviceStatus {
    fn to_table(&self) -> String {
        let memory = if self.memory_mib.is_available() {
            let m = self.memory_mib.value();
            format!("{} / {} MiB ({} MiB free)", m.used, m.total, m.free)
        } else {
            NOT_AVAILABLE.to_string()
        };

        format!(
            "[{}] {}\n  GPU Utilization: {}\n  Memory Utilization: {}\n  Memory: {}\n  Temperature: {}",
            self.index,
            self.name,
            show(&self.gpu_utilization, "%"),
            show(&self.memory_utilization, "%"),
            memory,
            show(&self.temperature_celsius, "°C"),
        )
    }

    fn to_compact(&self) -> String {
        format!(
            "{}:{} gpu={} mem={} temp={}",
            self.index,
            self.name,
            show(&self.gpu_utilization, "%"),
            show(&self.memory_utilization, "%"),
            show(&self.temperature_celsius, "C"),
        )
    }
}

/// Status of every selected GPU
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub driver_version: String,
    pub devices: Vec<DeviceStatus>,
}

impl TableDisplay for StatusReport {
    fn to_table(&self) -> String {
        let mut output = format!("Driver Version: {}\n", self.driver_version);
        for device in &self.devices {
            output.push('\n');
            output.push_str(&device.to_table());
            output.push('\n');
        }
        output
    }

    fn to_compact(&self) -> String {
        self.devices
            .iter()
            .map(|d| d.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
