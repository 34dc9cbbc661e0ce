//! Utilization and memory domain types
//!
//! These mirror `nvmlUtilization_t` and `nvmlMemory_t`.

use serde::{Deserialize, Serialize};

/// Bytes per megabyte, the unit AMD's management interface reports VRAM in
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a VRAM quantity in MB (as reported by the vendor library) to bytes
#[inline]
pub fn mb_to_bytes(mb: u64) -> u64 {
    mb.saturating_mul(BYTES_PER_MB)
}

/// GPU and memory utilization rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Utilization {
    /// GPU compute utilization (0-100%)
    pub gpu: u32,
    /// Memory utilization (0-100%)
    pub memory: u32,
}

impl Utilization {
    /// Create a new utilization value
    pub fn new(gpu: u32, memory: u32) -> Self {
        Self {
            gpu: gpu.min(100),
            memory: memory.min(100),
        }
    }

    /// Build from floating point percentages, truncating toward zero
    ///
    /// Negative and NaN inputs become 0.
    pub fn from_percentages(gpu: f64, memory: f64) -> Self {
        Self::new(truncate_percent(gpu), truncate_percent(memory))
    }

    /// Get GPU utilization as percentage
    pub fn gpu_percent(&self) -> u32 {
        self.gpu
    }

    /// Get memory utilization as percentage
    pub fn memory_percent(&self) -> u32 {
        self.memory
    }
}

fn truncate_percent(value: f64) -> u32 {
    // `as` saturates and maps NaN to 0
    value.clamp(0.0, 100.0) as u32
}

/// VRAM/Memory information, all values in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total memory in bytes
    pub total: u64,
    /// Used memory in bytes
    pub used: u64,
    /// Free memory in bytes
    pub free: u64,
}

impl MemoryInfo {
    /// Create from total and used; free is derived and never underflows
    pub fn new(total: u64, used: u64) -> Self {
        Self {
            total,
            used,
            free: total.saturating_sub(used),
        }
    }

    /// Get total memory in MB
    pub fn total_mb(&self) -> u64 {
        self.total / BYTES_PER_MB
    }

    /// Get used memory in MB
    pub fn used_mb(&self) -> u64 {
        self.used / BYTES_PER_MB
    }

    /// Get free memory in MB
    pub fn free_mb(&self) -> u64 {
        self.free / BYTES_PER_MB
    }

    /// Get usage percentage (0.0 - 1.0)
    pub fn usage_ratio(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.used as f32 / self.total as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization() {
        let util = Utilization::new(75, 50);
        assert_eq!(util.gpu_percent(), 75);
        assert_eq!(util.memory_percent(), 50);
    }

    #[test]
    fn test_utilization_clamp() {
        let util = Utilization::new(150, 200);
        assert_eq!(util.gpu_percent(), 100);
        assert_eq!(util.memory_percent(), 100);
    }

    #[test]
    fn test_utilization_from_percentages_truncates() {
        let util = Utilization::from_percentages(42.9, 99.99);
        assert_eq!(util, Utilization::new(42, 99));
    }

    #[test]
    fn test_utilization_from_percentages_out_of_range() {
        let util = Utilization::from_percentages(-3.0, 250.0);
        assert_eq!(util, Utilization::new(0, 100));

        let util = Utilization::from_percentages(f64::NAN, 10.0);
        assert_eq!(util.gpu, 0);
    }

    #[test]
    fn test_memory_info() {
        // 8 GB total, 2 GB used
        let mem = MemoryInfo::new(8 * 1024 * BYTES_PER_MB, 2 * 1024 * BYTES_PER_MB);
        assert_eq!(mem.total_mb(), 8192);
        assert_eq!(mem.used_mb(), 2048);
        assert_eq!(mem.free_mb(), 6144);
        assert!((mem.usage_ratio() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_memory_info_free_never_underflows() {
        let mem = MemoryInfo::new(mb_to_bytes(100), mb_to_bytes(300));
        assert_eq!(mem.free, 0);

        let mem = MemoryInfo::new(0, 0);
        assert_eq!(mem.free, 0);
        assert_eq!(mem.usage_ratio(), 0.0);
    }

    #[test]
    fn test_mb_to_bytes() {
        assert_eq!(mb_to_bytes(1), 1_048_576);
        assert_eq!(mb_to_bytes(u64::MAX), u64::MAX);
    }
}
