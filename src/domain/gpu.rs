//! Device handle domain type
//!
//! Provides the lightweight handle returned by `device_get_handle_by_index`.

use serde::Serialize;
use std::fmt;

/// Handle to a GPU, mirroring `nvmlDevice_t`
///
/// The handle holds no reference to the vendor's native device object,
/// only the index and the name read when it was created. It is tied to
/// the init cycle of the adapter that produced it and is rejected once
/// that adapter has been shut down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceHandle {
    index: u32,
    name: String,
    #[serde(skip)]
    generation: u64,
}

impl DeviceHandle {
    pub(crate) fn new(index: u32, name: String, generation: u64) -> Self {
        Self {
            index,
            name,
            generation,
        }
    }

    /// GPU index (0-based)
    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Display name captured when the handle was created
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.index, self.name)
    }
}
