//! Best-effort readings
//!
//! A metric read that fails still yields a value (the type's default,
//! i.e. zero), but the reading remembers that it was not measured.

use serde::{Serialize, Serializer};

/// A value that may have been substituted for a failed read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading<T> {
    value: T,
    available: bool,
}

impl<T> Reading<T> {
    /// A value that was actually read from the device
    pub fn measured(value: T) -> Self {
        Self {
            value,
            available: true,
        }
    }

    /// A stand-in value for a read that failed
    pub fn substituted(value: T) -> Self {
        Self {
            value,
            available: false,
        }
    }

    /// True if the value came from the device
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// The value, whether measured or substituted
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the reading, keeping only the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// `Some(value)` if measured, `None` otherwise
    pub fn measured_value(self) -> Option<T> {
        self.available.then_some(self.value)
    }

    /// Transform the value, keeping availability
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        Reading {
            value: f(self.value),
            available: self.available,
        }
    }
}

impl<T: Default> Reading<T> {
    /// The zero value standing in for a failed read
    pub fn unavailable() -> Self {
        Self::substituted(T::default())
    }

    /// Build from an optional value
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::unavailable, Self::measured)
    }
}

impl<T: Default> Default for Reading<T> {
    fn default() -> Self {
        Self::unavailable()
    }
}

// Unavailable readings serialize as null so JSON consumers can tell them apart.
impl<T: Serialize> Serialize for Reading<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.available {
            serializer.serialize_some(&self.value)
        } else {
            serializer.serialize_none()
        }
    }
}
