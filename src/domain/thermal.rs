//! Thermal domain types
//!
//! Provides the temperature value and the sensor kinds accepted by
//! `device_get_temperature`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw NVML constant for the GPU core temperature sensor
pub const NVML_TEMPERATURE_GPU: u32 = 0;

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Temperature(i32);

impl Temperature {
    /// Create a new Temperature
    pub const fn new(celsius: i32) -> Self {
        Self(celsius)
    }

    /// Build from a fractional reading, truncating toward zero
    pub fn from_celsius_f64(celsius: f64) -> Self {
        // `as` saturates and maps NaN to 0
        Self(celsius.trunc() as i32)
    }

    /// Get the temperature in Celsius
    #[inline]
    pub const fn as_celsius(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl From<i32> for Temperature {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Temperature> for i32 {
    fn from(temp: Temperature) -> Self {
        temp.0
    }
}

/// Temperature sensor kinds
///
/// Only the GPU core sensor is recognized, matching `NVML_TEMPERATURE_GPU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureSensor {
    /// GPU core (edge) temperature
    #[default]
    Gpu,
}

impl TemperatureSensor {
    /// Map a raw NVML sensor constant
    pub fn from_raw(value: u32) -> Option<Self> {
        match value {
            NVML_TEMPERATURE_GPU => Some(Self::Gpu),
            _ => None,
        }
    }

    /// Raw NVML value for this sensor
    pub fn as_raw(&self) -> u32 {
        match self {
            Self::Gpu => NVML_TEMPERATURE_GPU,
        }
    }
}

impl fmt::Display for TemperatureSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu => write!(f, "GPU"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_display() {
        let temp = Temperature::new(65);
        assert_eq!(temp.to_string(), "65°C");
    }

    #[test]
    fn test_temperature_truncates() {
        assert_eq!(Temperature::from_celsius_f64(61.9).as_celsius(), 61);
        assert_eq!(Temperature::from_celsius_f64(-4.7).as_celsius(), -4);
        assert_eq!(Temperature::from_celsius_f64(f64::NAN).as_celsius(), 0);
    }

    #[test]
    fn test_sensor_from_raw() {
        assert_eq!(TemperatureSensor::from_raw(0), Some(TemperatureSensor::Gpu));
        assert_eq!(TemperatureSensor::from_raw(1), None);
        assert_eq!(TemperatureSensor::Gpu.as_raw(), NVML_TEMPERATURE_GPU);
    }
}
