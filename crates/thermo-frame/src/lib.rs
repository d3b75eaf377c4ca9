//! Thermo Frame - Wearable Thermometer Wire Format
//!
//! Decodes BLE temperature-characteristic notification frames into typed
//! readings. The wire format is the simplified IEEE-11073-style float used
//! by the wearable sensor: a flag byte, a 32-bit word holding an 8-bit
//! signed exponent and a 24-bit signed mantissa, and an optional 7-byte
//! timestamp block.
//!
//! # Example
//!
//! ```rust
//! use thermo_frame::{SensorFrameDecoder, TempUnit};
//!
//! // Flags 0x00 (Celsius, no timestamp), mantissa 3650, exponent -2 => 36.50
//! let frame = [0x00, 0x42, 0x0E, 0x00, 0xFE];
//! let reading = SensorFrameDecoder::decode(&frame).unwrap();
//!
//! assert_eq!(reading.unit, TempUnit::Celsius);
//! assert!((reading.value - 36.50).abs() < 1e-9);
//! assert!(reading.timestamp.is_none());
//! ```

pub mod frame;

pub use frame::SensorFrameDecoder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Temperature scale reported by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

/// One temperature sample produced by the sensor
///
/// Constructed by [`SensorFrameDecoder`] from a successfully parsed frame
/// and immutable thereafter. The value is guaranteed finite but is NOT
/// range-checked here: a sensor may report implausible magnitudes, and it
/// is up to the classification layers to decide what is significant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Decoded magnitude, in `unit`
    pub value: f64,
    /// Scale the sensor reported in
    pub unit: TempUnit,
    /// Capture time from the frame's timestamp block, when present.
    /// When absent the caller assigns capture time on receipt.
    pub timestamp: Option<DateTime<Utc>>,
}

impl TemperatureReading {
    /// The reading expressed in degrees Fahrenheit
    pub fn degrees_fahrenheit(&self) -> f64 {
        match self.unit {
            TempUnit::Fahrenheit => self.value,
            TempUnit::Celsius => self.value * 9.0 / 5.0 + 32.0,
        }
    }

    /// The reading expressed in degrees Celsius
    pub fn degrees_celsius(&self) -> f64 {
        match self.unit {
            TempUnit::Celsius => self.value,
            TempUnit::Fahrenheit => (self.value - 32.0) * 5.0 / 9.0,
        }
    }
}
