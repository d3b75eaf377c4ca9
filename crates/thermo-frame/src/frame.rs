//! Notification frame parsing
//!
//! Frame layout (fixed, reproduced bit-exactly for sensor compatibility):
//!
//! ```text
//! byte 0      flags: bit 0 = Fahrenheit, bit 1 = timestamp block present
//! bytes 1-4   little-endian 32-bit word:
//!               top 8 bits  = signed exponent (two's complement)
//!               low 24 bits = signed mantissa
//!               value = mantissa * 10^exponent
//! bytes 5-11  (only when flag bit 1 set) year:u16 LE, month, day,
//!             hour, minute, second
//! ```
//!
//! This 8-bit-exponent / 24-bit-mantissa split is a simplification of the
//! real IEEE-11073 FLOAT formats. The deployed sensors speak exactly this
//! layout, so it is kept as-is rather than widened toward the standard.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{TempUnit, TemperatureReading};

/// Minimum decodable frame: flag byte plus the 4-byte value word
pub const MIN_FRAME_LEN: usize = 5;

/// Frame length required for the full timestamp block
pub const TIMESTAMPED_FRAME_LEN: usize = 12;

const FLAG_FAHRENHEIT: u8 = 0b0000_0001;
const FLAG_TIMESTAMP: u8 = 0b0000_0010;

/// Mantissa pattern meaning "sensor not on skin". The comparison masks off
/// the sign bit so the all-ones raw pattern 0xFFFFFF is treated as the same
/// off-body marker.
const OFF_BODY_MANTISSA: u32 = 0x7F_FFFF;

/// Parses one wearable-sensor notification payload
///
/// Decoding is pure and side-effect free. "No reading" is an expected,
/// frequent outcome (sensor off body, truncated notification) and is
/// signalled by `None`, never by an error.
pub struct SensorFrameDecoder;

impl SensorFrameDecoder {
    /// Decode one notification frame into a temperature reading.
    ///
    /// Returns `None` when the frame is shorter than [`MIN_FRAME_LEN`],
    /// when the mantissa carries the off-body sentinel, or when the
    /// decoded magnitude is not finite.
    ///
    /// A malformed or truncated timestamp block does NOT invalidate the
    /// reading: the temperature is returned with `timestamp = None`.
    pub fn decode(frame: &[u8]) -> Option<TemperatureReading> {
        if frame.len() < MIN_FRAME_LEN {
            return None;
        }

        let flags = frame[0];
        let word = u32::from_le_bytes([frame[1], frame[2], frame[3], frame[4]]);

        let mantissa_raw = word & 0x00FF_FFFF;
        if mantissa_raw & OFF_BODY_MANTISSA == OFF_BODY_MANTISSA {
            return None;
        }

        // Sign-extend the 24-bit mantissa and the 8-bit exponent.
        let mantissa = ((mantissa_raw << 8) as i32) >> 8;
        let exponent = (word >> 24) as u8 as i8;

        let value = mantissa as f64 * 10f64.powi(exponent as i32);
        if !value.is_finite() {
            return None;
        }

        let unit = if flags & FLAG_FAHRENHEIT != 0 {
            TempUnit::Fahrenheit
        } else {
            TempUnit::Celsius
        };

        let timestamp = if flags & FLAG_TIMESTAMP != 0 {
            Self::decode_timestamp(frame)
        } else {
            None
        };

        Some(TemperatureReading {
            value,
            unit,
            timestamp,
        })
    }

    /// Assemble the trailing timestamp block, if enough bytes remain and
    /// the calendar fields are valid.
    fn decode_timestamp(frame: &[u8]) -> Option<chrono::DateTime<Utc>> {
        if frame.len() < TIMESTAMPED_FRAME_LEN {
            return None;
        }

        let year = u16::from_le_bytes([frame[5], frame[6]]);
        let month = frame[7];
        let day = frame[8];
        let hour = frame[9];
        let minute = frame[10];
        let second = frame[11];

        let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?;
        let naive = date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))?;
        Some(Utc.from_utc_datetime(&naive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    /// Build a frame from flag byte, exponent and raw 24-bit mantissa.
    fn frame(flags: u8, exponent: i8, mantissa: i32) -> Vec<u8> {
        let word = ((exponent as u8 as u32) << 24) | (mantissa as u32 & 0x00FF_FFFF);
        let mut bytes = vec![flags];
        bytes.extend_from_slice(&word.to_le_bytes());
        bytes
    }

    #[test]
    fn decodes_celsius_without_timestamp() {
        // 3650 * 10^-2 = 36.50
        let r = SensorFrameDecoder::decode(&frame(0x00, -2, 3650)).unwrap();
        assert_eq!(r.unit, TempUnit::Celsius);
        assert!((r.value - 36.50).abs() < 1e-9);
        assert!(r.timestamp.is_none());
    }

    #[test]
    fn decodes_fahrenheit_flag() {
        // 9860 * 10^-2 = 98.60
        let r = SensorFrameDecoder::decode(&frame(0x01, -2, 9860)).unwrap();
        assert_eq!(r.unit, TempUnit::Fahrenheit);
        assert!((r.value - 98.60).abs() < 1e-9);
    }

    #[test]
    fn decodes_negative_mantissa() {
        let r = SensorFrameDecoder::decode(&frame(0x00, 0, -40)).unwrap();
        assert!((r.value + 40.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_short_frames() {
        assert!(SensorFrameDecoder::decode(&[]).is_none());
        assert!(SensorFrameDecoder::decode(&[0x00]).is_none());
        assert!(SensorFrameDecoder::decode(&[0x00, 0x42, 0x0E, 0x00]).is_none());
    }

    #[test]
    fn rejects_off_body_sentinel() {
        // Reserved 0x7FFFFF pattern, any exponent, any flags.
        assert!(SensorFrameDecoder::decode(&frame(0x00, -2, 0x7F_FFFF)).is_none());
        assert!(SensorFrameDecoder::decode(&frame(0x03, 5, 0x7F_FFFF)).is_none());
        // All-ones mantissa bytes carry the same marker.
        let raw = [0x00, 0xFF, 0xFF, 0xFF, 0xFE];
        assert!(SensorFrameDecoder::decode(&raw).is_none());
    }

    #[test]
    fn rejects_non_finite_magnitude() {
        // Largest positive mantissa with the maximum exponent overflows f64.
        assert!(SensorFrameDecoder::decode(&frame(0x00, 127, 0x7F_FFFE)).is_none());
    }

    #[test]
    fn decodes_full_timestamp_block() {
        let mut bytes = frame(0x03, -2, 9920);
        bytes.extend_from_slice(&2025u16.to_le_bytes());
        bytes.extend_from_slice(&[11, 3, 14, 30, 5]);

        let r = SensorFrameDecoder::decode(&bytes).unwrap();
        assert_eq!(r.unit, TempUnit::Fahrenheit);
        let ts = r.timestamp.unwrap();
        assert_eq!(
            (ts.year(), ts.month(), ts.day()),
            (2025, 11, 3)
        );
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (14, 30, 5));
    }

    #[test]
    fn truncated_timestamp_degrades_to_none() {
        // Timestamp flag set but only 3 trailing bytes.
        let mut bytes = frame(0x02, -2, 3705);
        bytes.extend_from_slice(&[0xE9, 0x07, 11]);

        let r = SensorFrameDecoder::decode(&bytes).unwrap();
        assert!((r.value - 37.05).abs() < 1e-9);
        assert!(r.timestamp.is_none());
    }

    #[test]
    fn invalid_calendar_degrades_to_none() {
        // Month 13 is not a real month; temperature still decodes.
        let mut bytes = frame(0x02, -2, 3705);
        bytes.extend_from_slice(&2025u16.to_le_bytes());
        bytes.extend_from_slice(&[13, 1, 0, 0, 0]);

        let r = SensorFrameDecoder::decode(&bytes).unwrap();
        assert!((r.value - 37.05).abs() < 1e-9);
        assert!(r.timestamp.is_none());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any mantissa/exponent pair inside the representable range
            /// round-trips through the wire encoding.
            #[test]
            fn value_round_trip(
                mantissa in -0x40_0000i32..0x40_0000i32,
                exponent in -8i8..8i8,
                fahrenheit: bool,
            ) {
                prop_assume!(mantissa as u32 & 0x7F_FFFF != 0x7F_FFFF);
                let flags = u8::from(fahrenheit);
                let bytes = frame(flags, exponent, mantissa);
                let r = SensorFrameDecoder::decode(&bytes).unwrap();

                let expected = mantissa as f64 * 10f64.powi(exponent as i32);
                prop_assert!((r.value - expected).abs() <= expected.abs() * 1e-12);
                prop_assert_eq!(
                    r.unit,
                    if fahrenheit { TempUnit::Fahrenheit } else { TempUnit::Celsius }
                );
            }

            /// Decode never panics, whatever the bytes.
            #[test]
            fn decode_total(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
                let _ = SensorFrameDecoder::decode(&bytes);
            }
        }
    }
}
