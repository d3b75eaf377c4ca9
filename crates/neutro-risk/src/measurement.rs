//! Typed patient measurements
//!
//! A closed set of measurement kinds, each with its own payload and
//! validator. There is deliberately no string-keyed dispatch on
//! measurement names anywhere: an unknown kind is a compile error, not a
//! silently skipped `default` branch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Plausible systolic blood pressure, mmHg
const SYSTOLIC_RANGE: (f64, f64) = (50.0, 260.0);

/// Plausible diastolic blood pressure, mmHg
const DIASTOLIC_RANGE: (f64, f64) = (20.0, 200.0);

/// Plausible resting-to-peak heart rate, bpm
const HEART_RATE_RANGE: (f64, f64) = (20.0, 300.0);

/// Patient-reported symptom severity scale
const SEVERITY_MAX: u8 = 10;

/// One measurement kind with its typed payload
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Body temperature. Not range-limited: implausible sensor values are
    /// allowed through and left to the classification layers.
    Temperature { degrees_f: f64 },
    HeartRate { bpm: f64 },
    BloodPressure { systolic: f64, diastolic: f64 },
    OxygenSaturation { percent: f64 },
    /// Patient-reported severity, 0-10
    SymptomSeverity { score: u8 },
}

impl Measurement {
    /// Per-kind payload validation
    fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Measurement::Temperature { degrees_f } => {
                if !degrees_f.is_finite() {
                    return Err(ValidationError::NotFinite {
                        field: "temperature",
                    });
                }
                Ok(())
            }
            Measurement::HeartRate { bpm } => ValidationError::check_range(
                "heart rate",
                bpm,
                HEART_RATE_RANGE.0,
                HEART_RATE_RANGE.1,
            ),
            Measurement::BloodPressure {
                systolic,
                diastolic,
            } => {
                ValidationError::check_range(
                    "systolic pressure",
                    systolic,
                    SYSTOLIC_RANGE.0,
                    SYSTOLIC_RANGE.1,
                )?;
                ValidationError::check_range(
                    "diastolic pressure",
                    diastolic,
                    DIASTOLIC_RANGE.0,
                    DIASTOLIC_RANGE.1,
                )
            }
            Measurement::OxygenSaturation { percent } => {
                ValidationError::check_percentage("oxygen saturation", percent)
            }
            Measurement::SymptomSeverity { score } => {
                if score > SEVERITY_MAX {
                    return Err(ValidationError::OutOfRange {
                        field: "symptom severity",
                        value: f64::from(score),
                        min: 0.0,
                        max: f64::from(SEVERITY_MAX),
                    });
                }
                Ok(())
            }
        }
    }
}

/// A dated, validated measurement entry.
///
/// Validation runs in the constructor: a future capture time or an
/// out-of-range payload is rejected before the record exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedMeasurement {
    measurement: Measurement,
    taken_at: DateTime<Utc>,
}

impl RecordedMeasurement {
    pub fn new(
        measurement: Measurement,
        taken_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self::new_as_of(measurement, taken_at, Utc::now())
    }

    /// Same as [`RecordedMeasurement::new`] with an explicit "now" for
    /// the future-date check.
    pub fn new_as_of(
        measurement: Measurement,
        taken_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if taken_at > now {
            return Err(ValidationError::FutureDate {
                date: taken_at.date_naive(),
            });
        }
        measurement.validate()?;
        Ok(RecordedMeasurement {
            measurement,
            taken_at,
        })
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}
