//! Construction-time validation errors
//!
//! All validation happens when a record is built, never during evaluation:
//! the classifiers and the composer may assume their inputs are already
//! valid. "No reading" and "no ANC computable" are expected conditions and
//! stay `Option`-shaped — they are not part of this taxonomy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for user- or collaborator-supplied records
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// A dated record claims a date after the evaluation time
    #[error("date {date} is in the future")]
    FutureDate { date: NaiveDate },

    /// A percentage-valued field outside [0, 100]
    #[error("{field} must be within 0-100%, got {value}")]
    PercentageOutOfRange { field: &'static str, value: f64 },

    /// A magnitude outside its plausible clinical range
    #[error("{field} must be within {min}-{max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A numeric field that is NaN or infinite
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    /// Validate a percentage field against [0, 100].
    pub(crate) fn check_percentage(field: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::PercentageOutOfRange { field, value });
        }
        Ok(())
    }

    /// Validate a magnitude against an inclusive range.
    pub(crate) fn check_range(
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        if !(min..=max).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            });
        }
        Ok(())
    }
}
