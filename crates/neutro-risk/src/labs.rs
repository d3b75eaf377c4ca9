//! Lab panel records
//!
//! One [`LabPanel`] is created per recorded blood draw. Validation happens
//! in the constructor: a future draw date or an out-of-range percentage is
//! rejected before the panel can exist, so downstream classification never
//! re-validates individual values.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Blood tests a panel may carry. Closed set — there is no free-text test
/// name anywhere in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LabTest {
    WhiteBloodCellCount,
    NeutrophilsPct,
    Hemoglobin,
    Platelets,
    LymphocytesPct,
    MonocytesPct,
    EosinophilsPct,
    BasophilsPct,
    BlastsPct,
}

impl LabTest {
    /// Whether results for this test are percentages of the differential
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            LabTest::NeutrophilsPct
                | LabTest::LymphocytesPct
                | LabTest::MonocytesPct
                | LabTest::EosinophilsPct
                | LabTest::BasophilsPct
                | LabTest::BlastsPct
        )
    }

    /// Display name used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            LabTest::WhiteBloodCellCount => "white blood cell count",
            LabTest::NeutrophilsPct => "neutrophils",
            LabTest::Hemoglobin => "hemoglobin",
            LabTest::Platelets => "platelets",
            LabTest::LymphocytesPct => "lymphocytes",
            LabTest::MonocytesPct => "monocytes",
            LabTest::EosinophilsPct => "eosinophils",
            LabTest::BasophilsPct => "basophils",
            LabTest::BlastsPct => "blasts",
        }
    }
}

/// One recorded blood draw. Immutable once constructed; not every test
/// needs to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    date: NaiveDate,
    values: BTreeMap<LabTest, f64>,
}

impl LabPanel {
    /// Build a panel, validating every value.
    ///
    /// Fails with [`ValidationError::FutureDate`] when `date` is after
    /// today, [`ValidationError::PercentageOutOfRange`] when a
    /// percentage-valued test lies outside [0, 100], and
    /// [`ValidationError::OutOfRange`] when a count is negative.
    pub fn new(
        date: NaiveDate,
        values: impl IntoIterator<Item = (LabTest, f64)>,
    ) -> Result<Self, ValidationError> {
        Self::new_as_of(date, values, Utc::now().date_naive())
    }

    /// Same as [`LabPanel::new`] with an explicit "today" for the
    /// future-date check.
    pub fn new_as_of(
        date: NaiveDate,
        values: impl IntoIterator<Item = (LabTest, f64)>,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if date > today {
            return Err(ValidationError::FutureDate { date });
        }

        let values: BTreeMap<LabTest, f64> = values.into_iter().collect();
        for (test, &value) in &values {
            if test.is_percentage() {
                ValidationError::check_percentage(test.name(), value)?;
            } else {
                ValidationError::check_range(test.name(), value, 0.0, f64::MAX)?;
            }
        }

        Ok(LabPanel { date, values })
    }

    /// Calendar date of the draw
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Result for one test, if recorded
    pub fn value(&self, test: LabTest) -> Option<f64> {
        self.values.get(&test).copied()
    }

    /// All recorded results, ordered by test
    pub fn values(&self) -> impl Iterator<Item = (LabTest, f64)> + '_ {
        self.values.iter().map(|(t, v)| (*t, *v))
    }
}
