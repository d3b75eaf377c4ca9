//! Absolute Neutrophil Count computation and severity bands

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::labs::{LabPanel, LabTest};

/// ANC at or above this is considered normal (cells/µL)
pub const ANC_NORMAL_FLOOR: f64 = 500.0;

/// ANC at or above this (but below normal) is severe neutropenia
pub const ANC_SEVERE_FLOOR: f64 = 100.0;

/// Neutropenia severity band, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AncCategory {
    /// ANC >= 500
    Normal,
    /// 100 <= ANC < 500
    Severe,
    /// ANC < 100
    Profound,
}

impl AncCategory {
    /// Band for an ANC value, evaluated high to low with inclusive floors
    pub fn from_anc(anc: f64) -> Self {
        if anc >= ANC_NORMAL_FLOOR {
            AncCategory::Normal
        } else if anc >= ANC_SEVERE_FLOOR {
            AncCategory::Severe
        } else {
            AncCategory::Profound
        }
    }

    /// Human-readable description for display
    pub fn description(&self) -> &'static str {
        match self {
            AncCategory::Normal => "ANC within normal range",
            AncCategory::Severe => "Severe neutropenia - infection risk elevated",
            AncCategory::Profound => "Profound neutropenia - infection risk critical",
        }
    }
}

/// Computed ANC with its severity band.
///
/// Serializes to the cross-process JSON shape
/// `{"ancValue": 200.0, "category": "Severe"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AncResult {
    /// (neutrophils% / 100) x white-blood-cell count
    pub anc_value: f64,
    pub category: AncCategory,
}

/// Derives ANC from a lab panel
pub struct NeutropeniaClassifier;

impl NeutropeniaClassifier {
    /// Compute the ANC for a panel and classify it.
    ///
    /// Returns `Ok(None)` when the panel is missing either the neutrophil
    /// percentage or the white-blood-cell count — absent data is not an
    /// error at this layer. A future-dated panel cannot normally exist
    /// (the constructor rejects it), but the date guard is enforced here
    /// as well so the contract does not depend on who built the panel.
    pub fn classify(panel: &LabPanel) -> Result<Option<AncResult>, ValidationError> {
        if panel.date() > chrono::Utc::now().date_naive() {
            return Err(ValidationError::FutureDate { date: panel.date() });
        }

        let neutrophils_pct = panel.value(LabTest::NeutrophilsPct);
        let wbc = panel.value(LabTest::WhiteBloodCellCount);

        Ok(neutrophils_pct.zip(wbc).map(|(pct, wbc)| {
            let anc_value = (pct / 100.0) * wbc;
            AncResult {
                anc_value,
                category: AncCategory::from_anc(anc_value),
            }
        }))
    }
}
