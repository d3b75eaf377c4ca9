//! Composite risk assessment and episode alerting
//!
//! Combines the fever verdict with the ANC band into one clinical
//! decision. Febrile neutropenia (fever together with any abnormal ANC)
//! opens an alert episode; within an episode exactly one alert message is
//! emitted, however many times the condition is re-evaluated. Only an
//! explicit [`RiskComposer::reset`] closes the episode — resolution of
//! the underlying signals does not.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::anc::AncCategory;

/// Composite clinical assessment for one evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAssessment {
    /// Fever together with abnormal ANC — the alerting condition
    FebrileNeutropenia,
    /// Fever with a normal ANC
    Fever,
    /// Abnormal ANC without fever
    Neutropenia(AncCategory),
    /// Neither signal present
    NoRisk,
    /// No ANC data available; distinct from "no risk"
    InsufficientData,
}

impl RiskAssessment {
    /// Display label for the UI layer
    pub fn label(&self) -> &'static str {
        match self {
            RiskAssessment::FebrileNeutropenia => "Febrile Neutropenia",
            RiskAssessment::Fever => "Fever",
            RiskAssessment::Neutropenia(AncCategory::Severe) => "Severe neutropenia",
            RiskAssessment::Neutropenia(AncCategory::Profound) => "Profound neutropenia",
            RiskAssessment::Neutropenia(AncCategory::Normal) => "Neutropenia",
            RiskAssessment::NoRisk => "No fever detected",
            RiskAssessment::InsufficientData => "Insufficient data",
        }
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text handed to the external notification collaborator. The core
/// decides whether and what to say; the host builds the platform
/// notification object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
}

impl AlertMessage {
    fn febrile_neutropenia(category: AncCategory) -> Self {
        let body = match category {
            AncCategory::Profound => {
                "Fever detected with profound neutropenia (ANC below 100). \
                 Contact your care team immediately."
            }
            _ => {
                "Fever detected with severe neutropenia (ANC below 500). \
                 Contact your care team immediately."
            }
        };
        AlertMessage {
            title: "Febrile Neutropenia Risk".to_string(),
            body: body.to_string(),
        }
    }
}

/// Result of one composer evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct RiskOutcome {
    pub assessment: RiskAssessment,
    /// Present only on the Quiet -> Alerted transition
    pub alert: Option<AlertMessage>,
}

/// Episode alert flag, guarded by the composer's mutex
#[derive(Debug, Default)]
struct AlertState {
    episode_alert_sent: bool,
}

/// Combines verdicts and de-duplicates alerting.
///
/// The check-and-transition runs inside one critical section, so two
/// evaluators racing on the same composer (a fresh sensor sample and a
/// periodic refresh asking at the same time) cannot both observe a quiet
/// episode and both fire.
pub struct RiskComposer {
    state: Mutex<AlertState>,
}

impl RiskComposer {
    /// Composer with no open episode
    pub fn new() -> Self {
        RiskComposer {
            state: Mutex::new(AlertState::default()),
        }
    }

    /// Combine the fever verdict with the ANC band.
    ///
    /// `anc_category = None` means no lab data is available: the outcome
    /// is [`RiskAssessment::InsufficientData`] and the episode state is
    /// left untouched.
    pub fn evaluate(&self, is_fever: bool, anc_category: Option<AncCategory>) -> RiskOutcome {
        let Some(category) = anc_category else {
            return RiskOutcome {
                assessment: RiskAssessment::InsufficientData,
                alert: None,
            };
        };

        let assessment = match (is_fever, category) {
            (true, AncCategory::Normal) => RiskAssessment::Fever,
            (true, _) => RiskAssessment::FebrileNeutropenia,
            (false, AncCategory::Normal) => RiskAssessment::NoRisk,
            (false, _) => RiskAssessment::Neutropenia(category),
        };

        let alert = if assessment == RiskAssessment::FebrileNeutropenia {
            let mut state = self.state.lock().expect("alert state poisoned");
            if state.episode_alert_sent {
                None
            } else {
                state.episode_alert_sent = true;
                Some(AlertMessage::febrile_neutropenia(category))
            }
        } else {
            None
        };

        RiskOutcome { assessment, alert }
    }

    /// Whether the current episode has already been notified
    pub fn episode_alerted(&self) -> bool {
        self.state.lock().expect("alert state poisoned").episode_alert_sent
    }

    /// Close the episode. This is the only way the alerted flag clears;
    /// it is an explicit care-team or patient acknowledgement action,
    /// never a side effect of the signals normalizing.
    pub fn reset(&self) {
        self.state.lock().expect("alert state poisoned").episode_alert_sent = false;
    }
}

impl Default for RiskComposer {
    fn default() -> Self {
        Self::new()
    }
}
