//! Neutro Risk - Febrile Neutropenia Decision Core
//!
//! Deterministic clinical rules for monitoring chemotherapy-induced
//! febrile neutropenia risk:
//!
//! - Fever evaluation over a rolling window of temperature samples
//! - Absolute Neutrophil Count (ANC) from lab percentages, with severity bands
//! - Composite risk assessment with at-most-once alerting per episode
//! - Typed, validated measurement and lab-panel records
//!
//! The core performs no I/O, scheduling, storage, or UI work. The host
//! application feeds it sensor readings (see the `thermo-frame` crate) and
//! lab panels, and reacts to the verdicts it returns.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use neutro_risk::{
//!     AncCategory, FeverEvaluator, LabPanel, LabTest, NeutropeniaClassifier,
//!     RiskAssessment, RiskComposer, TemperatureSample,
//! };
//!
//! let samples = vec![TemperatureSample::new(101.5, Utc::now())];
//! let fever = FeverEvaluator::evaluate(&samples);
//!
//! let panel = LabPanel::new(
//!     Utc::now().date_naive(),
//!     [(LabTest::WhiteBloodCellCount, 4000.0), (LabTest::NeutrophilsPct, 5.0)],
//! )?;
//! let anc = NeutropeniaClassifier::classify(&panel)?.unwrap();
//! assert_eq!(anc.category, AncCategory::Severe);
//!
//! let composer = RiskComposer::new();
//! let outcome = composer.evaluate(fever, Some(anc.category));
//! assert_eq!(outcome.assessment, RiskAssessment::FebrileNeutropenia);
//! assert!(outcome.alert.is_some());
//! # Ok::<(), neutro_risk::ValidationError>(())
//! ```

pub mod anc;
pub mod error;
pub mod fever;
pub mod labs;
pub mod measurement;
pub mod risk;

pub use anc::{AncCategory, AncResult, NeutropeniaClassifier};
pub use error::ValidationError;
pub use fever::{FeverEvaluator, FeverMonitor, FeverVerdict, SampleFetcher, TemperatureSample};
pub use labs::{LabPanel, LabTest};
pub use measurement::{Measurement, RecordedMeasurement};
pub use risk::{AlertMessage, RiskAssessment, RiskComposer, RiskOutcome};
