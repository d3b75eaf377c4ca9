//! Fever evaluation over a rolling temperature window
//!
//! Two rules, both in Fahrenheit:
//!
//! - Rule A (acute spike): the most recent sample at or above 101.0 F is
//!   fever on its own, whatever came before it.
//! - Rule B (sustained elevation): otherwise, fever only when every sample
//!   in the window sits at or above 100.4 F. A mixed window of high and
//!   normal readings deliberately does not trigger.
//!
//! The evaluator itself is windowing- and unit-agnostic: it trusts the
//! caller to hand it the last hour of samples, newest first, already in
//! Fahrenheit. [`FeverMonitor`] is the caller-owned object that does that
//! windowing over an injected sample source.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thermo_frame::TemperatureReading;

/// A single fever-triggering reading: 101.0 F or above
pub const ACUTE_SPIKE_F: f64 = 101.0;

/// Sustained-elevation floor: every sample at 100.4 F or above
pub const SUSTAINED_ELEVATION_F: f64 = 100.4;

/// Width of the evaluation window
pub const FEVER_WINDOW_MINUTES: i64 = 60;

/// One normalized temperature sample, in Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub degrees_f: f64,
    pub taken_at: DateTime<Utc>,
}

impl TemperatureSample {
    pub fn new(degrees_f: f64, taken_at: DateTime<Utc>) -> Self {
        TemperatureSample { degrees_f, taken_at }
    }

    /// Normalize a decoded sensor reading, using `received_at` when the
    /// frame carried no timestamp.
    pub fn from_reading(reading: &TemperatureReading, received_at: DateTime<Utc>) -> Self {
        TemperatureSample {
            degrees_f: reading.degrees_fahrenheit(),
            taken_at: reading.timestamp.unwrap_or(received_at),
        }
    }
}

/// Fever verdict for one evaluation pass.
///
/// Serializes to the cross-process JSON shape `{"isFever": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeverVerdict {
    pub is_fever: bool,
}

/// Applies the two-rule fever policy to a pre-filtered window
pub struct FeverEvaluator;

impl FeverEvaluator {
    /// Classify a window of samples ordered newest first.
    ///
    /// An empty window returns `false` — no data asserts no fever.
    pub fn evaluate(samples: &[TemperatureSample]) -> bool {
        let Some(latest) = samples.first() else {
            return false;
        };

        if latest.degrees_f >= ACUTE_SPIKE_F {
            return true;
        }

        samples.iter().all(|s| s.degrees_f >= SUSTAINED_ELEVATION_F)
    }

    /// [`FeverEvaluator::evaluate`] wrapped in the verdict type
    pub fn verdict(samples: &[TemperatureSample]) -> FeverVerdict {
        FeverVerdict {
            is_fever: Self::evaluate(samples),
        }
    }
}

/// Source of temperature samples, injected into [`FeverMonitor`].
///
/// Real implementations sit in the host application (the health-data
/// store, the live sensor stream); tests use an in-memory mock.
pub trait SampleFetcher {
    /// Samples captured at or after `cutoff`, in any order
    fn samples_since(&self, cutoff: DateTime<Utc>) -> Vec<TemperatureSample>;
}

/// Caller-owned fever monitor.
///
/// Owns no global state: construct one per host application with whatever
/// sample source it uses, and call [`FeverMonitor::check`] on each risk
/// evaluation.
pub struct FeverMonitor<F: SampleFetcher> {
    fetcher: F,
    window: Duration,
}

impl<F: SampleFetcher> FeverMonitor<F> {
    /// Monitor with the standard one-hour window
    pub fn new(fetcher: F) -> Self {
        FeverMonitor {
            fetcher,
            window: Duration::minutes(FEVER_WINDOW_MINUTES),
        }
    }

    /// Fetch the window ending at `now` and evaluate it.
    ///
    /// Samples outside the window are dropped even if the fetcher returns
    /// them, and the remainder is ordered newest first before the rules
    /// run.
    pub fn check(&self, now: DateTime<Utc>) -> FeverVerdict {
        let cutoff = now - self.window;
        let mut samples = self.fetcher.samples_since(cutoff);
        samples.retain(|s| s.taken_at >= cutoff && s.taken_at <= now);
        samples.sort_by_key(|s| std::cmp::Reverse(s.taken_at));
        FeverEvaluator::verdict(&samples)
    }
}
