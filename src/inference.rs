//! Inference over a single fitted (classifier, scaler) pair.
//!
//! The service holds exactly one immutable `FittedState`, installed once
//! after training and read by every subsequent call. There is no retrain
//! path; a call arriving before installation fails fast with `NotReady`
//! instead of blocking or returning a placeholder.

use std::sync::{Arc, OnceLock};

use crate::data_handling::validate_feature_ranges;
use crate::error::ModelError;
use crate::models::LinearSvm;
use crate::preprocessing::Scaler;

/// Immutable output of a training run, shared read-only across all
/// concurrent inference calls.
#[derive(Debug, Clone)]
pub struct FittedState {
    pub model: LinearSvm,
    pub scaler: Scaler,
}

/// Screening outcome for one applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Hired,
    NotHired,
}

impl Decision {
    /// Map the raw classifier output. Label 1 means *rejected*; keep this
    /// direction exact, it is easy to flip by accident.
    pub fn from_raw_label(label: i32) -> Self {
        if label == 1 {
            Decision::NotHired
        } else {
            Decision::Hired
        }
    }

    /// Boundary wording: "hired" / "not hired".
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Hired => "hired",
            Decision::NotHired => "not hired",
        }
    }
}

/// One inference result. The confidence is recomputed from the decision
/// value on every call, never cached.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    pub decision: Decision,
    /// Heuristic confidence in (0, 1); see [`confidence_from_decision_value`].
    pub confidence: f64,
    /// Raw signed margin, kept for diagnostics and plotting.
    pub decision_value: f64,
}

/// Sigmoid of the absolute decision value: `1 / (1 + exp(-|d|))`.
///
/// Maps "far from the boundary" to values near 1 and "on the boundary" to
/// 0.5, regardless of which side the sample falls on. This is a heuristic
/// score, not a calibrated class probability; it deliberately conflates
/// direction, reporting only how far the sample sits from the boundary.
///
/// The result is clamped strictly below 1: for |d| beyond ~36.7 the
/// `exp(-|d|)` term underflows relative to 1 and the raw sigmoid rounds to
/// exactly 1.0, but the confidence contract is the open interval (0, 1).
pub fn confidence_from_decision_value(d: f64) -> f64 {
    (1.0 / (1.0 + (-d.abs()).exp())).min(1.0 - f64::EPSILON)
}

/// Write-once holder for the fitted state.
///
/// Constructed empty, installed exactly once during startup, and read
/// thereafter. The state lives behind an `Arc`, so any future retrain
/// support would swap a new immutable state in rather than mutate this one.
#[derive(Debug, Default)]
pub struct InferenceService {
    state: OnceLock<Arc<FittedState>>,
}

impl InferenceService {
    /// Create a service with no fitted state; `predict_one` fails with
    /// `NotReady` until [`install`](Self::install) is called.
    pub fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Install the fitted state. Returns `InvalidArgument` if a state was
    /// already installed; there is no retrain operation in scope.
    pub fn install(&self, state: FittedState) -> Result<(), ModelError> {
        self.state
            .set(Arc::new(state))
            .map_err(|_| ModelError::InvalidArgument("fitted state already installed".to_string()))
    }

    pub fn is_ready(&self) -> bool {
        self.state.get().is_some()
    }

    /// Classify one applicant from raw (unscaled) features.
    ///
    /// Validates the ranges, scales with the held training-time statistics,
    /// thresholds the decision value, and derives the confidence from its
    /// magnitude. All-or-nothing: any failure yields an error, never a
    /// partial result.
    ///
    /// # Arguments
    ///
    /// * `experience_years` - Raw feature in [0, 10].
    /// * `technical_score` - Raw feature in [0, 100].
    pub fn predict_one(
        &self,
        experience_years: f64,
        technical_score: f64,
    ) -> Result<Prediction, ModelError> {
        let state = self.state.get().ok_or(ModelError::NotReady)?;

        // Guard against invalid scaling input when the core is called
        // directly, even though the boundary validates the same ranges.
        validate_feature_ranges(experience_years, technical_score)?;

        let scaled = state
            .scaler
            .transform_sample(&[experience_years, technical_score])?;
        let decision_value = state.model.decision_value(&scaled)?;
        let raw_label = state.model.predict(&scaled)?;

        let prediction = Prediction {
            decision: Decision::from_raw_label(raw_label),
            confidence: confidence_from_decision_value(decision_value),
            decision_value,
        };

        log::debug!(
            "predict_one({:.2}, {:.2}) -> {} (confidence {:.3}, d {:.3})",
            experience_years,
            technical_score,
            prediction.decision.as_str(),
            prediction.confidence,
            prediction.decision_value
        );

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_bounded_and_centered() {
        for d in [-50.0, -3.0, -0.5, 0.0, 0.5, 3.0, 50.0] {
            let c = confidence_from_decision_value(d);
            assert!(c > 0.0 && c < 1.0, "confidence out of bounds for d={}", d);
            assert!(c >= 0.5, "|d| sigmoid should never drop below 0.5");
        }
        assert!((confidence_from_decision_value(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn confidence_stays_below_one_at_saturating_magnitudes() {
        // Past |d| ~ 36.7 the raw sigmoid rounds to exactly 1.0; the clamp
        // keeps the contract's open upper bound.
        for d in [36.8, 40.0, 50.0, 1e6, f64::MAX] {
            let c = confidence_from_decision_value(d);
            assert!(c < 1.0, "confidence saturated to 1.0 for d={}", d);
            assert!(c > 0.0);
        }
    }

    #[test]
    fn confidence_is_monotone_in_magnitude() {
        let mut prev = 0.0;
        for i in 0..100 {
            let c = confidence_from_decision_value(i as f64 * 0.1);
            assert!(c >= prev);
            prev = c;
        }
        // Symmetric in sign: only the magnitude matters.
        assert_eq!(
            confidence_from_decision_value(-2.5),
            confidence_from_decision_value(2.5)
        );
    }

    #[test]
    fn raw_label_mapping_is_not_inverted() {
        assert_eq!(Decision::from_raw_label(1), Decision::NotHired);
        assert_eq!(Decision::from_raw_label(0), Decision::Hired);
        assert_eq!(Decision::NotHired.as_str(), "not hired");
        assert_eq!(Decision::Hired.as_str(), "hired");
    }

    #[test]
    fn predict_before_install_is_not_ready() {
        let service = InferenceService::new();
        let err = service.predict_one(5.0, 50.0).unwrap_err();
        assert_eq!(err, ModelError::NotReady);
    }

    #[test]
    fn install_twice_is_rejected() {
        use crate::config::PipelineConfig;
        use crate::pipeline::train_pipeline;

        let outcome = train_pipeline(&PipelineConfig::default()).unwrap();
        let service = InferenceService::new();
        service
            .install(FittedState {
                model: outcome.model.clone(),
                scaler: outcome.scaler.clone(),
            })
            .unwrap();
        let err = service
            .install(FittedState {
                model: outcome.model,
                scaler: outcome.scaler,
            })
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument(_)));
    }

    #[test]
    fn out_of_range_features_are_rejected() {
        use crate::config::PipelineConfig;
        use crate::pipeline::train_pipeline;

        let outcome = train_pipeline(&PipelineConfig::default()).unwrap();
        let service = InferenceService::new();
        service
            .install(FittedState {
                model: outcome.model,
                scaler: outcome.scaler,
            })
            .unwrap();

        for (exp, score) in [(-0.1, 50.0), (10.1, 50.0), (5.0, -1.0), (5.0, 100.5)] {
            let err = service.predict_one(exp, score).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidArgument(_)),
                "({}, {}) should be out of range",
                exp,
                score
            );
        }
        assert!(service.predict_one(f64::NAN, 50.0).is_err());
    }
}
