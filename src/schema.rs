//! Boundary request/response contract.
//!
//! The HTTP layer itself is out of scope, but its schema is fixed here so
//! the core is only ever invoked with an already-validated, typed value.
//! Range validation happens at this boundary before `predict_one` runs;
//! the core repeats the same guard in case it is called directly.

use serde::{Deserialize, Serialize};

use crate::data_handling::validate_feature_ranges;
use crate::error::ModelError;
use crate::inference::Prediction;

/// Incoming request body: `{"experience_years": .., "technical_score": ..}`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ApplicantRequest {
    pub experience_years: f64,
    pub technical_score: f64,
}

/// An applicant whose features have passed range validation. The only way
/// to obtain one is through [`ApplicantRequest::validate`].
#[derive(Debug, Clone, Copy)]
pub struct ValidatedApplicant {
    experience_years: f64,
    technical_score: f64,
}

impl ValidatedApplicant {
    pub fn experience_years(&self) -> f64 {
        self.experience_years
    }

    pub fn technical_score(&self) -> f64 {
        self.technical_score
    }
}

impl ApplicantRequest {
    /// Parse a request from its JSON wire form.
    pub fn from_json(body: &str) -> Result<Self, ModelError> {
        serde_json::from_str(body)
            .map_err(|e| ModelError::InvalidArgument(format!("malformed request body: {}", e)))
    }

    /// Check both features against their declared ranges.
    pub fn validate(&self) -> Result<ValidatedApplicant, ModelError> {
        validate_feature_ranges(self.experience_years, self.technical_score)?;
        Ok(ValidatedApplicant {
            experience_years: self.experience_years,
            technical_score: self.technical_score,
        })
    }
}

/// Success response body: `{"result": "hired" | "not hired", "confidence": ..}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictionResponse {
    pub result: String,
    pub confidence: f64,
}

impl From<Prediction> for PredictionResponse {
    fn from(p: Prediction) -> Self {
        PredictionResponse {
            result: p.decision.as_str().to_string(),
            confidence: p.confidence,
        }
    }
}

impl PredictionResponse {
    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(|e| ModelError::Internal(e.to_string()))
    }
}

/// Failure response body with a human-readable message.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ModelError> for ErrorResponse {
    fn from(err: &ModelError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

/// Which side of the boundary is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Validation failure; the request never reaches the core.
    Client,
    /// Not-ready service or internal failure.
    Server,
}

/// Map a core error to the boundary's client/server distinction.
pub fn classify_error(err: &ModelError) -> ErrorClass {
    match err {
        ModelError::InvalidArgument(_) => ErrorClass::Client,
        ModelError::NotReady | ModelError::Internal(_) => ErrorClass::Server,
    }
}
