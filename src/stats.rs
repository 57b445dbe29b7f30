//! Evaluation metrics for the binary screening classifier.
//!
//! Computes accuracy, confusion counts, and per-class precision/recall from
//! predicted vs. true 0/1 labels. These are diagnostics surfaced after
//! training; serving does not depend on them.

use ndarray::Array1;
use serde::Serialize;

use crate::error::ModelError;

/// Precision and recall for a single class.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    /// Number of true samples of this class.
    pub support: usize,
}

/// Summary metrics over a labeled evaluation split.
///
/// Confusion counts use the "not hired" class (label 1) as positive:
/// `true_positive` counts correctly predicted rejections.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
    pub hired: ClassMetrics,
    pub not_hired: ClassMetrics,
}

/// Build a `ClassificationReport` from true and predicted labels.
///
/// # Arguments
///
/// * `y_true` - Ground-truth 0/1 labels.
/// * `y_pred` - Predicted 0/1 labels, same length.
pub fn classification_report(
    y_true: &Array1<i32>,
    y_pred: &Array1<i32>,
) -> Result<ClassificationReport, ModelError> {
    if y_true.len() != y_pred.len() {
        return Err(ModelError::InvalidArgument(format!(
            "label arrays have different lengths: {} vs {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(ModelError::InvalidArgument(
            "cannot evaluate an empty split".to_string(),
        ));
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut tn = 0usize;
    let mut fn_ = 0usize;
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t, p) {
            (1, 1) => tp += 1,
            (0, 1) => fp += 1,
            (0, 0) => tn += 1,
            (1, 0) => fn_ += 1,
            _ => {
                return Err(ModelError::InvalidArgument(
                    "labels must be 0 or 1".to_string(),
                ))
            }
        }
    }

    let total = y_true.len() as f64;
    let ratio = |num: usize, den: usize| {
        if den == 0 {
            0.0
        } else {
            num as f64 / den as f64
        }
    };

    Ok(ClassificationReport {
        accuracy: (tp + tn) as f64 / total,
        true_positive: tp,
        false_positive: fp,
        true_negative: tn,
        false_negative: fn_,
        hired: ClassMetrics {
            precision: ratio(tn, tn + fn_),
            recall: ratio(tn, tn + fp),
            support: tn + fp,
        },
        not_hired: ClassMetrics {
            precision: ratio(tp, tp + fp),
            recall: ratio(tp, tp + fn_),
            support: tp + fn_,
        },
    })
}
