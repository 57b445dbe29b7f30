//! Linear-margin binary classifier.
//!
//! Trains an affine decision boundary `w·x + b` on standardized features by
//! minimizing the L2-regularized hinge loss with full-batch subgradient
//! descent. Training is fully deterministic: zero initialization, fixed
//! iteration order, no random restarts, so the same inputs always produce
//! the same boundary.

use ndarray::{Array1, Array2};

use crate::config::SvmConfig;
use crate::error::ModelError;

/// A fitted linear decision boundary over the 2-D scaled feature space.
/// Immutable after fit.
#[derive(Debug, Clone)]
pub struct LinearSvm {
    weights: Array1<f64>,
    bias: f64,
}

impl LinearSvm {
    /// Fit the classifier on scaled features and 0/1 labels (1 = not hired).
    ///
    /// # Arguments
    ///
    /// * `x` - Scaled feature matrix, shape (n_samples, n_features).
    /// * `y` - Labels, one per row, each 0 or 1.
    /// * `config` - Fixed training hyper-parameters.
    ///
    /// # Returns
    ///
    /// The fitted boundary, or `InvalidArgument` for empty input, a
    /// row/label count mismatch, or a label outside {0, 1}.
    pub fn fit(x: &Array2<f64>, y: &Array1<i32>, config: &SvmConfig) -> Result<Self, ModelError> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(ModelError::InvalidArgument(
                "cannot fit classifier on an empty matrix".to_string(),
            ));
        }
        if y.len() != nrows {
            return Err(ModelError::InvalidArgument(format!(
                "{} rows but {} labels",
                nrows,
                y.len()
            )));
        }
        if y.iter().any(|&l| l != 0 && l != 1) {
            return Err(ModelError::InvalidArgument(
                "labels must be 0 or 1".to_string(),
            ));
        }
        if config.epochs == 0 || config.learning_rate <= 0.0 || config.lambda < 0.0 {
            return Err(ModelError::InvalidArgument(
                "epochs and learning rate must be positive, lambda non-negative".to_string(),
            ));
        }

        // Hinge loss works on signed labels: 1 (not hired) -> +1, 0 -> -1.
        let signed: Vec<f64> = y.iter().map(|&l| if l == 1 { 1.0 } else { -1.0 }).collect();

        let n = nrows as f64;
        let mut weights = Array1::<f64>::zeros(ncols);
        let mut bias = 0.0f64;

        for _ in 0..config.epochs {
            let mut grad_w = &weights * config.lambda;
            let mut grad_b = 0.0f64;

            for (row, &s) in x.rows().into_iter().zip(signed.iter()) {
                let margin = s * (row.dot(&weights) + bias);
                if margin < 1.0 {
                    grad_w.scaled_add(-s / n, &row);
                    grad_b -= s / n;
                }
            }

            weights.scaled_add(-config.learning_rate, &grad_w);
            bias -= config.learning_rate * grad_b;
        }

        if weights.iter().any(|v| !v.is_finite()) || !bias.is_finite() {
            return Err(ModelError::Internal(
                "training diverged to a non-finite boundary".to_string(),
            ));
        }

        Ok(LinearSvm { weights, bias })
    }

    /// Raw linear score `w·x + b`. Sign indicates side of the boundary,
    /// magnitude grows with distance from it; not a probability.
    pub fn decision_value(&self, sample: &[f64]) -> Result<f64, ModelError> {
        if sample.len() != self.weights.len() {
            return Err(ModelError::InvalidArgument(format!(
                "expected {} features, got {}",
                self.weights.len(),
                sample.len()
            )));
        }
        let d = self
            .weights
            .iter()
            .zip(sample.iter())
            .map(|(w, v)| w * v)
            .sum::<f64>()
            + self.bias;
        if !d.is_finite() {
            return Err(ModelError::Internal(
                "decision value is not finite".to_string(),
            ));
        }
        Ok(d)
    }

    /// Thresholded class: decision value >= 0 predicts 1 (not hired).
    pub fn predict(&self, sample: &[f64]) -> Result<i32, ModelError> {
        Ok(if self.decision_value(sample)? >= 0.0 { 1 } else { 0 })
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_fixture() -> (Array2<f64>, Array1<i32>) {
        // Class 1 sits in the lower-left corner of the scaled plane,
        // class 0 everywhere else.
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                -1.5, -1.2, //
                -1.2, -1.5, //
                -1.0, -1.0, //
                -1.4, -0.9, //
                1.0, 1.2, //
                0.8, -0.2, //
                -0.3, 1.1, //
                1.5, 0.4, //
                0.2, 0.9, //
                1.2, -0.5,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![1, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
        (x, y)
    }

    #[test]
    fn fit_separates_corner_class() {
        let (x, y) = separable_fixture();
        let model = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap();

        for (row, &label) in x.rows().into_iter().zip(y.iter()) {
            let pred = model.predict(row.as_slice().unwrap()).unwrap();
            assert_eq!(pred, label, "misclassified {:?}", row);
        }
    }

    #[test]
    fn decision_value_sign_matches_prediction() {
        let (x, y) = separable_fixture();
        let model = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap();

        for row in x.rows() {
            let sample = row.as_slice().unwrap();
            let d = model.decision_value(sample).unwrap();
            let pred = model.predict(sample).unwrap();
            assert_eq!(pred == 1, d >= 0.0);
        }
    }

    #[test]
    fn fit_is_deterministic() {
        let (x, y) = separable_fixture();
        let a = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap();
        let b = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.bias(), b.bias());
    }

    #[test]
    fn fit_rejects_bad_labels() {
        let (x, _) = separable_fixture();
        let y = Array1::from_vec(vec![1, -1, 1, -1, 0, 0, 0, 0, 0, 0]);
        let err = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument(_)));
    }

    #[test]
    fn fit_rejects_length_mismatch() {
        let (x, _) = separable_fixture();
        let y = Array1::from_vec(vec![1, 0, 1]);
        let err = LinearSvm::fit(&x, &y, &SvmConfig::default()).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument(_)));
    }
}
