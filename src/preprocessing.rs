//! Feature standardization.
//!
//! Provides a `Scaler` for per-column mean/std standardization. The scaler is
//! fit once on training features and the same state is reused for the test
//! split and for every inference call; it is never re-fit on new data.

use ndarray::Array2;

use crate::error::ModelError;

/// Per-column standardization state, immutable after fit.
///
/// Uses the population (ddof = 0) standard deviation convention.
#[derive(Clone, Debug)]
pub struct Scaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl Scaler {
    /// Fit a scaler from a matrix where rows are samples and columns are
    /// features.
    ///
    /// # Returns
    ///
    /// The fitted state, or `InvalidArgument` when the matrix is empty or a
    /// column has zero variance. A constant column is rejected outright
    /// rather than clamped: for generated data it means the generator or the
    /// split is broken, and scaling by a fudge factor would hide that.
    pub fn fit(x: &Array2<f64>) -> Result<Self, ModelError> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(ModelError::InvalidArgument(
                "cannot fit scaler on an empty matrix".to_string(),
            ));
        }

        let nrows_f = nrows as f64;

        let mut mean = vec![0.0f64; ncols];
        for row in x.rows() {
            for (c, v) in row.iter().enumerate() {
                mean[c] += v;
            }
        }
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut std = vec![0.0f64; ncols];
        for row in x.rows() {
            for (c, v) in row.iter().enumerate() {
                let d = v - mean[c];
                std[c] += d * d;
            }
        }
        for (c, v) in std.iter_mut().enumerate() {
            *v = (*v / nrows_f).sqrt();
            if *v == 0.0 {
                return Err(ModelError::InvalidArgument(format!(
                    "feature column {} has zero variance",
                    c
                )));
            }
        }

        Ok(Scaler { mean, std })
    }

    /// Standardize a single sample. Pure; does not mutate the fitted state.
    pub fn transform_sample(&self, sample: &[f64]) -> Result<Vec<f64>, ModelError> {
        if sample.len() != self.mean.len() {
            return Err(ModelError::InvalidArgument(format!(
                "expected {} features, got {}",
                self.mean.len(),
                sample.len()
            )));
        }
        Ok(sample
            .iter()
            .zip(self.mean.iter().zip(self.std.iter()))
            .map(|(v, (m, s))| (v - m) / s)
            .collect())
    }

    /// Standardize all rows of a matrix, returning a new matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, ModelError> {
        let (_, ncols) = x.dim();
        if ncols != self.mean.len() {
            return Err(ModelError::InvalidArgument(format!(
                "expected {} feature columns, got {}",
                self.mean.len(),
                ncols
            )));
        }
        let mut out = x.clone();
        for mut row in out.rows_mut() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = (*v - self.mean[c]) / self.std[c];
            }
        }
        Ok(out)
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn std(&self) -> &[f64] {
        &self.std
    }
}
