//! Synthetic applicant datasets and deterministic train/test splitting.
//!
//! The generator draws the two features uniformly from their declared ranges
//! and labels each sample with the fixed ground-truth screening rule. The
//! rule exists only to label synthetic data; it is never consulted at
//! inference time.

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::ModelError;

/// Upper bound of the `experience_years` feature.
pub const EXPERIENCE_MAX: f64 = 10.0;
/// Upper bound of the `technical_score` feature.
pub const SCORE_MAX: f64 = 100.0;

/// Experience threshold of the ground-truth rule.
const RULE_EXPERIENCE_YEARS: f64 = 2.0;
/// Technical-score threshold of the ground-truth rule.
const RULE_TECHNICAL_SCORE: f64 = 60.0;

/// Check both raw features against their declared ranges.
///
/// Shared by the boundary schema validation and the inference-time guard,
/// so the two cannot drift apart.
pub fn validate_feature_ranges(
    experience_years: f64,
    technical_score: f64,
) -> Result<(), ModelError> {
    if !experience_years.is_finite() || !(0.0..=EXPERIENCE_MAX).contains(&experience_years) {
        return Err(ModelError::InvalidArgument(format!(
            "experience_years must be within [0, {}], got {}",
            EXPERIENCE_MAX, experience_years
        )));
    }
    if !technical_score.is_finite() || !(0.0..=SCORE_MAX).contains(&technical_score) {
        return Err(ModelError::InvalidArgument(format!(
            "technical_score must be within [0, {}], got {}",
            SCORE_MAX, technical_score
        )));
    }
    Ok(())
}

/// Ground-truth labeling rule: an applicant is rejected (label 1) iff they
/// have under two years of experience and a technical score under 60.
/// Pure function of the two features, no randomness.
pub fn ground_truth_label(experience_years: f64, technical_score: f64) -> i32 {
    if experience_years < RULE_EXPERIENCE_YEARS && technical_score < RULE_TECHNICAL_SCORE {
        1
    } else {
        0
    }
}

/// A labeled applicant dataset: an (n, 2) feature matrix with columns
/// `experience_years` and `technical_score`, and a 0/1 label per row
/// (1 = not hired).
#[derive(Debug, Clone)]
pub struct ApplicantDataset {
    pub x: Array2<f64>,
    pub y: Array1<i32>,
}

impl ApplicantDataset {
    /// Generate `n` synthetic applicants from the given seed.
    ///
    /// The same `(n, seed)` pair always yields the same dataset bit-for-bit,
    /// which the deterministic split downstream relies on.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of samples to generate; must be positive.
    /// * `seed` - Seed for the feature draws.
    ///
    /// # Returns
    ///
    /// A dataset of exactly `n` labeled samples, or `InvalidArgument` when
    /// `n` is zero.
    pub fn generate(n: usize, seed: u64) -> Result<Self, ModelError> {
        if n == 0 {
            return Err(ModelError::InvalidArgument(
                "sample count must be positive".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);

        let mut features = Vec::with_capacity(n * 2);
        let mut labels = Vec::with_capacity(n);
        for _ in 0..n {
            let experience_years = rng.gen_range(0.0..EXPERIENCE_MAX);
            let technical_score = rng.gen_range(0.0..SCORE_MAX);
            features.push(experience_years);
            features.push(technical_score);
            labels.push(ground_truth_label(experience_years, technical_score));
        }

        let x = Array2::from_shape_vec((n, 2), features)
            .map_err(|e| ModelError::Internal(format!("feature matrix shape: {}", e)))?;
        let y = Array1::from_vec(labels);

        Ok(ApplicantDataset { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    pub fn log_input_data_summary(&self) {
        let rejected = self.y.iter().filter(|&&v| v == 1).count();
        log::info!(
            "dataset: {} applicants ({} hired, {} not hired)",
            self.n_samples(),
            self.n_samples() - rejected,
            rejected
        );
    }

    /// Split into (train, test) by holding out `test_fraction` of the rows.
    ///
    /// Row order is shuffled with an rng seeded from `seed`, so the same
    /// seed reproduces the same split across runs.
    ///
    /// # Arguments
    ///
    /// * `test_fraction` - Fraction of rows held out; must lie in (0, 1)
    ///   and leave both splits non-empty.
    /// * `seed` - Seed for the shuffle.
    pub fn split(&self, test_fraction: f64, seed: u64) -> Result<(Self, Self), ModelError> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(ModelError::InvalidArgument(format!(
                "test fraction must be in (0, 1), got {}",
                test_fraction
            )));
        }

        let n = self.n_samples();
        let n_test = ((n as f64) * test_fraction).round() as usize;
        if n_test == 0 || n_test == n {
            return Err(ModelError::InvalidArgument(format!(
                "test fraction {} leaves an empty split for {} samples",
                test_fraction, n
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);

        Ok((self.select(train_idx), self.select(test_idx)))
    }

    fn select(&self, indices: &[usize]) -> Self {
        ApplicantDataset {
            x: self.x.select(Axis(0), indices),
            y: self.y.select(Axis(0), indices),
        }
    }
}
