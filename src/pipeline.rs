//! End-to-end training orchestration.
//!
//! Wires the generator, the train/test split, the scaler, and the classifier
//! together: the scaler is fit on the training split only, both splits are
//! transformed with that one state, the classifier is fit on the scaled
//! training set, and the held-out split is scored for diagnostics.

use ndarray::Array1;

use crate::config::PipelineConfig;
use crate::data_handling::ApplicantDataset;
use crate::error::ModelError;
use crate::models::LinearSvm;
use crate::preprocessing::Scaler;
use crate::stats::{classification_report, ClassificationReport};

/// Fitted artifacts of one training run, plus held-out metrics.
///
/// The dataset itself is not retained; only the scaler statistics and the
/// classifier boundary survive the run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: LinearSvm,
    pub scaler: Scaler,
    pub report: ClassificationReport,
}

/// Run the full training pipeline.
///
/// Mutates no global state; installing the fitted artifacts into an
/// inference service is the caller's job.
///
/// # Arguments
///
/// * `config` - Sample count, test fraction, seed, and classifier
///   hyper-parameters. The seed drives both generation and the split, so
///   the same config reproduces the same artifacts.
pub fn train_pipeline(config: &PipelineConfig) -> Result<TrainingOutcome, ModelError> {
    let dataset = ApplicantDataset::generate(config.n_samples, config.seed)?;
    dataset.log_input_data_summary();

    let (train, test) = dataset.split(config.test_fraction, config.seed)?;
    log::debug!(
        "split: {} train / {} test samples",
        train.n_samples(),
        test.n_samples()
    );

    // Scaler statistics come from the training split only; the test split
    // and all future inference inputs reuse the same state.
    let scaler = Scaler::fit(&train.x)?;
    let train_scaled = scaler.transform(&train.x)?;
    let test_scaled = scaler.transform(&test.x)?;

    let model = LinearSvm::fit(&train_scaled, &train.y, &config.svm)?;

    let mut predictions = Vec::with_capacity(test.n_samples());
    for row in test_scaled.rows() {
        let sample: Vec<f64> = row.iter().copied().collect();
        predictions.push(model.predict(&sample)?);
    }
    let report = classification_report(&test.y, &Array1::from_vec(predictions))?;

    log::info!(
        "held-out accuracy {:.3} ({} of {} test samples)",
        report.accuracy,
        report.true_positive + report.true_negative,
        test.n_samples()
    );

    Ok(TrainingOutcome {
        model,
        scaler,
        report,
    })
}
