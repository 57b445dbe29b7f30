use serde::{Deserialize, Serialize};

/// Central configuration for the training pipeline.
///
/// All values are fixed by design; `Default` carries the canonical constants
/// used at service startup. There is no hyperparameter search in scope.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PipelineConfig {
    /// Number of synthetic applicants to generate.
    pub n_samples: usize,
    /// Fraction of the dataset held out for evaluation.
    pub test_fraction: f64,
    /// Seed shared by the generator and the train/test split, so the same
    /// seed reproduces the whole run.
    pub seed: u64,

    #[serde(default)]
    pub svm: SvmConfig,
}

/// Hyper-parameters for the linear-margin classifier.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SvmConfig {
    /// Full-batch subgradient steps.
    pub epochs: usize,
    /// Step size for each subgradient step.
    pub learning_rate: f64,
    /// L2 regularization strength.
    pub lambda: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            n_samples: 200,
            test_fraction: 0.2,
            seed: 42,
            svm: SvmConfig::default(),
        }
    }
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            epochs: 1000,
            learning_rate: 0.1,
            lambda: 0.01,
        }
    }
}

impl PipelineConfig {
    pub fn new(n_samples: usize, test_fraction: f64, seed: u64) -> Self {
        Self {
            n_samples,
            test_fraction,
            seed,
            svm: SvmConfig::default(),
        }
    }
}
