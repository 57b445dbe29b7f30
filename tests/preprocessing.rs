//! Integration tests for the feature scaler.

use hirescreen::data_handling::ApplicantDataset;
use hirescreen::error::ModelError;
use hirescreen::preprocessing::Scaler;
use ndarray::Array2;

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

#[test]
fn fit_computes_per_column_mean_and_std() {
    let x = Array2::from_shape_vec(
        (4, 2),
        vec![
            1.0, 10.0, //
            2.0, 20.0, //
            3.0, 30.0, //
            4.0, 40.0,
        ],
    )
    .unwrap();

    let scaler = Scaler::fit(&x).unwrap();
    assert!((scaler.mean()[0] - 2.5).abs() < 1e-12);
    assert!((scaler.mean()[1] - 25.0).abs() < 1e-12);
    // Population convention: sqrt(mean of squared deviations).
    assert!((scaler.std()[0] - 1.25f64.sqrt()).abs() < 1e-12);
    assert!((scaler.std()[1] - 125.0f64.sqrt()).abs() < 1e-12);
}

#[test]
fn fit_rejects_empty_input() {
    let x = Array2::<f64>::zeros((0, 2));
    let err = Scaler::fit(&x).unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument(_)));
}

#[test]
fn fit_rejects_zero_variance_column() {
    let x = Array2::from_shape_vec(
        (3, 2),
        vec![
            5.0, 10.0, //
            5.0, 20.0, //
            5.0, 30.0,
        ],
    )
    .unwrap();
    let err = Scaler::fit(&x).unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// Transform
// ---------------------------------------------------------------------------

#[test]
fn transforming_the_training_mean_gives_zero() {
    let train = ApplicantDataset::generate(200, 42).unwrap();
    let scaler = Scaler::fit(&train.x).unwrap();

    let mean = [scaler.mean()[0], scaler.mean()[1]];
    let scaled = scaler.transform_sample(&mean).unwrap();
    assert!(scaled[0].abs() < 1e-9, "scaled mean x = {}", scaled[0]);
    assert!(scaled[1].abs() < 1e-9, "scaled mean y = {}", scaled[1]);
}

#[test]
fn transform_is_pure_and_repeatable() {
    let train = ApplicantDataset::generate(100, 7).unwrap();
    let scaler = Scaler::fit(&train.x).unwrap();

    let a = scaler.transform(&train.x).unwrap();
    let b = scaler.transform(&train.x).unwrap();
    assert_eq!(a, b);

    // The fitted statistics are unchanged by transforming.
    let mean_before = scaler.mean().to_vec();
    let _ = scaler.transform_sample(&[9.0, 95.0]).unwrap();
    assert_eq!(scaler.mean(), mean_before.as_slice());
}

#[test]
fn transform_uses_training_statistics_only() {
    let train = ApplicantDataset::generate(100, 7).unwrap();
    let scaler = Scaler::fit(&train.x).unwrap();

    // A value far outside the training distribution is scaled with the
    // training-time mean/std, not re-fit statistics.
    let scaled = scaler.transform_sample(&[10.0, 100.0]).unwrap();
    let expected_x = (10.0 - scaler.mean()[0]) / scaler.std()[0];
    let expected_y = (100.0 - scaler.mean()[1]) / scaler.std()[1];
    assert!((scaled[0] - expected_x).abs() < 1e-12);
    assert!((scaled[1] - expected_y).abs() < 1e-12);
}

#[test]
fn transform_rejects_wrong_feature_count() {
    let train = ApplicantDataset::generate(10, 1).unwrap();
    let scaler = Scaler::fit(&train.x).unwrap();
    assert!(scaler.transform_sample(&[1.0]).is_err());
    assert!(scaler.transform_sample(&[1.0, 2.0, 3.0]).is_err());
}
