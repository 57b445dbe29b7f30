use anyhow::{anyhow, Context, Result};
use ndarray::Array1;

use hirescreen::config::PipelineConfig;
use hirescreen::data_handling::ApplicantDataset;
use hirescreen::inference::{FittedState, InferenceService};
use hirescreen::pipeline::train_pipeline;
use hirescreen::report::plots::{plot_decision_boundary, plot_decision_value_histogram};
use hirescreen::schema::{ApplicantRequest, PredictionResponse};

/// Train the screening classifier once, install it into an inference
/// service, answer a few example requests, and write diagnostic plots.
///
/// Run with: `RUST_LOG=info cargo run --example train_and_serve`
fn main() -> Result<()> {
    env_logger::init();

    let config = PipelineConfig::default();
    println!("Training on {} synthetic applicants...", config.n_samples);

    let outcome = train_pipeline(&config).context("training pipeline failed")?;
    let report = &outcome.report;
    println!(
        "Held-out accuracy: {:.3} (confusion tp={} fp={} tn={} fn={})",
        report.accuracy,
        report.true_positive,
        report.false_positive,
        report.true_negative,
        report.false_negative
    );
    println!(
        "hired:     precision {:.3} recall {:.3} (n={})",
        report.hired.precision, report.hired.recall, report.hired.support
    );
    println!(
        "not hired: precision {:.3} recall {:.3} (n={})",
        report.not_hired.precision, report.not_hired.recall, report.not_hired.support
    );

    // Startup contract: install the fitted state exactly once, before any
    // inference traffic.
    let service = InferenceService::new();
    service.install(FittedState {
        model: outcome.model.clone(),
        scaler: outcome.scaler.clone(),
    })?;

    for body in [
        r#"{"experience_years": 0.0, "technical_score": 10.0}"#,
        r#"{"experience_years": 9.0, "technical_score": 95.0}"#,
        r#"{"experience_years": 2.0, "technical_score": 59.9}"#,
    ] {
        let applicant = ApplicantRequest::from_json(body)?.validate()?;
        let prediction =
            service.predict_one(applicant.experience_years(), applicant.technical_score())?;
        let response = PredictionResponse::from(prediction);
        println!("{} -> {}", body, response.to_json()?);
    }

    // Diagnostics: re-derive the scaled training split (same seed, same
    // split) and plot the boundary and the decision-value distributions.
    let dataset = ApplicantDataset::generate(config.n_samples, config.seed)?;
    let (train, _test) = dataset.split(config.test_fraction, config.seed)?;
    let train_scaled = outcome.scaler.transform(&train.x)?;

    let boundary_plot = plot_decision_boundary(
        &outcome.model,
        &train_scaled,
        &train.y,
        "Screening decision boundary",
    )
    .map_err(|e| anyhow!(e))?;
    boundary_plot.write_html("decision_boundary.html");
    println!("Boundary plot saved to decision_boundary.html");

    let mut decision_values = Vec::with_capacity(train_scaled.nrows());
    for row in train_scaled.rows() {
        let sample: Vec<f64> = row.iter().copied().collect();
        decision_values.push(outcome.model.decision_value(&sample)?);
    }
    let histogram = plot_decision_value_histogram(
        &Array1::from_vec(decision_values),
        &train.y,
        "Decision values by class",
    )
    .map_err(|e| anyhow!(e))?;
    histogram.write_html("decision_values.html");
    println!("Decision-value histogram saved to decision_values.html");

    Ok(())
}
