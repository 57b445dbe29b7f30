use itertools_num::linspace;
use ndarray::{Array1, Array2};
use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Histogram, Plot, Scatter};

use crate::models::LinearSvm;

/// Plot the fitted decision boundary over the scaled training points.
///
/// Hired and not-hired applicants are drawn as separate marker traces; the
/// boundary is the line where the decision value is zero.
pub fn plot_decision_boundary(
    model: &LinearSvm,
    x_scaled: &Array2<f64>,
    labels: &Array1<i32>,
    title: &str,
) -> Result<Plot, String> {
    assert_eq!(
        x_scaled.nrows(),
        labels.len(),
        "Samples and labels must have the same length"
    );
    assert_eq!(x_scaled.ncols(), 2, "Boundary plot expects two features");
    assert!(
        labels.iter().all(|&l| l == 0 || l == 1),
        "Labels must be composed of only two classes, 0 for hired and 1 for not hired"
    );

    let mut hired = (Vec::new(), Vec::new());
    let mut rejected = (Vec::new(), Vec::new());
    for (row, label) in x_scaled.rows().into_iter().zip(labels.iter()) {
        if *label == 0 {
            hired.0.push(row[0]);
            hired.1.push(row[1]);
        } else {
            rejected.0.push(row[0]);
            rejected.1.push(row[1]);
        }
    }

    let trace_hired = Scatter::new(hired.0, hired.1)
        .mode(Mode::Markers)
        .name("Hired");
    let trace_rejected = Scatter::new(rejected.0, rejected.1)
        .mode(Mode::Markers)
        .name("Not hired");

    let mut plot = Plot::new();
    plot.add_trace(trace_hired);
    plot.add_trace(trace_rejected);

    if let Some(boundary) = boundary_line(model, x_scaled) {
        let trace_boundary = Scatter::new(boundary.0, boundary.1)
            .mode(Mode::Lines)
            .name("Decision boundary")
            .line(
                plotly::common::Line::new()
                    .color("red")
                    .dash(plotly::common::DashType::Dash),
            );
        plot.add_trace(trace_boundary);
    }

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("Experience years (scaled)"))
            .y_axis(Axis::new().title("Technical score (scaled)")),
    );

    Ok(plot)
}

/// Solve `w0*x + w1*y + b = 0` for plotting over the data's x-extent.
/// Returns `None` for a degenerate all-zero weight vector.
fn boundary_line(model: &LinearSvm, x_scaled: &Array2<f64>) -> Option<(Vec<f64>, Vec<f64>)> {
    let w = model.weights();
    let b = model.bias();

    let xs: Vec<f64> = x_scaled.column(0).to_vec();
    let ys: Vec<f64> = x_scaled.column(1).to_vec();
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if w[1].abs() > 1e-12 {
        let line_x: Vec<f64> = linspace(x_min, x_max, 100).collect();
        let line_y: Vec<f64> = line_x.iter().map(|&x| -(w[0] * x + b) / w[1]).collect();
        Some((line_x, line_y))
    } else if w[0].abs() > 1e-12 {
        // Vertical boundary
        let x0 = -b / w[0];
        Some((vec![x0, x0], vec![y_min, y_max]))
    } else {
        None
    }
}

/// Plot a histogram of decision values for the hired and not-hired classes.
pub fn plot_decision_value_histogram(
    decision_values: &Array1<f64>,
    labels: &Array1<i32>,
    title: &str,
) -> Result<Plot, String> {
    assert_eq!(
        decision_values.len(),
        labels.len(),
        "Decision values and labels must have the same length"
    );
    assert!(
        labels.iter().all(|&l| l == 0 || l == 1),
        "Labels must be composed of only two classes, 0 for hired and 1 for not hired"
    );

    let mut values_hired = Vec::new();
    let mut values_rejected = Vec::new();
    for (value, label) in decision_values.iter().zip(labels.iter()) {
        if *label == 0 {
            values_hired.push(*value);
        } else {
            values_rejected.push(*value);
        }
    }

    let trace_hired = Histogram::new(values_hired).name("Hired");
    let trace_rejected = Histogram::new(values_rejected).name("Not hired");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Decision value"))
        .y_axis(Axis::new().title("Count"));

    let mut plot = Plot::new();
    plot.add_trace(trace_hired);
    plot.add_trace(trace_rejected);
    plot.set_layout(layout);

    Ok(plot)
}
