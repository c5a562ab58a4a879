//! Built-in metric functions.
//!
//! Each function validates its inputs and reports problems as
//! [`MetricError`] values instead of panicking, so the evaluator can
//! propagate them with the cause attached.

use crate::common::error::MetricError;

use super::domain::MetricFn;

fn check_lengths(truth: &[f64], predicted: &[f64]) -> Result<usize, MetricError> {
    if truth.len() != predicted.len() {
        return Err(MetricError::LengthMismatch {
            truth: truth.len(),
            predicted: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(MetricError::Empty);
    }
    Ok(truth.len())
}

/// Fraction of predictions that exactly match the ground-truth label.
pub fn accuracy(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let n = check_lengths(truth, predicted)?;
    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / n as f64)
}

/// Coefficient of determination, `1 - SS_res / SS_tot`.
///
/// When every ground-truth value is equal the score is 1.0 for a
/// perfect prediction and 0.0 otherwise.
pub fn r2_score(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let n = check_lengths(truth, predicted)?;

    // Compare values directly; the mean of a repeated 0.1 does not round back to 0.1.
    let first = truth[0];
    if truth.iter().all(|t| *t == first) {
        let perfect = predicted.iter().all(|p| *p == first);
        return Ok(if perfect { 1.0 } else { 0.0 });
    }

    let mean = truth.iter().sum::<f64>() / n as f64;
    let ss_res: f64 = truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let ss_tot: f64 = truth.iter().map(|t| (t - mean).powi(2)).sum();

    Ok(1.0 - ss_res / ss_tot)
}

/// Mean of squared residuals.
pub fn mean_squared_error(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let n = check_lengths(truth, predicted)?;
    let sum: f64 = truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    Ok(sum / n as f64)
}

/// Mean of absolute residuals.
pub fn mean_absolute_error(truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
    let n = check_lengths(truth, predicted)?;
    let sum: f64 = truth.iter().zip(predicted).map(|(t, p)| (t - p).abs()).sum();
    Ok(sum / n as f64)
}

pub fn accuracy_fn() -> MetricFn {
    MetricFn::new("accuracy", accuracy)
}

pub fn r2_fn() -> MetricFn {
    MetricFn::new("r2", r2_score)
}

pub fn mse_fn() -> MetricFn {
    MetricFn::new("mse", mean_squared_error)
}

pub fn mae_fn() -> MetricFn {
    MetricFn::new("mae", mean_absolute_error)
}
