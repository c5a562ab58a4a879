//! Evaluation: binding models to metrics and computing scores.

pub mod domain;
pub mod service;

pub use domain::{EvaluationReport, MetricCalculator};
pub use service::Evaluator;
