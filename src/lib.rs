//! Metric dispatch for predictive models.
//!
//! An [`Evaluator`] wraps one model and scores it with the metric registered
//! for the model's [`ModelKind`], or with a metric injected by the caller.
//! New kinds are added through [`ModelKindRegistry::register`] without
//! touching the evaluator.
pub mod common;
pub mod evaluation;
pub mod metrics;
pub mod model;
pub mod registry;

pub use common::{ErrorCode, EvalCfg, EvalError, EvalResult, MetricError, ModelError};
pub use evaluation::{EvaluationReport, Evaluator, MetricCalculator};
pub use metrics::{MetricFn, MetricFunction};
pub use model::{DeclaredKind, EvaluableModel, ModelKind};
pub use registry::ModelKindRegistry;
