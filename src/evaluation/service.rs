//! Evaluator binding one model to the metric for its kind.
//!
//! The metric is fixed when the evaluator is built, either resolved from a
//! [`ModelKindRegistry`] or injected by the caller. Adding a new kind only
//! takes a registration; nothing here branches on the model's type.

use std::time::Instant;

use crate::common::config::{EvalCfg, DEFAULT_SCORE_PRECISION, MAX_SCORE_PRECISION};
use crate::common::error::{EvalResult, ErrorCode};
use crate::common::log::log_event;
use crate::common::time;
use crate::metrics::domain::MetricFn;
use crate::metrics::service::{accuracy_fn, r2_fn};
use crate::model::domain::{DeclaredKind, EvaluableModel, ModelKind};
use crate::registry::domain::ModelKindRegistry;
use crate::registry::service as registry_service;

use super::domain::{EvaluationReport, MetricCalculator};

/// Owns one model and the metric used to score it.
///
/// Not meant to be shared for concurrent mutation: refitting through
/// [`Evaluator::model_mut`] while another thread predicts is the caller's
/// responsibility to prevent.
#[derive(Debug)]
pub struct Evaluator<M> {
    model: M,
    kind: Option<ModelKind>,
    calculator: MetricCalculator,
    score_precision: usize,
}

impl<M: EvaluableModel> Evaluator<M> {
    /// Bind `model` to the metric registered for `kind` in the shared registry.
    ///
    /// Fails with `UnknownKind` before touching the model if `kind` is not registered.
    pub fn new(model: M, kind: impl Into<ModelKind>) -> EvalResult<Self> {
        Self::with_registry(model, kind, registry_service::global())
    }

    /// Same as [`Evaluator::new`] but resolves through `registry`.
    pub fn with_registry(
        model: M,
        kind: impl Into<ModelKind>,
        registry: &ModelKindRegistry,
    ) -> EvalResult<Self> {
        let kind = kind.into();
        let metric = registry.resolve(&kind)?;
        Ok(Self::build(model, Some(kind), metric))
    }

    /// Bind `model` to an explicitly chosen metric, bypassing any registry.
    pub fn with_metric(model: M, metric: MetricFn) -> Self {
        Self::build(model, None, metric)
    }

    /// Evaluator scoring with accuracy, recorded under the `classifier` kind.
    ///
    /// The metric is injected; no registry is consulted.
    pub fn classifier(model: M) -> Self {
        Self::build(model, Some(ModelKind::classifier()), accuracy_fn())
    }

    /// Evaluator scoring with the coefficient of determination, recorded
    /// under the `regressor` kind.
    ///
    /// The metric is injected; no registry is consulted.
    pub fn regressor(model: M) -> Self {
        Self::build(model, Some(ModelKind::regressor()), r2_fn())
    }

    fn build(model: M, kind: Option<ModelKind>, metric: MetricFn) -> Self {
        Self {
            model,
            kind,
            calculator: MetricCalculator::new(metric),
            score_precision: DEFAULT_SCORE_PRECISION,
        }
    }

    /// Apply runtime settings (score precision used in log lines).
    ///
    /// Precision is capped at [`MAX_SCORE_PRECISION`].
    pub fn configure(mut self, cfg: &EvalCfg) -> Self {
        self.score_precision = cfg.score_precision.min(MAX_SCORE_PRECISION);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access so callers can train the wrapped model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Kind the evaluator was built for; `None` for [`Evaluator::with_metric`].
    pub fn kind(&self) -> Option<&ModelKind> {
        self.kind.as_ref()
    }

    pub fn metric(&self) -> &MetricFn {
        self.calculator.metric()
    }

    /// Predict on `inputs` and score the predictions against `ground_truth`.
    pub fn calculate_metric(&self, ground_truth: &[f64], inputs: &[Vec<f64>]) -> EvalResult<f64> {
        let result = self.calculator.calculate(&self.model, ground_truth, inputs);
        self.trace(&result);
        result
    }

    /// Score predictions the caller already computed.
    pub fn score_predictions(&self, ground_truth: &[f64], predictions: &[f64]) -> EvalResult<f64> {
        let result = self.calculator.score(ground_truth, predictions);
        self.trace(&result);
        result
    }

    /// Run [`Evaluator::calculate_metric`] and summarise it as a report.
    pub fn evaluate(&self, ground_truth: &[f64], inputs: &[Vec<f64>]) -> EvalResult<EvaluationReport> {
        let start = Instant::now();
        let outcome = self.calculate_metric(ground_truth, inputs);
        let elapsed = time::elapsed_ms(start);
        let code = match &outcome {
            Ok(_) => ErrorCode::Ok,
            Err(err) => err.code(),
        };
        log_event("evaluation::service", "evaluate", code as u32, elapsed);

        let score = outcome?;
        Ok(EvaluationReport {
            model_name: self.model.name(),
            kind: self.kind.clone(),
            metric: self.metric().name().to_string(),
            score,
            samples: ground_truth.len(),
            duration_ms: u64::try_from(elapsed).unwrap_or(u64::MAX),
        })
    }

    fn trace(&self, result: &EvalResult<f64>) {
        let kind = self.kind.as_ref().map_or("-", ModelKind::as_str);
        match result {
            Ok(score) => tracing::info!(
                model = %self.model.name(),
                kind,
                metric = self.metric().name(),
                "score {:.*}",
                self.score_precision,
                score
            ),
            Err(err) => tracing::warn!(
                model = %self.model.name(),
                kind,
                metric = self.metric().name(),
                code = err.code() as u32,
                error = %err,
                "evaluation failed"
            ),
        }
    }
}

impl<M: EvaluableModel + DeclaredKind> Evaluator<M> {
    /// Bind `model` using the kind its type declares.
    pub fn for_declared(model: M) -> EvalResult<Self> {
        Self::new(model, M::model_kind())
    }
}
