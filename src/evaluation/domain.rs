//! Domain primitives for evaluation: the reusable predict-then-score
//! component and the report produced by a run.

use serde::{Deserialize, Serialize};

use crate::common::error::{EvalError, EvalResult};
use crate::metrics::domain::MetricFn;
use crate::model::domain::{EvaluableModel, ModelKind};

/// Summary of one evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub model_name: String,
    /// `None` when the metric was injected instead of resolved from a kind.
    pub kind: Option<ModelKind>,
    pub metric: String,
    pub score: f64,
    pub samples: usize,
    pub duration_ms: u64,
}

impl EvaluationReport {
    pub fn to_json(&self) -> EvalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Predict-then-score behavior shared by every evaluator.
///
/// Holds exactly one metric and never looks at the model's concrete type.
#[derive(Clone, Debug)]
pub struct MetricCalculator {
    metric: MetricFn,
}

impl MetricCalculator {
    pub fn new(metric: MetricFn) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> &MetricFn {
        &self.metric
    }

    /// Apply the metric to predictions the caller already has.
    pub fn score(&self, ground_truth: &[f64], predictions: &[f64]) -> EvalResult<f64> {
        self.metric
            .call(ground_truth, predictions)
            .map_err(|source| EvalError::metric(self.metric.name(), source))
    }

    /// Predict with `model` on `inputs`, then score against `ground_truth`.
    pub fn calculate<M>(&self, model: &M, ground_truth: &[f64], inputs: &[Vec<f64>]) -> EvalResult<f64>
    where
        M: EvaluableModel + ?Sized,
    {
        let predictions = model
            .predict(inputs)
            .map_err(|source| EvalError::prediction(model.name(), source))?;
        self.score(ground_truth, &predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::{ErrorCode, MetricError, ModelError};
    use crate::metrics::service::accuracy_fn;

    struct Echo;

    impl EvaluableModel for Echo {
        fn fit(&mut self, _inputs: &[Vec<f64>], _targets: &[f64]) -> Result<(), ModelError> {
            Ok(())
        }

        fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
            inputs
                .iter()
                .map(|row| row.first().copied().ok_or_else(|| ModelError::InvalidInput("empty row".into())))
                .collect()
        }
    }

    #[test]
    fn calculate_predicts_then_scores() {
        let calculator = MetricCalculator::new(accuracy_fn());
        let inputs = vec![vec![1.0], vec![0.0]];
        assert_eq!(calculator.calculate(&Echo, &[1.0, 1.0], &inputs).unwrap(), 0.5);
    }

    #[test]
    fn prediction_failure_is_wrapped() {
        let calculator = MetricCalculator::new(accuracy_fn());
        let err = calculator.calculate(&Echo, &[1.0], &[vec![]]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Prediction);
        assert!(matches!(
            err,
            EvalError::Prediction { ref model, source: ModelError::InvalidInput(_) } if model == "Echo"
        ));
    }

    #[test]
    fn metric_failure_is_wrapped() {
        let calculator = MetricCalculator::new(accuracy_fn());
        let err = calculator.score(&[1.0, 0.0, 1.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::MetricComputation {
                ref metric,
                source: MetricError::LengthMismatch { truth: 3, predicted: 2 },
            } if metric == "accuracy"
        ));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = EvaluationReport {
            model_name: "Echo".into(),
            kind: Some(ModelKind::classifier()),
            metric: "accuracy".into(),
            score: 0.75,
            samples: 4,
            duration_ms: 0,
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"kind\":\"classifier\""));
        let back: EvaluationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
