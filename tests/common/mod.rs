//! Test-only models satisfying the evaluation capability.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use evalkit::{DeclaredKind, EvaluableModel, ModelError, ModelKind};

/// Returns a fixed prediction vector once fitted; counts `predict` calls.
#[derive(Debug, Clone)]
pub struct FixedModel {
    predictions: Option<Vec<f64>>,
    canned: Vec<f64>,
    pub predict_calls: Arc<AtomicUsize>,
}

impl FixedModel {
    pub fn untrained(canned: &[f64]) -> Self {
        Self {
            predictions: None,
            canned: canned.to_vec(),
            predict_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn trained(canned: &[f64]) -> Self {
        let mut model = Self::untrained(canned);
        model.predictions = Some(model.canned.clone());
        model
    }

    pub fn calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }
}

impl EvaluableModel for FixedModel {
    fn fit(&mut self, _inputs: &[Vec<f64>], _targets: &[f64]) -> Result<(), ModelError> {
        self.predictions = Some(self.canned.clone());
        Ok(())
    }

    fn predict(&self, _inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.predictions.clone().ok_or(ModelError::NotTrained)
    }
}

/// Predicts the mean of the training targets for every row.
#[derive(Debug, Default)]
pub struct MeanRegressor {
    mean: Option<f64>,
}

impl EvaluableModel for MeanRegressor {
    fn fit(&mut self, inputs: &[Vec<f64>], targets: &[f64]) -> Result<(), ModelError> {
        if inputs.len() != targets.len() || targets.is_empty() {
            return Err(ModelError::InvalidInput(format!(
                "{} rows vs {} targets",
                inputs.len(),
                targets.len()
            )));
        }
        self.mean = Some(targets.iter().sum::<f64>() / targets.len() as f64);
        Ok(())
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        let mean = self.mean.ok_or(ModelError::NotTrained)?;
        Ok(vec![mean; inputs.len()])
    }
}

impl DeclaredKind for MeanRegressor {
    const KIND: &'static str = ModelKind::REGRESSOR;
}

/// Labels a row 1.0 when its first feature exceeds the threshold.
#[derive(Debug)]
pub struct ThresholdClassifier {
    pub threshold: f64,
}

impl EvaluableModel for ThresholdClassifier {
    fn fit(&mut self, _inputs: &[Vec<f64>], _targets: &[f64]) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        inputs
            .iter()
            .map(|row| match row.first() {
                Some(x) if *x > self.threshold => Ok(1.0),
                Some(_) => Ok(0.0),
                None => Err(ModelError::InvalidInput("empty row".into())),
            })
            .collect()
    }
}

impl DeclaredKind for ThresholdClassifier {
    const KIND: &'static str = ModelKind::CLASSIFIER;
}

pub fn rows(n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|i| vec![i as f64]).collect()
}
