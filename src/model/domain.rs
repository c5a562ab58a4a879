//! Domain types describing the models the framework can evaluate.
//!
//! The framework never inspects a model's concrete type. It only needs the
//! [`EvaluableModel`] capability plus a [`ModelKind`] supplied once, either by
//! the caller or by the type itself through [`DeclaredKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::ModelError;

/// Identifier for a family of models sharing one metric.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelKind(String);

impl ModelKind {
    pub const CLASSIFIER: &'static str = "classifier";
    pub const REGRESSOR: &'static str = "regressor";

    /// Construct a kind identifier from a string slice.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn classifier() -> Self {
        Self::new(Self::CLASSIFIER)
    }

    pub fn regressor() -> Self {
        Self::new(Self::REGRESSOR)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModelKind {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Capability required from any model the framework evaluates.
///
/// Models start untrained. `fit` may be called any number of times and
/// replaces the internal state. Whether `predict` refuses to run before the
/// first `fit` (with [`ModelError::NotTrained`]) is up to the model.
pub trait EvaluableModel {
    fn fit(&mut self, inputs: &[Vec<f64>], targets: &[f64]) -> Result<(), ModelError>;

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError>;

    /// Display name used in logs and reports.
    fn name(&self) -> String {
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path).to_string()
    }

    /// Fit and hand the model back, for chaining at construction sites.
    fn fitted(mut self, inputs: &[Vec<f64>], targets: &[f64]) -> Result<Self, ModelError>
    where
        Self: Sized,
    {
        self.fit(inputs, targets)?;
        Ok(self)
    }
}

impl<M: EvaluableModel + ?Sized> EvaluableModel for Box<M> {
    fn fit(&mut self, inputs: &[Vec<f64>], targets: &[f64]) -> Result<(), ModelError> {
        (**self).fit(inputs, targets)
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        (**self).predict(inputs)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<M: EvaluableModel + ?Sized> EvaluableModel for &mut M {
    fn fit(&mut self, inputs: &[Vec<f64>], targets: &[f64]) -> Result<(), ModelError> {
        (**self).fit(inputs, targets)
    }

    fn predict(&self, inputs: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        (**self).predict(inputs)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Implemented by model types whose kind is fixed by the type itself.
pub trait DeclaredKind {
    const KIND: &'static str;

    fn model_kind() -> ModelKind {
        ModelKind::new(Self::KIND)
    }
}
