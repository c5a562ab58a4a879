//! Error handling primitives shared across the core.
//!
//! Models and metric functions report their own failures through
//! [`ModelError`] and [`MetricError`]; the evaluation layer wraps them into
//! [`EvalError`] with the original cause attached.

use thiserror::Error;

use crate::model::domain::ModelKind;

/// Stable error codes for reporting layers.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// No metric registered for the requested kind.
    UnknownKind = 1,
    /// Kind already registered and no override was requested.
    DuplicateKind = 2,
    /// Wrapped model failed while predicting.
    Prediction = 3,
    /// Resolved metric function failed.
    MetricComputation = 4,
    /// Configuration could not be loaded.
    Config = 5,
    /// A report could not be serialized.
    Serialization = 6,
}

/// Failures raised by a model while fitting or predicting.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("model has not been fitted")]
    NotTrained,

    #[error("invalid model input: {0}")]
    InvalidInput(String),

    #[error("model backend failure: {0}")]
    Backend(String),
}

/// Failures raised by a metric function.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MetricError {
    #[error("length mismatch: {truth} ground-truth values vs {predicted} predictions")]
    LengthMismatch { truth: usize, predicted: usize },

    #[error("metric undefined for empty input")]
    Empty,

    #[error("metric undefined: {0}")]
    Undefined(String),
}

/// Canonical error type for the core.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("no metric registered for model kind `{0}`")]
    UnknownKind(ModelKind),

    #[error("model kind `{0}` is already registered")]
    DuplicateKind(ModelKind),

    #[error("prediction failed for model `{model}`")]
    Prediction {
        model: String,
        #[source]
        source: ModelError,
    },

    #[error("metric `{metric}` failed")]
    MetricComputation {
        metric: String,
        #[source]
        source: MetricError,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias used throughout the crate.
pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    /// Machine parsable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownKind(_) => ErrorCode::UnknownKind,
            EvalError::DuplicateKind(_) => ErrorCode::DuplicateKind,
            EvalError::Prediction { .. } => ErrorCode::Prediction,
            EvalError::MetricComputation { .. } => ErrorCode::MetricComputation,
            EvalError::Config(_) => ErrorCode::Config,
            EvalError::Serialization(_) => ErrorCode::Serialization,
        }
    }

    pub(crate) fn prediction(model: impl Into<String>, source: ModelError) -> Self {
        Self::Prediction {
            model: model.into(),
            source,
        }
    }

    pub(crate) fn metric(metric: impl Into<String>, source: MetricError) -> Self {
        Self::MetricComputation {
            metric: metric.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Serialization(err.to_string())
    }
}
