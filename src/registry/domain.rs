//! Kind-to-metric registry, the single extension point of the framework.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::common::error::{EvalError, EvalResult};
use crate::metrics::domain::MetricFn;
use crate::metrics::service::{accuracy_fn, r2_fn};
use crate::model::domain::ModelKind;

/// Mapping from [`ModelKind`] to the metric used to score models of that kind.
///
/// Registration takes the write lock; resolution only shares the read lock,
/// so lookups from many threads proceed in parallel once registration is done.
#[derive(Default)]
pub struct ModelKindRegistry {
    entries: RwLock<HashMap<ModelKind, MetricFn>>,
}

impl ModelKindRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `classifier -> accuracy` and `regressor -> r2`.
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert(ModelKind::classifier(), accuracy_fn());
        entries.insert(ModelKind::regressor(), r2_fn());
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Associate `metric` with `kind`. Fails if the kind is already registered.
    pub fn register(&self, kind: impl Into<ModelKind>, metric: MetricFn) -> EvalResult<()> {
        let kind = kind.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&kind) {
            return Err(EvalError::DuplicateKind(kind));
        }
        tracing::debug!(kind = %kind, metric = metric.name(), "registered model kind");
        entries.insert(kind, metric);
        Ok(())
    }

    /// Associate `metric` with `kind`, replacing any existing registration.
    ///
    /// Returns the metric that was replaced.
    pub fn register_override(&self, kind: impl Into<ModelKind>, metric: MetricFn) -> Option<MetricFn> {
        let kind = kind.into();
        tracing::debug!(kind = %kind, metric = metric.name(), "overriding model kind");
        self.entries.write().insert(kind, metric)
    }

    /// The metric registered for `kind`.
    pub fn resolve(&self, kind: &ModelKind) -> EvalResult<MetricFn> {
        self.entries
            .read()
            .get(kind)
            .cloned()
            .ok_or_else(|| EvalError::UnknownKind(kind.clone()))
    }

    pub fn contains(&self, kind: &ModelKind) -> bool {
        self.entries.read().contains_key(kind)
    }

    /// Registered kinds, sorted. Diagnostics only.
    pub fn kinds(&self) -> Vec<ModelKind> {
        let mut kinds: Vec<ModelKind> = self.entries.read().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
