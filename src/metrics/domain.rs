//! Metric function handle shared between the registry and evaluators.

use std::fmt;
use std::sync::Arc;

use crate::common::error::MetricError;

/// Signature every metric function satisfies: `(ground_truth, predicted) -> score`.
pub type MetricFunction = dyn Fn(&[f64], &[f64]) -> Result<f64, MetricError> + Send + Sync;

/// Named, cheaply clonable handle to a [`MetricFunction`].
///
/// Clones share the underlying function, so [`MetricFn::same_as`] can tell
/// whether two handles came from the same registration.
#[derive(Clone)]
pub struct MetricFn {
    name: Arc<str>,
    func: Arc<MetricFunction>,
}

impl MetricFn {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[f64], &[f64]) -> Result<f64, MetricError> + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the metric. The result is returned exactly as the function produced it.
    pub fn call(&self, truth: &[f64], predicted: &[f64]) -> Result<f64, MetricError> {
        (self.func)(truth, predicted)
    }

    /// Whether both handles point at the same function instance.
    pub fn same_as(&self, other: &MetricFn) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for MetricFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricFn").field("name", &self.name).finish()
    }
}
