//! Process-wide registry shared by every evaluator built with [`Evaluator::new`].
//!
//! [`Evaluator::new`]: crate::evaluation::Evaluator::new

use once_cell::sync::Lazy;

use crate::common::config::EvalCfg;
use crate::common::error::EvalResult;
use crate::metrics::domain::MetricFn;
use crate::model::domain::ModelKind;

use super::domain::ModelKindRegistry;

static GLOBAL: Lazy<ModelKindRegistry> = Lazy::new(|| seeded(EvalCfg::load()));

/// Registry built from a loaded configuration. An invalid configuration
/// falls back to the default seeding.
fn seeded(cfg: EvalResult<EvalCfg>) -> ModelKindRegistry {
    let seed_defaults = match cfg {
        Ok(cfg) => cfg.seed_defaults,
        Err(err) => {
            tracing::warn!(error = %err, "invalid configuration, seeding registry defaults");
            true
        }
    };
    if seed_defaults {
        ModelKindRegistry::with_defaults()
    } else {
        ModelKindRegistry::new()
    }
}

/// The shared registry, created on first use.
pub fn global() -> &'static ModelKindRegistry {
    &GLOBAL
}

/// Register a kind in the shared registry.
pub fn register(kind: impl Into<ModelKind>, metric: MetricFn) -> EvalResult<()> {
    global().register(kind, metric)
}

/// Resolve a kind through the shared registry.
pub fn resolve(kind: &ModelKind) -> EvalResult<MetricFn> {
    global().resolve(kind)
}
