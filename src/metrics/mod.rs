//! Metric functions and the handle type used to pass them around.

pub mod domain;
pub mod service;

pub use domain::{MetricFn, MetricFunction};
pub use service::{accuracy_fn, mae_fn, mse_fn, r2_fn};
