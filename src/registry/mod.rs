//! Registry mapping model kinds to metric functions.

pub mod domain;
pub mod service;

pub use domain::ModelKindRegistry;
pub use service::global;
