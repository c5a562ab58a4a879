//! Model capability contract and kind identifiers.

pub mod domain;

pub use domain::{DeclaredKind, EvaluableModel, ModelKind};
