//! Runtime configuration loaded from the environment or a JSON document.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{EvalError, EvalResult};

const DEFAULT_LOG_FILTER: &str = "evalkit=info";
pub const DEFAULT_SCORE_PRECISION: usize = 4;
/// Upper bound on `score_precision`; f64 carries at most 17 significant digits.
pub const MAX_SCORE_PRECISION: usize = 17;

/// Snapshot of configuration values consumed by the core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalCfg {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Emit JSON lines instead of human readable output.
    pub log_json: bool,
    /// Digits used when scores are rendered in log lines.
    pub score_precision: usize,
    /// Seed the shared registry with the classifier and regressor metrics.
    pub seed_defaults: bool,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            score_precision: DEFAULT_SCORE_PRECISION,
            seed_defaults: true,
        }
    }
}

impl EvalCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> EvalResult<Self> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`EvalCfg::load`] with a caller supplied variable lookup.
    pub fn load_with<F>(lookup: F) -> EvalResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_filter: lookup("EVALKIT_LOG").unwrap_or(defaults.log_filter),
            log_json: parse_or(&lookup, "EVALKIT_LOG_JSON", defaults.log_json)?,
            score_precision: parse_or(
                &lookup,
                "EVALKIT_SCORE_PRECISION",
                defaults.score_precision,
            )?,
            seed_defaults: parse_or(&lookup, "EVALKIT_SEED_DEFAULTS", defaults.seed_defaults)?,
        }
        .validated()
    }

    /// Parse a JSON document; absent keys keep their defaults.
    pub fn from_json(raw: &str) -> EvalResult<Self> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|err| EvalError::Config(err.to_string()))?;
        cfg.validated()
    }

    fn validated(self) -> EvalResult<Self> {
        if self.score_precision > MAX_SCORE_PRECISION {
            return Err(EvalError::Config(format!(
                "score_precision: {} exceeds {MAX_SCORE_PRECISION}",
                self.score_precision
            )));
        }
        Ok(self)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> EvalResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| EvalError::Config(format!("{key}: cannot parse `{raw}`"))),
    }
}
