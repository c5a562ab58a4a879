//! Logging setup and the structured event helper used by services.

use tracing_subscriber::EnvFilter;

use super::config::EvalCfg;

/// Install the global `tracing` subscriber described by `cfg`.
///
/// Returns `false` when a subscriber was already installed, so repeated calls
/// (tests, embedding applications) are harmless.
pub fn init(cfg: &EvalCfg) -> bool {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.log_json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Emit one structured event with the documented field set.
pub fn log_event(module: &str, event: &str, code: u32, dur_ms: u128) {
    let dur_ms = u64::try_from(dur_ms).unwrap_or(u64::MAX);
    tracing::info!(module, event, code, dur_ms, "evalkit event");
}
