//! Simple time helpers used by the evaluation service.

use std::time::Instant;

/// Milliseconds elapsed since `start`, measured on the monotonic clock.
pub fn elapsed_ms(start: Instant) -> u128 {
    start.elapsed().as_millis()
}
