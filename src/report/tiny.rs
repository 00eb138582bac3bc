//! Small-key latency scenario.

use serde::{Deserialize, Serialize};

use crate::constants::TINY_TRIALS;
use crate::routine::Routine;
use crate::speed::speed_test;

/// Result of the small-key latency scenario.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TinyReport {
    /// Key size in bytes.
    pub key_size: usize,
    /// Trials executed.
    pub trials: usize,
    /// Filtered mean cycles per invocation.
    pub cycles_per_hash: f64,
}

impl TinyReport {
    /// True when the cycle counter produced no usable samples.
    pub fn timing_unavailable(&self) -> bool {
        self.cycles_per_hash.is_nan()
    }
}

/// Measure per-invocation latency on a fixed small key size.
///
/// Runs a very high trial count at alignment 0; keys below the batching
/// cutoff are timed in serialized batches, so the reported figure stays
/// meaningful even when a single call is shorter than the timer overhead.
pub fn tiny_speed_test<R: Routine + ?Sized>(routine: &R, key_size: usize, seed: u32) -> TinyReport {
    let cycles_per_hash = speed_test(routine, seed, TINY_TRIALS, key_size, 0);

    TinyReport {
        key_size,
        trials: TINY_TRIALS,
        cycles_per_hash,
    }
}
