//! # cyclebench
//!
//! A statistically robust micro-benchmarking harness for hash routines.
//!
//! The harness measures the per-invocation cost of a pluggable routine in
//! CPU cycles, filtering out timing samples contaminated by scheduling
//! noise or cache effects, and reports a stable central-tendency estimate:
//! cycles per invocation, plus derived throughput.
//!
//! The measurement discipline is the design surface, not the routine being
//! measured:
//! - cycle-accurate durations despite compiler reordering, via serialized
//!   counter reads and `black_box` boundaries
//! - serialized batching for sub-microsecond workloads where the timer's
//!   own overhead would dominate a single call
//! - three-sigma outlier rejection over the sorted sample population, with
//!   no manual threshold tuning
//!
//! ## Quick start
//!
//! ```no_run
//! use cyclebench::{speed_test, SpeedTest};
//!
//! let routine = |input: &[u8], seed: u32, out: &mut [u8]| {
//!     let mut acc = u64::from(seed);
//!     for &b in input {
//!         acc = acc.wrapping_mul(0x100000001b3) ^ u64::from(b);
//!     }
//!     out[..8].copy_from_slice(&acc.to_le_bytes());
//! };
//!
//! // One-shot: 1000 trials on 4 KiB random blocks.
//! let cycles = speed_test(&routine, 0, 1000, 4096, 0);
//! println!("{cycles:8.2} cycles/hash");
//!
//! // Configured run via the builder.
//! let cycles = SpeedTest::new()
//!     .trials(1000)
//!     .block_size(64)
//!     .run(&routine);
//!
//! // NaN means the cycle counter is unavailable on this target.
//! if cycles.is_nan() {
//!     eprintln!("timing unavailable");
//! }
//! ```
//!
//! ## Scenarios
//!
//! Three thin wrappers parametrize the driver for common shapes and return
//! serde-serializable reports (see [`report`]): bulk throughput over
//! alignment offsets, small-key latency, and an associative-container
//! workload with the routine injected as the table's hash strategy.
//! [`output::terminal`] and [`output::json`] format the reports.
//!
//! Timing is intentionally single-threaded: parallelism is the interference
//! being guarded against.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod routine;
mod speed;

// Functional modules
pub mod measurement;
pub mod output;
pub mod report;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use constants::{
    BATCH_CALLS, BULK_BLOCK_SIZE, BULK_TRIALS, DIGEST_SCRATCH_LEN, OUTLIER_SIGMA,
    REFERENCE_CLOCK_HZ, SMALL_KEY_CUTOFF, TINY_TRIALS,
};
pub use routine::Routine;
pub use speed::{speed_test, SpeedTest};
pub use statistics::FilterPolicy;
