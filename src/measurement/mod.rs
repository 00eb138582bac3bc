//! Measurement infrastructure for the benchmarking harness.
//!
//! This module provides:
//! - Cycle counter access with platform-specific implementations
//! - Invocation timing in direct and batched/serialized modes
//!
//! # Timing discipline
//!
//! Raw durations come from the hardware cycle counter:
//! - **x86_64**: `lfence; rdtsc`
//! - **aarch64**: `isb; mrs cntvct_el0`
//!
//! On targets without a counter, every read returns 0 and all samples are
//! discarded as invalid; the driver then reports the NaN "timing
//! unavailable" sentinel instead of fabricating numbers.
//!
//! Workloads under 100 bytes are too short for a single timed call — the
//! timer's own overhead dominates — so they are measured as serialized
//! 200-call batches and averaged (see [`time_invocation_small`]).

mod invocation;
mod timer;

pub use invocation::{time_invocation, time_invocation_small, time_routine};
pub use timer::{black_box, counter_available, rdtsc};
