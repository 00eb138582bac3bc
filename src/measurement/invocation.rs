//! Timing of individual routine invocations.
//!
//! Two modes, selected by workload size:
//!
//! - **Direct**: one invocation bracketed by two counter reads. Used when the
//!   workload is large enough that the call dwarfs the timer's own overhead.
//! - **Batched/serialized**: for small workloads, 200 invocations are chained
//!   through a data dependency (a digest byte feeds the next seed and input)
//!   and timed as a whole, amortizing timer overhead across the batch. The
//!   dependency keeps an out-of-order core from overlapping the calls; it is
//!   a best-effort serialization device, not a hard guarantee.
//!
//! Both timing functions are `#[inline(never)]` so the clock reads and the
//! intervening call execute in program order and are not merged or hoisted
//! across the function boundary.

use crate::constants::{BATCH_CALLS, DIGEST_SCRATCH_LEN, SMALL_KEY_CUTOFF};
use crate::routine::Routine;

use super::timer::{black_box, rdtsc};

/// Time exactly one invocation of `routine` on `input`.
///
/// Returns the elapsed cycles; 0 means the sample is invalid (counter
/// unavailable or non-monotonic read) and must be dropped by the caller.
#[inline(never)]
pub fn time_invocation<R: Routine + ?Sized>(routine: &R, input: &[u8], seed: u32) -> u64 {
    let mut out = [0u8; DIGEST_SCRATCH_LEN];

    let begin = rdtsc();
    routine.hash(black_box(input), black_box(seed), black_box(&mut out));
    let end = rdtsc();

    black_box(&out);
    end.saturating_sub(begin)
}

/// Time a serialized batch of [`BATCH_CALLS`] invocations on a small key,
/// returning the fractional mean cycles per call.
///
/// The key is copied into a private buffer so the feedback byte can be
/// folded into it between calls. A non-positive return means the batch could
/// not be timed and the sample must be dropped.
#[inline(never)]
pub fn time_invocation_small<R: Routine + ?Sized>(routine: &R, input: &[u8], seed: u32) -> f64 {
    let mut buf = input.to_vec();
    let mut out = [0u8; DIGEST_SCRATCH_LEN];
    let mut seed = seed;

    let begin = rdtsc();

    for _ in 0..BATCH_CALLS {
        routine.hash(&buf, seed, &mut out);
        // Chain a digest byte into the next seed and input so successive
        // invocations cannot be evaluated in parallel.
        let feedback = out[0];
        seed = seed.wrapping_add(u32::from(feedback));
        if let Some(first) = buf.first_mut() {
            *first ^= feedback;
        }
    }

    let end = rdtsc();

    black_box(&out);
    end.saturating_sub(begin) as f64 / BATCH_CALLS as f64
}

/// Produce one duration sample for `input`, selecting the timing mode by
/// workload size.
///
/// Workloads under [`SMALL_KEY_CUTOFF`] bytes use the batched mode; larger
/// ones are timed directly. Non-positive samples are invalid.
#[inline]
pub fn time_routine<R: Routine + ?Sized>(routine: &R, input: &[u8], seed: u32) -> f64 {
    if input.len() < SMALL_KEY_CUTOFF {
        time_invocation_small(routine, input, seed)
    } else {
        time_invocation(routine, input, seed) as f64
    }
}
