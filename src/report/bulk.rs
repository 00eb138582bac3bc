//! Bulk throughput scenario: large blocks, swept alignment offsets.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BULK_ALIGNMENTS, BULK_BLOCK_SIZE, BULK_TRIALS, BYTES_PER_MIB, REFERENCE_CLOCK_HZ,
};
use crate::measurement::black_box;
use crate::routine::Routine;
use crate::speed::speed_test;

/// Throughput at one alignment offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlignmentThroughput {
    /// Byte offset of the timed block past a 256-byte boundary.
    pub align: usize,
    /// Bytes processed per cycle.
    pub bytes_per_cycle: f64,
    /// Throughput at the reference clock, in MiB/sec.
    pub mib_per_sec: f64,
}

/// Result of the bulk throughput scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkReport {
    /// Block size used for every trial.
    pub block_size: usize,
    /// Trials per alignment.
    pub trials: usize,
    /// One entry per alignment offset, in sweep order (7 down to 0).
    pub per_alignment: Vec<AlignmentThroughput>,
    /// Mean bytes/cycle across all alignments.
    pub average_bytes_per_cycle: f64,
    /// Mean throughput across all alignments at the reference clock.
    pub average_mib_per_sec: f64,
}

impl BulkReport {
    /// True when the cycle counter produced no usable samples.
    pub fn timing_unavailable(&self) -> bool {
        self.average_bytes_per_cycle.is_nan()
    }
}

/// Convert a bytes/cycle figure into MiB/sec at the reference clock.
///
/// The 3 GHz clock is a normalization constant for comparable numbers, not a
/// measurement of the actual clock speed.
fn to_mib_per_sec(bytes_per_cycle: f64) -> f64 {
    bytes_per_cycle * REFERENCE_CLOCK_HZ / BYTES_PER_MIB
}

/// Measure bulk throughput: 256 KiB blocks, alignment offsets 7 down to 0.
///
/// A first run at alignment 0 warms caches and frequency scaling and is
/// discarded. Reported figures are bytes/cycle per alignment plus the
/// average, with MiB/sec derived at the reference clock.
pub fn bulk_speed_test<R: Routine + ?Sized>(routine: &R, seed: u32) -> BulkReport {
    // Warm-up pass; result intentionally discarded.
    black_box(speed_test(routine, seed, BULK_TRIALS, BULK_BLOCK_SIZE, 0));

    let mut per_alignment = Vec::with_capacity(BULK_ALIGNMENTS);
    let mut sum_bpc = 0.0;

    for align in (0..BULK_ALIGNMENTS).rev() {
        let cycles = speed_test(routine, seed, BULK_TRIALS, BULK_BLOCK_SIZE, align);
        let bytes_per_cycle = BULK_BLOCK_SIZE as f64 / cycles;

        per_alignment.push(AlignmentThroughput {
            align,
            bytes_per_cycle,
            mib_per_sec: to_mib_per_sec(bytes_per_cycle),
        });
        sum_bpc += bytes_per_cycle;
    }

    let average_bytes_per_cycle = sum_bpc / BULK_ALIGNMENTS as f64;

    BulkReport {
        block_size: BULK_BLOCK_SIZE,
        trials: BULK_TRIALS,
        per_alignment,
        average_bytes_per_cycle,
        average_mib_per_sec: to_mib_per_sec(average_bytes_per_cycle),
    }
}
