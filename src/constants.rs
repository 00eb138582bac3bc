//! Measurement constants shared across the harness.

/// Reference clock speed used to convert bytes/cycle into MiB/sec.
///
/// This is a normalization constant for comparable throughput figures, not a
/// measurement of the machine's actual clock.
pub const REFERENCE_CLOCK_HZ: f64 = 3_000_000_000.0;

/// Bytes per mebibyte, for throughput conversion.
pub const BYTES_PER_MIB: f64 = 1_048_576.0;

/// Workloads below this many bytes are timed in serialized batches, because
/// a single invocation is too short for the timer's own overhead.
pub const SMALL_KEY_CUTOFF: usize = 100;

/// Number of chained invocations per batched measurement.
pub const BATCH_CALLS: usize = 200;

/// Slack reserved past the requested block size so the timed window can be
/// placed at any alignment offset within a 256-byte boundary.
pub const ALIGNMENT_SLACK: usize = 512;

/// Scratch bytes handed to a routine for its digest output.
pub const DIGEST_SCRATCH_LEN: usize = 64;

/// A sample is an outlier when it exceeds the mean by this many standard
/// deviations.
pub const OUTLIER_SIGMA: f64 = 3.0;

/// Passes of the iterative-narrowing outlier filter.
pub const NARROWING_PASSES: usize = 10;

/// Block size for the bulk throughput scenario. 256 KiB blocks give the most
/// stable results.
pub const BULK_BLOCK_SIZE: usize = 256 * 1024;

/// Trials per alignment in the bulk throughput scenario.
pub const BULK_TRIALS: usize = 2999;

/// Alignment offsets swept by the bulk throughput scenario (0..8).
pub const BULK_ALIGNMENTS: usize = 8;

/// Trials in the small-key latency scenario.
pub const TINY_TRIALS: usize = 99_999;
