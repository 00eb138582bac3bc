//! The benchmark driver: trial orchestration over a workload buffer.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::Config;
use crate::constants::ALIGNMENT_SLACK;
use crate::measurement::time_routine;
use crate::routine::Routine;
use crate::statistics::{mean, FilterPolicy};

/// Driver for a configurable benchmark run.
///
/// Builder methods mirror the fields of [`Config`]; [`run`](SpeedTest::run)
/// executes the trials and returns the filtered mean cycles per invocation.
///
/// # Example
///
/// ```no_run
/// use cyclebench::SpeedTest;
///
/// let routine = |input: &[u8], seed: u32, out: &mut [u8]| {
///     let mut acc = u64::from(seed);
///     for &b in input {
///         acc = acc.wrapping_mul(0x100000001b3) ^ u64::from(b);
///     }
///     out[..8].copy_from_slice(&acc.to_le_bytes());
/// };
///
/// let cycles = SpeedTest::new()
///     .trials(500)
///     .block_size(4096)
///     .run(&routine);
/// assert!(cycles.is_nan() || cycles > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpeedTest {
    config: Config,
}

impl SpeedTest {
    /// Create a driver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the number of timed trials.
    pub fn trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Set the workload size in bytes.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.config.block_size = block_size;
        self
    }

    /// Set the byte-alignment offset of the timed window. Must be below 256.
    pub fn align(mut self, align: usize) -> Self {
        self.config.align = align;
        self
    }

    /// Set the workload randomizer seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.config.seed = seed;
        self
    }

    /// Select the outlier-rejection policy.
    pub fn filter(mut self, filter: FilterPolicy) -> Self {
        self.config.filter = filter;
        self
    }

    /// Run the configured trials against `routine` and return the filtered
    /// mean duration of one invocation, in cycles.
    ///
    /// Returns NaN when no trial produced a valid sample — the documented
    /// "timing unavailable" result.
    pub fn run<R: Routine + ?Sized>(&self, routine: &R) -> f64 {
        let cfg = &self.config;
        assert!(cfg.align < 256, "alignment offset must be below 256");

        // Slack past the requested size lets the timed window start at the
        // requested offset within a 256-byte boundary.
        let mut buf = vec![0u8; cfg.block_size + ALIGNMENT_SLACK];
        let base = buf.as_ptr() as usize;
        let offset = ((base + 255) & !255) - base + cfg.align;

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(u64::from(cfg.seed));
        let mut times: Vec<f64> = Vec::with_capacity(cfg.trials);

        for trial in 0..cfg.trials {
            let block = &mut buf[offset..offset + cfg.block_size];
            rng.fill_bytes(block);

            let t = time_routine(routine, block, trial as u32);

            if t > 0.0 {
                times.push(t);
            }
        }

        cfg.filter.apply(&mut times);

        mean(&times)
    }
}

/// Convenience entry point: time `routine` over `trials` invocations on
/// random `block_size`-byte inputs at the given alignment offset, and return
/// the filtered mean cycles per invocation (NaN if timing is unavailable).
///
/// Uses the default bisection outlier filter; use [`SpeedTest`] to pick a
/// different policy.
pub fn speed_test<R: Routine + ?Sized>(
    routine: &R,
    seed: u32,
    trials: usize,
    block_size: usize,
    align: usize,
) -> f64 {
    SpeedTest::new()
        .seed(seed)
        .trials(trials)
        .block_size(block_size)
        .align(align)
        .run(routine)
}
