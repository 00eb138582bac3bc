//! Configuration for a benchmark run.

use crate::statistics::FilterPolicy;

/// Per-run parameters for the [`SpeedTest`](crate::SpeedTest) driver.
///
/// Created once per run and never mutated while trials execute.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of timed trials (default: 2,999).
    pub trials: usize,

    /// Workload size in bytes (default: 256 KiB).
    pub block_size: usize,

    /// Byte offset of the timed window past a 256-byte boundary
    /// (default: 0). Must be below 256.
    pub align: usize,

    /// Seed for the workload randomizer (default: 0).
    ///
    /// This seeds only input generation; each trial passes its trial index
    /// to the routine as the hash seed.
    pub seed: u32,

    /// Outlier-rejection policy (default: bisection).
    pub filter: FilterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: crate::constants::BULK_TRIALS,
            block_size: crate::constants::BULK_BLOCK_SIZE,
            align: 0,
            seed: 0,
            filter: FilterPolicy::default(),
        }
    }
}
