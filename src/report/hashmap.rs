//! Associative-container workload scenario.
//!
//! Builds a `HashMap` keyed by a word list, with the routine under test
//! injected as the table's hash strategy, then times a bulk insert pass and
//! repeated full-scan lookups. The hash strategy is a capability parameter
//! supplied at construction ([`RoutineBuildHasher`]), not state captured
//! inside the table.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::DIGEST_SCRATCH_LEN;
use crate::measurement::{black_box, rdtsc};
use crate::routine::Routine;
use crate::statistics::{mean, FilterPolicy};

/// Hash strategy that delegates to a routine under test.
///
/// Supplied to `HashMap::with_capacity_and_hasher`, making the routine the
/// table's hash function.
#[derive(Debug)]
pub struct RoutineBuildHasher<'a, R: ?Sized> {
    routine: &'a R,
    seed: u32,
}

impl<'a, R: ?Sized> RoutineBuildHasher<'a, R> {
    /// Inject `routine` as a table hash strategy under `seed`.
    pub fn new(routine: &'a R, seed: u32) -> Self {
        Self { routine, seed }
    }
}

impl<R: ?Sized> Clone for RoutineBuildHasher<'_, R> {
    fn clone(&self) -> Self {
        Self {
            routine: self.routine,
            seed: self.seed,
        }
    }
}

impl<'a, R: Routine + ?Sized> BuildHasher for RoutineBuildHasher<'a, R> {
    type Hasher = RoutineHasher<'a, R>;

    fn build_hasher(&self) -> Self::Hasher {
        RoutineHasher {
            routine: self.routine,
            seed: self.seed,
            buf: Vec::new(),
        }
    }
}

/// `Hasher` adapter over a routine under test.
///
/// The std `Hasher` contract streams bytes; the routine contract wants one
/// contiguous input. Written bytes are accumulated and the routine runs once
/// at [`finish`](Hasher::finish), with the first `min(digest_len, 8)` digest
/// bytes forming the table hash, little-endian.
#[derive(Debug)]
pub struct RoutineHasher<'a, R: ?Sized> {
    routine: &'a R,
    seed: u32,
    buf: Vec<u8>,
}

impl<R: Routine + ?Sized> Hasher for RoutineHasher<'_, R> {
    fn write(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    fn finish(&self) -> u64 {
        let mut out = [0u8; DIGEST_SCRATCH_LEN];
        self.routine.hash(&self.buf, self.seed, &mut out);

        let mut key = [0u8; 8];
        let n = self.routine.digest_len().min(8);
        key[..n].copy_from_slice(&out[..n]);
        u64::from_le_bytes(key)
    }
}

/// Result of the associative-container workload scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashMapReport {
    /// Words inserted into the table.
    pub word_count: usize,
    /// Lookup trials executed.
    pub trials: usize,
    /// Cycles per operation for the insert pass (with 1% deletes).
    pub init_cycles_per_op: f64,
    /// Filtered mean cycles per lookup.
    pub lookup_cycles_per_op: f64,
}

impl HashMapReport {
    /// True when the cycle counter produced no usable lookup samples.
    pub fn timing_unavailable(&self) -> bool {
        self.lookup_cycles_per_op.is_nan()
    }
}

/// Time a hash-keyed mapping workload with `routine` as the table's hash
/// function.
///
/// The insert pass adds every word and deletes one per hundred, timed as one
/// region and reported as cycles per word. Each lookup trial scans the full
/// word list against the table; per-operation samples are filtered with the
/// default policy before the mean is taken. An empty word list yields NaN
/// throughout.
pub fn hashmap_speed_test<R: Routine + ?Sized>(
    routine: &R,
    words: &[String],
    trials: usize,
    seed: u32,
) -> HashMapReport {
    if words.is_empty() {
        return HashMapReport {
            word_count: 0,
            trials,
            init_cycles_per_op: f64::NAN,
            lookup_cycles_per_op: f64::NAN,
        };
    }

    let build = RoutineBuildHasher::new(routine, seed);
    let mut map: HashMap<&str, u32, _> = HashMap::with_capacity_and_hasher(words.len(), build);

    // Insert pass with 1% deletes, timed as a single region.
    let begin = rdtsc();
    for (i, word) in words.iter().enumerate() {
        map.insert(word.as_str(), 1);
        if i % 100 == 0 {
            map.remove(word.as_str());
        }
    }
    let end = rdtsc();
    let init_cycles_per_op = end.saturating_sub(begin) as f64 / words.len() as f64;

    let mut times: Vec<f64> = Vec::with_capacity(trials);

    for _ in 0..trials {
        let mut found = 0u32;

        let begin = rdtsc();
        for word in words {
            if map.contains_key(word.as_str()) {
                found += 1;
            }
        }
        let end = rdtsc();

        black_box(found);

        let t = end.saturating_sub(begin) as f64 / words.len() as f64;
        if t > 0.0 {
            times.push(t);
        }
    }

    FilterPolicy::default().apply(&mut times);

    HashMapReport {
        word_count: words.len(),
        trials,
        init_cycles_per_op,
        lookup_cycles_per_op: mean(&times),
    }
}
