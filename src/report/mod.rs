//! Scenario wrappers over the benchmark driver.
//!
//! Each scenario parametrizes [`speed_test`](crate::speed_test) for one
//! measurement shape and packages the numbers into a serde-serializable
//! report:
//! - [`bulk_speed_test`] — large-block throughput across alignment offsets
//! - [`tiny_speed_test`] — small-key per-invocation latency
//! - [`hashmap_speed_test`] — associative-container workload with the
//!   routine injected as the table's hash strategy
//!
//! Human-readable formatting lives in [`crate::output`].

mod bulk;
mod hashmap;
mod tiny;

pub use bulk::{bulk_speed_test, AlignmentThroughput, BulkReport};
pub use hashmap::{hashmap_speed_test, HashMapReport, RoutineBuildHasher, RoutineHasher};
pub use tiny::{tiny_speed_test, TinyReport};
