//! Statistical methods for timing sample populations.
//!
//! This module provides the harness's entire statistical surface:
//! - Arithmetic mean and population standard deviation
//! - Three-sigma outlier rejection with two selectable policies

mod moments;
mod outliers;

pub use moments::{mean, stdev};
pub use outliers::{filter_outliers, filter_outliers_narrowing, FilterPolicy};
