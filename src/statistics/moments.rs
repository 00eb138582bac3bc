//! Mean and standard deviation over sample populations.
//!
//! Ranged variants are expressed by slicing: `mean(&v[a..=b])`.

/// Arithmetic mean of a sample population.
///
/// Returns NaN for an empty population — the "timing unavailable" sentinel
/// when every trial was discarded.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divide by n, not n − 1).
///
/// A single-element population has a standard deviation of 0; an empty one
/// yields NaN.
pub fn stdev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }

    let m = mean(samples);
    let sum_sq: f64 = samples.iter().map(|&x| (x - m) * (x - m)).sum();
    (sum_sq / samples.len() as f64).sqrt()
}
