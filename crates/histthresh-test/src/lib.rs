//! histthresh-test - Regression test support for histthresh
//!
//! This crate provides:
//!
//! - [`RegParams`] - an accumulating comparison harness: every check is
//!   recorded, and [`RegParams::cleanup`] reports all failures at once
//! - deterministic histogram and sample fixtures
//! - a stderr logger driven by `HISTTHRESH_LOG`
//!
//! # Usage
//!
//! ```ignore
//! use histthresh_test::{RegParams, two_clusters};
//!
//! let mut rp = RegParams::new("yen");
//! let sel = yen(&two_clusters(20, 4, 14)).unwrap();
//! rp.check_between(4, 14, sel.bin);
//! assert!(rp.cleanup());
//! ```

mod logger;
mod params;

pub use logger::{init_logger, init_logger_from_env, level_from_env};
pub use params::RegParams;

use histthresh_core::Histogram;

/// Histogram over `[0, counts.len()]`, so each bin is one unit wide
///
/// Panics if every count is zero.
pub fn histogram_from_counts(counts: &[u64]) -> Histogram {
    Histogram::from_counts(counts.to_vec(), 0.0, counts.len() as f64)
        .expect("fixture counts must not all be zero")
}

/// All `count` samples in bin `at` of a `bins`-bin histogram
pub fn spike(bins: usize, at: usize, count: u64) -> Histogram {
    let mut counts = vec![0u64; bins];
    counts[at] = count;
    histogram_from_counts(&counts)
}

/// Two `[25, 50, 25]` clusters centered on `low` and `high`
///
/// Both centers need a free bin on each side.
pub fn two_clusters(bins: usize, low: usize, high: usize) -> Histogram {
    let mut counts = vec![0u64; bins];
    for center in [low, high] {
        counts[center - 1] += 25;
        counts[center] += 50;
        counts[center + 1] += 25;
    }
    histogram_from_counts(&counts)
}

/// Strictly decreasing counts `bins, bins - 1, ..., 1`
pub fn monotonic(bins: usize) -> Histogram {
    let counts: Vec<u64> = (1..=bins as u64).rev().collect();
    histogram_from_counts(&counts)
}

/// Ten-bin histogram with modes near both ends and an empty valley
pub fn bimodal_ten() -> Histogram {
    histogram_from_counts(&[10, 8, 2, 0, 0, 0, 2, 8, 10, 5])
}

/// Ten-bin histogram peaking at bin 2 with a thin tail reaching bin 9
pub fn peak_with_tail() -> Histogram {
    histogram_from_counts(&[0, 0, 100, 80, 60, 40, 25, 15, 8, 4])
}

/// Integer samples in `0..=255` drawn from two Gaussian profiles
///
/// Each integer `v` appears `round(peak * g1(v)) + round(peak * g2(v))`
/// times, where `g` is an unnormalized Gaussian with the given mean and
/// standard deviation.
pub fn gaussian_mixture_samples(means: (f64, f64), sigma: f64, peak: f64) -> Vec<f64> {
    let profile = |v: f64, mean: f64| {
        let d = v - mean;
        (peak * (-(d * d) / (2.0 * sigma * sigma)).exp()).round() as usize
    };
    let mut samples = Vec::new();
    for v in 0..=255u32 {
        let v = v as f64;
        let n = profile(v, means.0) + profile(v, means.1);
        samples.extend(std::iter::repeat_n(v, n));
    }
    samples
}
