//! Cumulative histogram statistics
//!
//! Prefix sums over the bin counts let every criterion evaluate the
//! statistics of the two classes `[0, t]` and `(t, K)` in O(1) per
//! candidate `t`. Class sums are kept in count units (not probabilities)
//! so emptiness checks are exact.

use histthresh_core::Histogram;

/// Prefix sums of a histogram's counts and first two moments
pub(crate) struct Cumulative {
    /// `sum(count[0..=t])`
    count: Vec<u64>,
    /// Number of non-empty bins in `[0, t]`
    occupied: Vec<usize>,
    /// `sum(i * count[i])` over `[0, t]`
    first: Vec<f64>,
    /// `sum(i^2 * count[i])` over `[0, t]`
    second: Vec<f64>,
    total: u64,
}

impl Cumulative {
    pub(crate) fn new(hist: &Histogram) -> Self {
        let n = hist.len();
        let mut count = Vec::with_capacity(n);
        let mut occupied = Vec::with_capacity(n);
        let mut first = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);

        let (mut c, mut o, mut m1, mut m2) = (0u64, 0usize, 0.0f64, 0.0f64);
        for (i, &h) in hist.counts().iter().enumerate() {
            let x = i as f64;
            let w = h as f64;
            c += h;
            o += usize::from(h > 0);
            m1 += x * w;
            m2 += x * x * w;
            count.push(c);
            occupied.push(o);
            first.push(m1);
            second.push(m2);
        }

        Self {
            count,
            occupied,
            first,
            second,
            total: c,
        }
    }

    /// Number of bins
    pub(crate) fn len(&self) -> usize {
        self.count.len()
    }

    /// True when both classes at split `t` hold samples
    pub(crate) fn splits(&self, t: usize) -> bool {
        self.count[t] > 0 && self.count[t] < self.total
    }

    pub(crate) fn lower_count(&self, t: usize) -> u64 {
        self.count[t]
    }

    pub(crate) fn upper_count(&self, t: usize) -> u64 {
        self.total - self.count[t]
    }

    /// Prior probability of the lower class
    pub(crate) fn lower_mass(&self, t: usize) -> f64 {
        self.count[t] as f64 / self.total as f64
    }

    /// Prior probability of the upper class
    pub(crate) fn upper_mass(&self, t: usize) -> f64 {
        self.upper_count(t) as f64 / self.total as f64
    }

    pub(crate) fn lower_occupied(&self, t: usize) -> usize {
        self.occupied[t]
    }

    pub(crate) fn upper_occupied(&self, t: usize) -> usize {
        self.occupied[self.len() - 1] - self.occupied[t]
    }

    /// Mean bin index of the lower class
    pub(crate) fn lower_mean(&self, t: usize) -> Option<f64> {
        let n = self.lower_count(t);
        (n > 0).then(|| self.first[t] / n as f64)
    }

    /// Mean bin index of the upper class
    pub(crate) fn upper_mean(&self, t: usize) -> Option<f64> {
        let n = self.upper_count(t);
        let last = self.len() - 1;
        (n > 0).then(|| (self.first[last] - self.first[t]) / n as f64)
    }

    /// Variance (in squared bins) of the lower class
    pub(crate) fn lower_variance(&self, t: usize) -> Option<f64> {
        let n = self.lower_count(t) as f64;
        let mean = self.lower_mean(t)?;
        Some((self.second[t] / n - mean * mean).max(0.0))
    }

    /// Variance (in squared bins) of the upper class
    pub(crate) fn upper_variance(&self, t: usize) -> Option<f64> {
        let n = self.upper_count(t) as f64;
        let mean = self.upper_mean(t)?;
        let last = self.len() - 1;
        Some(((self.second[last] - self.second[t]) / n - mean * mean).max(0.0))
    }
}

/// `x * ln(x)` with `0 * ln(0) = 0`
#[inline]
pub(crate) fn xlnx(x: f64) -> f64 {
    if x > 0.0 { x * x.ln() } else { 0.0 }
}

/// Running sums: `out[i] = sum(values[0..=i])`
pub(crate) fn prefix_sums(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut acc = 0.0;
    values
        .into_iter()
        .map(|v| {
            acc += v;
            acc
        })
        .collect()
}
