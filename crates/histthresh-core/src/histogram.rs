//! Histogram construction and queries
//!
//! A [`Histogram`] is a fixed-width binning of the samples' observed value
//! range. It is immutable once built; a change of source, region or bin
//! count means building a new one.
//!
//! Construction reads the source twice: once for the range, once for the
//! counts. If every sample has the same value the histogram gets a bin
//! width of 1 and all samples land in bin 0.

use std::ops::Index;

use crate::error::{Error, Result};
use crate::mapper::ThresholdMapper;
use crate::region::Region;
use crate::source::SampleSource;

/// Default number of histogram bins
pub const DEFAULT_BINS: usize = 128;

/// Fixed-width intensity histogram
///
/// Invariants: `counts.len() >= 1`, `sum(counts) == total`, `total > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<u64>,
    min: f64,
    max: f64,
    bin_width: f64,
    total: u64,
}

impl Histogram {
    /// Create a histogram from pre-binned counts over `[min, max]`
    ///
    /// The bin width is `(max - min) / counts.len()`, or 1 when
    /// `min == max`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `counts` is empty, the range is
    ///   not finite with `min <= max`, or `max - min` overflows
    /// - [`Error::EmptyInput`] if every count is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use histthresh_core::Histogram;
    ///
    /// let hist = Histogram::from_counts(vec![2, 0, 5, 1], 0.0, 8.0).unwrap();
    /// assert_eq!(hist.len(), 4);
    /// assert_eq!(hist.total(), 8);
    /// assert_eq!(hist.bin_width(), 2.0);
    /// ```
    pub fn from_counts(counts: Vec<u64>, min: f64, max: f64) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidParameter(format!(
                "invalid histogram range [{}, {}]",
                min, max
            )));
        }
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Err(Error::EmptyInput);
        }
        let bin_width = bin_width_for(min, max, counts.len())?;
        Ok(Self {
            counts,
            min,
            max,
            bin_width,
            total,
        })
    }

    /// Number of bins
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false; a histogram has at least one bin
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Per-bin sample counts
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total sample count
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Smallest observed sample
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest observed sample
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of one bin in sample units
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Normalized bin probabilities, summing to 1
    pub fn probabilities(&self) -> Vec<f64> {
        let n = self.total as f64;
        self.counts.iter().map(|&c| c as f64 / n).collect()
    }

    /// Index of the first bin with a non-zero count
    pub fn first_occupied(&self) -> usize {
        self.counts.iter().position(|&c| c > 0).unwrap_or(0)
    }

    /// Index of the last bin with a non-zero count
    pub fn last_occupied(&self) -> usize {
        self.counts.iter().rposition(|&c| c > 0).unwrap_or(0)
    }

    /// Number of bins with a non-zero count
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True when all samples fall into a single bin
    pub fn is_degenerate(&self) -> bool {
        self.occupied_bins() <= 1
    }

    /// Probability-weighted mean bin index
    pub fn mean_bin(&self) -> f64 {
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum();
        weighted / self.total as f64
    }

    /// Mapper between bins and sample values for this histogram
    pub fn mapper(&self) -> ThresholdMapper {
        ThresholdMapper::from_parts(self.min, self.bin_width, self.counts.len())
    }

    /// Upper edge of bin `t` in sample units
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `t >= self.len()`.
    pub fn bin_to_value(&self, t: usize) -> Result<f64> {
        self.mapper().bin_to_value(t)
    }

    /// Bin containing `v`, clamped into `[0, len - 1]`
    pub fn value_to_bin(&self, v: f64) -> usize {
        self.mapper().value_to_bin(v)
    }
}

impl Index<usize> for Histogram {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.counts[index]
    }
}

/// Bin width for `bins` bins over `[min, max]`, 1 for a zero-width range
fn bin_width_for(min: f64, max: f64, bins: usize) -> Result<f64> {
    let span = max - min;
    if span == 0.0 {
        return Ok(1.0);
    }
    let width = span / bins as f64;
    if width > 0.0 && width.is_finite() {
        Ok(width)
    } else {
        Err(Error::InvalidParameter(format!(
            "sample range [{}, {}] too wide for {} bins",
            min, max, bins
        )))
    }
}

/// Builds a [`Histogram`] from a [`SampleSource`]
///
/// # Examples
///
/// ```
/// use histthresh_core::HistogramBuilder;
///
/// let samples = [0.0f64, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let hist = HistogramBuilder::new(4).build(&samples[..]).unwrap();
/// assert_eq!(hist.counts(), &[2, 2, 2, 3]);
/// assert_eq!(hist.bin_width(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBuilder {
    bins: usize,
    region: Option<Region>,
}

impl Default for HistogramBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BINS)
    }
}

impl HistogramBuilder {
    /// Builder producing `bins` bins over the whole source
    pub fn new(bins: usize) -> Self {
        Self { bins, region: None }
    }

    /// Restrict the samples read to `region`
    pub fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Configured bin count
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Configured region
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Build the histogram
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if the bin count is zero, the source
    ///   fails [`SampleSource::validate`], or the sample range overflows
    /// - [`Error::NonFiniteSample`] if a sample is NaN or infinite
    /// - [`Error::EmptyInput`] if the (region-restricted) source has no
    ///   samples
    pub fn build<S: SampleSource + ?Sized>(&self, source: &S) -> Result<Histogram> {
        if self.bins == 0 {
            return Err(Error::InvalidParameter("bins must be >= 1".to_string()));
        }
        source.validate()?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut n = 0usize;
        for (index, v) in source.samples(self.region.as_ref()).enumerate() {
            if !v.is_finite() {
                return Err(Error::NonFiniteSample { index });
            }
            min = min.min(v);
            max = max.max(v);
            n += 1;
        }
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let bin_width = bin_width_for(min, max, self.bins)?;
        let mapper = ThresholdMapper::from_parts(min, bin_width, self.bins);
        let mut counts = vec![0u64; self.bins];
        for v in source.samples(self.region.as_ref()) {
            counts[mapper.value_to_bin(v)] += 1;
        }
        let total = counts.iter().sum();

        log::debug!(
            "histogram: {} samples, {} bins over [{}, {}], width {}",
            total,
            self.bins,
            min,
            max,
            bin_width
        );

        Ok(Histogram {
            counts,
            min,
            max,
            bin_width,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SampleGrid;

    #[test]
    fn test_from_counts_validation() {
        assert!(matches!(
            Histogram::from_counts(vec![], 0.0, 1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(
            Histogram::from_counts(vec![0, 0, 0], 0.0, 1.0),
            Err(Error::EmptyInput)
        );
        assert!(Histogram::from_counts(vec![1], 2.0, 1.0).is_err());
        assert!(Histogram::from_counts(vec![1], 0.0, f64::NAN).is_err());
        assert!(matches!(
            Histogram::from_counts(vec![1, 1], -f64::MAX, f64::MAX),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_build_counts_sum_to_total() {
        let grid = SampleGrid::from_fn(17, 13, |x, y| ((x * 7 + y * 3) % 23) as u8);
        for bins in [1, 2, 7, 64, 128, 300] {
            let hist = HistogramBuilder::new(bins).build(&grid).unwrap();
            assert_eq!(hist.len(), bins);
            assert_eq!(hist.counts().iter().sum::<u64>(), hist.total());
            assert_eq!(hist.total(), 17 * 13);
            let psum: f64 = hist.probabilities().iter().sum();
            assert!((psum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_build_max_in_last_bin() {
        let samples = [0.0f64, 10.0];
        let hist = HistogramBuilder::new(5).build(&samples[..]).unwrap();
        assert_eq!(hist.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(hist.min(), 0.0);
        assert_eq!(hist.max(), 10.0);
        assert_eq!(hist.bin_width(), 2.0);
    }

    #[test]
    fn test_build_constant_input() {
        let samples = vec![42u16; 30];
        let hist = HistogramBuilder::new(16).build(&samples).unwrap();
        assert_eq!(hist[0], 30);
        assert_eq!(hist.bin_width(), 1.0);
        assert!(hist.is_degenerate());
        assert_eq!(hist.bin_to_value(0).unwrap(), 43.0);
    }

    #[test]
    fn test_build_empty() {
        let samples: [f32; 0] = [];
        assert_eq!(
            HistogramBuilder::new(8).build(&samples[..]),
            Err(Error::EmptyInput)
        );
        let grid = SampleGrid::from_fn(4, 4, |_, _| 1u8);
        let outside = Region::new_unchecked(8, 8, 2, 2);
        assert_eq!(
            HistogramBuilder::new(8)
                .with_region(Some(outside))
                .build(&grid),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_build_zero_bins() {
        let samples = [1.0f64, 2.0];
        assert!(HistogramBuilder::new(0).build(&samples[..]).is_err());
    }

    #[test]
    fn test_build_non_finite() {
        let samples = [1.0f64, f64::NAN, 2.0];
        assert_eq!(
            HistogramBuilder::new(8).build(&samples[..]),
            Err(Error::NonFiniteSample { index: 1 })
        );
    }

    #[test]
    fn test_build_range_overflow() {
        let samples = [f64::MAX, 0.0, -f64::MAX];
        assert!(matches!(
            HistogramBuilder::new(4).build(&samples[..]),
            Err(Error::InvalidParameter(_))
        ));
        // the span itself fits
        let samples = [f64::MAX, 0.0];
        let hist = HistogramBuilder::new(4).build(&samples[..]).unwrap();
        assert_eq!(hist.counts(), &[1, 0, 0, 1]);
    }

    #[test]
    fn test_build_rejects_invalid_source() {
        struct Broken;
        impl SampleSource for Broken {
            fn dimensions(&self) -> (u32, u32) {
                (1, 1)
            }
            fn sample(&self, _x: u32, _y: u32) -> f64 {
                0.0
            }
            fn validate(&self) -> Result<()> {
                Err(Error::InvalidParameter("broken".to_string()))
            }
        }
        assert_eq!(
            HistogramBuilder::new(4).build(&Broken),
            Err(Error::InvalidParameter("broken".to_string()))
        );
    }

    #[test]
    fn test_build_region_restricts_range() {
        // left half 0..=9, right half 100
        let grid = SampleGrid::from_fn(20, 4, |x, _| if x < 10 { x as f32 } else { 100.0 });
        let left = Region::new_unchecked(0, 0, 10, 4);
        let hist = HistogramBuilder::new(10)
            .with_region(Some(left))
            .build(&grid)
            .unwrap();
        assert_eq!(hist.min(), 0.0);
        assert_eq!(hist.max(), 9.0);
        assert_eq!(hist.total(), 40);
    }

    #[test]
    fn test_occupancy_queries() {
        let hist = Histogram::from_counts(vec![0, 3, 0, 0, 1, 0], 0.0, 6.0).unwrap();
        assert_eq!(hist.first_occupied(), 1);
        assert_eq!(hist.last_occupied(), 4);
        assert_eq!(hist.occupied_bins(), 2);
        assert!(!hist.is_degenerate());
        assert!((hist.mean_bin() - 1.75).abs() < 1e-12);
    }
}
