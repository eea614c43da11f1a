//! Threshold selection options

use histthresh_core::{DEFAULT_BINS, Region};

use crate::error::{ThresholdError, ThresholdResult};

/// Options shared by all threshold criteria
///
/// Each criterion reads only the fields it needs; `bins` and `region`
/// apply to histogram construction in
/// [`compute_threshold`](crate::compute_threshold).
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdOptions {
    /// Number of histogram bins (must be >= 1)
    pub bins: usize,
    /// Restrict the samples read to this region (`None` = everything)
    pub region: Option<Region>,
    /// Intermodes: cap on smoothing passes
    pub max_smoothing_iterations: usize,
    /// Intermodes: midpoint of the modes (`true`) or valley minimum
    pub use_inter_mode: bool,
    /// Triangle: lower percentile bound for the tail
    pub low_thresh: f64,
    /// Triangle: upper percentile bound for the tail
    pub high_thresh: f64,
    /// IsoData and Li: cap on update steps (must be >= 1)
    pub max_iterations: usize,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            region: None,
            max_smoothing_iterations: 10000,
            use_inter_mode: true,
            low_thresh: 0.01,
            high_thresh: 0.99,
            max_iterations: 1000,
        }
    }
}

impl ThresholdOptions {
    /// Set the bin count
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the sample region
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Check the options for consistency
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidParameters`] if `bins` or
    /// `max_iterations` is 0, or the Triangle bounds are not
    /// `0 <= low_thresh <= high_thresh <= 1`.
    pub fn validate(&self) -> ThresholdResult<()> {
        if self.bins == 0 {
            return Err(ThresholdError::InvalidParameters(
                "bins must be >= 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(ThresholdError::InvalidParameters(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.low_thresh)
            || !(0.0..=1.0).contains(&self.high_thresh)
            || self.low_thresh > self.high_thresh
        {
            return Err(ThresholdError::InvalidParameters(format!(
                "low_thresh/high_thresh must satisfy 0 <= low <= high <= 1: {}/{}",
                self.low_thresh, self.high_thresh
            )));
        }
        Ok(())
    }
}
