//! Threshold criterion selection and end-to-end computation
//!
//! [`ThresholdMethod`] is the closed set of criteria. Every call is
//! stateless: a histogram and options in, a bin out. Callers that want
//! to reuse a histogram across criteria build it once and call
//! [`ThresholdMethod::compute`] for each.

use std::fmt;
use std::str::FromStr;

use histthresh_core::{Histogram, HistogramBuilder, SampleSource};

use crate::error::{ThresholdError, ThresholdResult};
use crate::options::ThresholdOptions;
use crate::selection::{BinSelection, ComputedThreshold};
use crate::{
    huang, intermodes, isodata, kittler_illingworth, li, max_entropy, shanbhag, triangle, yen,
};

/// Histogram threshold criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThresholdMethod {
    /// Fuzzy entropy minimization
    Huang,
    /// Iterative intermeans
    IsoData,
    /// Smoothing until bimodal
    Intermodes,
    /// Minimum error (two Gaussians)
    KittlerIllingworth,
    /// Iterative minimum cross entropy
    Li,
    /// Balanced information measures
    Shanbhag,
    /// Peak-to-tail line distance
    Triangle,
    /// Maximum correlation
    Yen,
    /// Maximum Shannon entropy
    MaxEntropy,
}

impl ThresholdMethod {
    /// Every criterion, in a fixed order
    pub const ALL: [ThresholdMethod; 9] = [
        ThresholdMethod::Huang,
        ThresholdMethod::IsoData,
        ThresholdMethod::Intermodes,
        ThresholdMethod::KittlerIllingworth,
        ThresholdMethod::Li,
        ThresholdMethod::Shanbhag,
        ThresholdMethod::Triangle,
        ThresholdMethod::Yen,
        ThresholdMethod::MaxEntropy,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            ThresholdMethod::Huang => "Huang",
            ThresholdMethod::IsoData => "IsoData",
            ThresholdMethod::Intermodes => "Intermodes",
            ThresholdMethod::KittlerIllingworth => "KittlerIllingworth",
            ThresholdMethod::Li => "Li",
            ThresholdMethod::Shanbhag => "Shanbhag",
            ThresholdMethod::Triangle => "Triangle",
            ThresholdMethod::Yen => "Yen",
            ThresholdMethod::MaxEntropy => "MaxEntropy",
        }
    }

    /// Select a bin of `hist` with this criterion
    ///
    /// `options.bins` and `options.region` are ignored; the histogram is
    /// already built.
    ///
    /// # Errors
    ///
    /// Propagates the criterion's error; see the per-criterion functions.
    pub fn select_bin(
        self,
        hist: &Histogram,
        options: &ThresholdOptions,
    ) -> ThresholdResult<BinSelection> {
        match self {
            ThresholdMethod::Huang => huang(hist),
            ThresholdMethod::IsoData => isodata(hist, options.max_iterations),
            ThresholdMethod::Intermodes => intermodes(
                hist,
                options.max_smoothing_iterations,
                options.use_inter_mode,
            ),
            ThresholdMethod::KittlerIllingworth => kittler_illingworth(hist),
            ThresholdMethod::Li => li(hist, options.max_iterations),
            ThresholdMethod::Shanbhag => shanbhag(hist),
            ThresholdMethod::Triangle => triangle(hist, options.low_thresh, options.high_thresh),
            ThresholdMethod::Yen => yen(hist),
            ThresholdMethod::MaxEntropy => max_entropy(hist),
        }
    }

    /// Select a bin and map it to sample units
    ///
    /// # Errors
    ///
    /// Propagates the criterion's error.
    pub fn compute(
        self,
        hist: &Histogram,
        options: &ThresholdOptions,
    ) -> ThresholdResult<ComputedThreshold> {
        let sel = self.select_bin(hist, options)?;
        let value = hist.bin_to_value(sel.bin)?;
        Ok(ComputedThreshold {
            method: self,
            bin: sel.bin,
            value,
            diagnostics: sel.diagnostics,
        })
    }
}

impl fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMethod {
    type Err = ThresholdError;

    /// Parse a criterion name, ignoring ASCII case and `-`/`_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        ThresholdMethod::ALL
            .into_iter()
            .find(|m| m.name().to_ascii_lowercase() == key)
            .ok_or_else(|| ThresholdError::InvalidParameters(format!("unknown method: {}", s)))
    }
}

/// Compute a threshold for `source` from scratch
///
/// Builds a histogram with `options.bins` bins over the samples in
/// `options.region`, selects a bin with `method` and maps it to sample
/// units.
///
/// # Errors
///
/// - [`ThresholdError::InvalidParameters`] if `options` fail validation
/// - [`ThresholdError::Core`] if the source has no samples in the region
///   or holds a non-finite sample
/// - the criterion's own errors
///
/// # Examples
///
/// ```
/// use histthresh_core::SampleGrid;
/// use histthresh_methods::{ThresholdMethod, ThresholdOptions, compute_threshold};
///
/// let grid = SampleGrid::from_fn(10, 10, |x, _| if x < 5 { 20u8 } else { 200u8 });
/// let options = ThresholdOptions::default().with_bins(64);
/// let t = compute_threshold(&grid, ThresholdMethod::IsoData, &options).unwrap();
/// assert!(t.value > 20.0 && t.value < 200.0);
/// ```
pub fn compute_threshold<S: SampleSource + ?Sized>(
    source: &S,
    method: ThresholdMethod,
    options: &ThresholdOptions,
) -> ThresholdResult<ComputedThreshold> {
    let hist = build_histogram(source, options)?;
    let result = method.compute(&hist, options)?;
    log::debug!(
        "{}: threshold {} (bin {} of {})",
        method,
        result.value,
        result.bin,
        hist.len()
    );
    Ok(result)
}

/// Validate `options` and build the histogram they describe
pub(crate) fn build_histogram<S: SampleSource + ?Sized>(
    source: &S,
    options: &ThresholdOptions,
) -> ThresholdResult<Histogram> {
    options.validate()?;
    Ok(HistogramBuilder::new(options.bins)
        .with_region(options.region)
        .build(source)?)
}
