//! Binarization with a computed threshold
//!
//! [`threshold_to_binary`] labels a sample inside exactly when it falls
//! in a histogram bin `<= bin`, the lower class the criterion selected.
//! [`binarize`] applies a plain value threshold (`v <= threshold`) for
//! callers that already hold one. Labels are emitted row-major over the
//! (clipped) region, one per sample.

use histthresh_core::{Region, SampleSource};

use crate::error::ThresholdResult;
use crate::method::{ThresholdMethod, build_histogram};
use crate::options::ThresholdOptions;
use crate::selection::ComputedThreshold;

/// Output labels for binarization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryLabels<L> {
    /// Label for the lower class
    pub inside: L,
    /// Label for the upper class
    pub outside: L,
}

impl<L> BinaryLabels<L> {
    /// Create a label pair
    pub const fn new(inside: L, outside: L) -> Self {
        Self { inside, outside }
    }
}

macro_rules! impl_default_labels {
    ($($t:ty),*) => {
        $(
            impl Default for BinaryLabels<$t> {
                /// Inside = maximum, outside = zero
                fn default() -> Self {
                    Self::new(<$t>::MAX, 0)
                }
            }
        )*
    };
}

impl_default_labels!(u8, u16, u32);

impl Default for BinaryLabels<bool> {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// Label every sample of `source` inside `region` against `threshold`
///
/// # Examples
///
/// ```
/// use histthresh_methods::{BinaryLabels, binarize};
///
/// let samples = [1.0f64, 5.0, 2.0, 9.0];
/// let out = binarize(&samples[..], None, 2.0, BinaryLabels::<u8>::default());
/// assert_eq!(out, vec![255, 0, 255, 0]);
/// ```
pub fn binarize<S, L>(
    source: &S,
    region: Option<&Region>,
    threshold: f64,
    labels: BinaryLabels<L>,
) -> Vec<L>
where
    S: SampleSource + ?Sized,
    L: Copy,
{
    source
        .samples(region)
        .map(|v| {
            if v <= threshold {
                labels.inside
            } else {
                labels.outside
            }
        })
        .collect()
}

/// Compute a threshold with `method` and binarize the same samples
///
/// A sample is inside when its histogram bin is `<= bin`, so the inside
/// labels count exactly the lower class of the selection. The labels
/// cover `options.region`, the samples the threshold was computed from.
///
/// # Errors
///
/// Same as [`compute_threshold`](crate::compute_threshold).
pub fn threshold_to_binary<S, L>(
    source: &S,
    method: ThresholdMethod,
    options: &ThresholdOptions,
    labels: BinaryLabels<L>,
) -> ThresholdResult<(ComputedThreshold, Vec<L>)>
where
    S: SampleSource + ?Sized,
    L: Copy,
{
    let hist = build_histogram(source, options)?;
    let threshold = method.compute(&hist, options)?;
    let mapper = hist.mapper();
    let out = source
        .samples(options.region.as_ref())
        .map(|v| {
            if mapper.value_to_bin(v) <= threshold.bin {
                labels.inside
            } else {
                labels.outside
            }
        })
        .collect();
    log::debug!(
        "{}: binarized {} samples at bin {}",
        method,
        hist.total(),
        threshold.bin
    );
    Ok((threshold, out))
}
