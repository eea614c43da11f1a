//! Intermodes thresholding
//!
//! The histogram is smoothed with a 3-point running mean until exactly
//! two strict local maxima remain. The threshold is then either the
//! midpoint of the two modes or the lowest point of the valley between
//! them.
//!
//! Reference: J. M. S. Prewitt and M. L. Mendelsohn, "The analysis of
//! cell images", Annals of the NY Academy of Sciences 128 (1966).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::selection::{BinSelection, Branch, degenerate};

/// Select a bin between the two modes of the smoothed histogram
///
/// With `use_inter_mode` the bin is `(j + k) / 2` for modes `j < k`;
/// otherwise it is the bin of minimum smoothed count strictly between
/// them, lowest index on ties.
///
/// # Errors
///
/// Returns [`ThresholdError::NonConvergent`] if the histogram is still not
/// bimodal after `max_smoothing_iterations` passes.
///
/// # Examples
///
/// ```
/// use histthresh_core::Histogram;
/// use histthresh_methods::intermodes;
///
/// let hist = Histogram::from_counts(vec![10, 8, 2, 0, 0, 0, 2, 8, 10, 5], 0.0, 10.0).unwrap();
/// let sel = intermodes(&hist, 100, true).unwrap();
/// assert_eq!(sel.bin, 4);
/// assert_eq!(sel.diagnostics.iterations, 1);
/// ```
pub fn intermodes(
    hist: &Histogram,
    max_smoothing_iterations: usize,
    use_inter_mode: bool,
) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let mut smoothed: Vec<f64> = hist.counts().iter().map(|&c| c as f64).collect();
    let mut iterations = 0;
    let modes = loop {
        let maxima = local_maxima(&smoothed);
        if maxima.len() == 2 {
            break (maxima[0], maxima[1]);
        }
        if iterations >= max_smoothing_iterations {
            log::warn!(
                "intermodes: {} maxima left after {} smoothing passes",
                maxima.len(),
                iterations
            );
            return Err(ThresholdError::NonConvergent { iterations });
        }
        smooth(&mut smoothed);
        iterations += 1;
    };

    let (j, k) = modes;
    let (bin, branch) = if use_inter_mode {
        ((j + k) / 2, Branch::InterMode)
    } else {
        (valley(&smoothed, j, k), Branch::Valley)
    };

    log::debug!(
        "intermodes: modes {} and {}, bin {} after {} passes",
        j,
        k,
        bin,
        iterations
    );
    Ok(BinSelection::new(bin, iterations, true, branch))
}

/// One 3-point running-mean pass with zero padding at both ends
fn smooth(h: &mut [f64]) {
    let n = h.len();
    let mut current = 0.0;
    let mut next = h[0];
    for i in 0..n - 1 {
        let previous = current;
        current = next;
        next = h[i + 1];
        h[i] = (previous + current + next) / 3.0;
    }
    h[n - 1] = (current + next) / 3.0;
}

/// Interior bins strictly greater than both neighbours
fn local_maxima(h: &[f64]) -> Vec<usize> {
    h.windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2])
        .map(|(i, _)| i + 1)
        .collect()
}

/// Lowest bin strictly between `j` and `k`
fn valley(h: &[f64], j: usize, k: usize) -> usize {
    let mut best = j + 1;
    for i in j + 2..k {
        if h[i] < h[best] {
            best = i;
        }
    }
    best
}
