//! Li minimum cross-entropy thresholding
//!
//! Iterates the closed-form fixed point of the cross-entropy between the
//! histogram and its two-level approximation:
//! `t = (m1 - m2) / (ln m1 - ln m2)` for class means `m1 < m2`.
//!
//! Means are 0-based bin indices. A zero mean contributes a zero log
//! term (`0 ln 0 = 0`), so a lower class sitting in bin 0 gives
//! `t = m2 / ln m2`.
//!
//! Reference: C. H. Li and C. K. Lee, "Minimum cross entropy
//! thresholding", Pattern Recognition 26 (1993).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::Cumulative;
use crate::selection::{BinSelection, degenerate};

/// Select a bin by iterating the minimum cross-entropy update
///
/// Starts at the mean bin. The split is clamped into
/// `[first_occupied, last_occupied - 1]` so neither class empties. Stops
/// when the split repeats or after `max_iterations` updates; hitting the
/// cap sets `diagnostics.converged = false`. When the update is undefined
/// (`ln m1 == ln m2`, only possible for means 0 and 1) the current split
/// is kept.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidParameters`] if `max_iterations` is 0.
pub fn li(hist: &Histogram, max_iterations: usize) -> ThresholdResult<BinSelection> {
    if max_iterations == 0 {
        return Err(ThresholdError::InvalidParameters(
            "max_iterations must be >= 1".to_string(),
        ));
    }
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let cum = Cumulative::new(hist);
    let first = hist.first_occupied();
    let last = hist.last_occupied();

    let mut split = (hist.mean_bin().round() as usize).clamp(first, last - 1);
    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;
        let (Some(m1), Some(m2)) = (cum.lower_mean(split), cum.upper_mean(split)) else {
            break;
        };
        let log_mean = (m1 - m2) / (ln_or_zero(m1) - ln_or_zero(m2));
        if !log_mean.is_finite() {
            converged = true;
            break;
        }
        let next = (log_mean.round().max(0.0) as usize).clamp(first, last - 1);
        if next == split {
            converged = true;
            break;
        }
        split = next;
    }

    if converged {
        log::debug!("li: bin {} after {} iterations", split, iterations);
    } else {
        log::warn!(
            "li: no fixed point after {} iterations, using bin {}",
            iterations,
            split
        );
    }
    Ok(BinSelection::iterative(split, iterations, converged))
}

#[inline]
fn ln_or_zero(x: f64) -> f64 {
    if x > 0.0 { x.ln() } else { 0.0 }
}
