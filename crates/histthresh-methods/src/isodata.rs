//! IsoData (iterative intermeans) thresholding
//!
//! Starting from the first occupied bin, the split moves to one past the
//! midpoint of the two class means until it stops changing. The split is
//! kept inside `[first_occupied, last_occupied - 1]` so both classes stay
//! non-empty.
//!
//! Reference: T. W. Ridler and S. Calvard, "Picture thresholding using an
//! iterative selection method", IEEE Trans. SMC 8 (1978).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::Cumulative;
use crate::selection::{BinSelection, degenerate};

/// Select a bin by iterating the intermeans rule
///
/// Stops at a fixed point or after `max_iterations` updates. Hitting the
/// cap is not an error: the last split is returned with
/// `diagnostics.converged == false`.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidParameters`] if `max_iterations` is 0.
pub fn isodata(hist: &Histogram, max_iterations: usize) -> ThresholdResult<BinSelection> {
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

    let mut split = first;
    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        iterations += 1;
        let (Some(m1), Some(m2)) = (cum.lower_mean(split), cum.upper_mean(split)) else {
            break;
        };
        let next = (((m1 + m2) / 2.0).floor() as usize + 1).clamp(first, last - 1);
        if next == split {
            converged = true;
            break;
        }
        split = next;
    }

    if converged {
        log::debug!("isodata: bin {} after {} iterations", split, iterations);
    } else {
        log::warn!(
            "isodata: no fixed point after {} iterations, using bin {}",
            iterations,
            split
        );
    }
    Ok(BinSelection::iterative(split, iterations, converged))
}
