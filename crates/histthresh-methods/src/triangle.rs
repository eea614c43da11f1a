//! Triangle thresholding
//!
//! A line is drawn from the histogram peak to a percentile-bounded tail
//! on the far side of the peak; the selected bin is the one lying
//! furthest below that line. Works best on a single dominant peak with a
//! long weak tail.
//!
//! Reference: G. W. Zack, W. E. Rogers and S. A. Latt, "Automatic
//! measurement of sister chromatid exchange frequency", J. Histochem.
//! Cytochem. 25 (1977).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::selection::{BinSelection, Branch, degenerate};

/// Select the bin of maximum distance below the peak-to-tail line
///
/// The low tail is the first bin whose cumulative count exceeds
/// `low_thresh * N`; the high tail is the first bin whose cumulative
/// count reaches `high_thresh * N`. The tail further from the peak is
/// used. Only bins strictly between the peak and the tail are searched;
/// when there are none the lower of the two is returned.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidParameters`] unless
/// `0 <= low_thresh <= high_thresh <= 1`.
///
/// # Examples
///
/// ```
/// use histthresh_core::Histogram;
/// use histthresh_methods::triangle;
///
/// let counts = vec![0, 0, 100, 80, 60, 40, 25, 15, 8, 4];
/// let hist = Histogram::from_counts(counts, 0.0, 10.0).unwrap();
/// let sel = triangle(&hist, 0.01, 0.99).unwrap();
/// assert_eq!(sel.bin, 6);
/// ```
pub fn triangle(
    hist: &Histogram,
    low_thresh: f64,
    high_thresh: f64,
) -> ThresholdResult<BinSelection> {
    if !(0.0..=1.0).contains(&low_thresh)
        || !(0.0..=1.0).contains(&high_thresh)
        || low_thresh > high_thresh
    {
        return Err(ThresholdError::InvalidParameters(format!(
            "triangle bounds must satisfy 0 <= low <= high <= 1: low={}, high={}",
            low_thresh, high_thresh
        )));
    }
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let counts = hist.counts();
    let n = counts.len();
    let total = hist.total() as f64;

    let mut peak = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[peak] {
            peak = i;
        }
    }

    let mut running = 0u64;
    let cum: Vec<u64> = counts
        .iter()
        .map(|&c| {
            running += c;
            running
        })
        .collect();
    let low_idx = cum
        .iter()
        .position(|&c| c as f64 > low_thresh * total)
        .unwrap_or(n - 1);
    let high_idx = cum
        .iter()
        .position(|&c| c as f64 >= high_thresh * total)
        .unwrap_or(n - 1);

    let (tail, branch) = if peak.abs_diff(low_idx) > peak.abs_diff(high_idx) {
        (low_idx, Branch::LowTail)
    } else {
        (high_idx, Branch::HighTail)
    };

    let (lo, hi) = (peak.min(tail), peak.max(tail));
    if hi - lo < 2 {
        log::debug!("triangle: no bins between peak {} and tail {}", peak, tail);
        return Ok(BinSelection::new(lo, 0, true, branch));
    }

    let (x0, y0) = (peak as f64, counts[peak] as f64);
    let (x1, y1) = (tail as f64, counts[tail] as f64);
    let slope = (y1 - y0) / (x1 - x0);
    let norm = (1.0 + slope * slope).sqrt();

    let mut best = lo + 1;
    let mut best_dist = f64::NEG_INFINITY;
    for (k, &c) in counts.iter().enumerate().take(hi).skip(lo + 1) {
        let line = y0 + slope * (k as f64 - x0);
        let dist = (line - c as f64) / norm;
        if dist > best_dist {
            best = k;
            best_dist = dist;
        }
    }

    log::debug!(
        "triangle: peak {}, tail {} ({:?}), bin {}",
        peak,
        tail,
        branch,
        best
    );
    Ok(BinSelection::new(best, 0, true, branch))
}
