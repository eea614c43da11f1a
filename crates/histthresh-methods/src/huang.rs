//! Huang fuzzy-entropy thresholding
//!
//! Each sample belongs to its class with a membership that decays with
//! its distance to the class mean, `mu = 1 / (1 + |i - mean| / C)` where
//! `C` is the span of occupied bins. The selected bin minimizes the total
//! Shannon entropy of those memberships.
//!
//! Class means come from prefix sums, but the entropy sum depends on the
//! rounded mean of each class and is rescanned for every candidate, so a
//! full search costs O(span^2) in the occupied span.
//!
//! Reference: L.-K. Huang and M.-J. J. Wang, "Image thresholding by
//! minimizing the measures of fuzziness", Pattern Recognition 28 (1995).

use histthresh_core::Histogram;

use crate::error::ThresholdResult;
use crate::moments::{Cumulative, xlnx};
use crate::selection::{BinSelection, degenerate};

/// Select a bin by minimizing fuzzy entropy
///
/// Only splits that leave samples on both sides are considered; ties go
/// to the lowest bin.
///
/// # Examples
///
/// ```
/// use histthresh_core::Histogram;
/// use histthresh_methods::huang;
///
/// let hist = Histogram::from_counts(vec![0, 5, 9, 5, 0, 0, 5, 9, 5, 0], 0.0, 10.0).unwrap();
/// let sel = huang(&hist).unwrap();
/// assert!(sel.bin >= 3 && sel.bin < 6);
/// ```
pub fn huang(hist: &Histogram) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let counts = hist.counts();
    let cum = Cumulative::new(hist);
    let first = hist.first_occupied();
    let last = hist.last_occupied();
    let span = last - first;

    // entropy of the membership at each possible distance
    let smu: Vec<f64> = (0..=span)
        .map(|d| {
            let mu = 1.0 / (1.0 + d as f64 / span as f64);
            -xlnx(mu) - xlnx(1.0 - mu)
        })
        .collect();

    let mut best: Option<(usize, f64)> = None;
    for t in first..last {
        let (Some(m1), Some(m2)) = (cum.lower_mean(t), cum.upper_mean(t)) else {
            continue;
        };
        let mu_low = m1.round() as usize;
        let mu_high = m2.round() as usize;

        let mut entropy = 0.0;
        for (i, &c) in counts.iter().enumerate().take(t + 1).skip(first) {
            entropy += smu[i.abs_diff(mu_low).min(span)] * c as f64;
        }
        for (i, &c) in counts.iter().enumerate().take(last + 1).skip(t + 1) {
            entropy += smu[i.abs_diff(mu_high).min(span)] * c as f64;
        }

        if best.is_none_or(|(_, e)| entropy < e) {
            best = Some((t, entropy));
        }
    }

    // first..last always holds a splitting bin once two bins are occupied
    let bin = best.map_or(first, |(t, _)| t);
    log::debug!("huang: bin {}", bin);
    Ok(BinSelection::criterion(bin))
}
