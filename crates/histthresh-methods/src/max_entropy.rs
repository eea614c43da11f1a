//! Maximum entropy (Kapur-Sahoo-Wong) thresholding
//!
//! Picks the split maximizing the sum of the Shannon entropies of the
//! normalized lower and upper class distributions. With prefix sums of
//! `p ln p` each class entropy is `ln P - sum(p ln p) / P`.
//!
//! Reference: J. N. Kapur, P. K. Sahoo and A. K. C. Wong, "A new method
//! for gray-level picture thresholding using the entropy of the
//! histogram", CVGIP 29 (1985).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::{Cumulative, prefix_sums, xlnx};
use crate::selection::{BinSelection, degenerate};

/// Select the maximum-entropy bin
///
/// # Errors
///
/// Returns [`ThresholdError::NoValidSplit`] if no split leaves samples
/// on both sides.
pub fn max_entropy(hist: &Histogram) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let p = hist.probabilities();
    let cum = Cumulative::new(hist);
    let n = p.len();
    let h = prefix_sums(p.iter().map(|&v| xlnx(v)));
    let h_total = h[n - 1];

    let mut best: Option<(usize, f64)> = None;
    for t in 0..n - 1 {
        if !cum.splits(t) {
            continue;
        }
        let p1 = cum.lower_mass(t);
        let p2 = cum.upper_mass(t);
        let back = p1.ln() - h[t] / p1;
        let obj = p2.ln() - (h_total - h[t]) / p2;
        let total = back + obj;
        if best.is_none_or(|(_, b)| total > b) {
            best = Some((t, total));
        }
    }

    match best {
        Some((bin, entropy)) => {
            log::debug!("max-entropy: bin {} (entropy = {})", bin, entropy);
            Ok(BinSelection::criterion(bin))
        }
        None => Err(ThresholdError::NoValidSplit {
            method: "MaxEntropy",
        }),
    }
}
