//! Yen maximum-correlation thresholding
//!
//! Maximizes the sum of the order-2 Renyi entropies of the two classes:
//!
//! ```text
//! Crit(t) = -ln(S1(t) * S2(t)) + 2 ln(P1(t) * P2(t))
//! ```
//!
//! with `S1`, `S2` the sums of squared probabilities below and above `t`.
//!
//! Reference: J.-C. Yen, F.-J. Chang and S. Chang, "A new criterion for
//! automatic multilevel thresholding", IEEE Trans. Image Processing 4
//! (1995).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::{Cumulative, prefix_sums};
use crate::selection::{BinSelection, degenerate};

/// Select the maximum-correlation bin
///
/// # Errors
///
/// Returns [`ThresholdError::NoValidSplit`] if no split has both priors
/// positive.
pub fn yen(hist: &Histogram) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let p = hist.probabilities();
    let cum = Cumulative::new(hist);
    let n = p.len();

    let s1 = prefix_sums(p.iter().map(|&v| v * v));
    // s2[t] = sum of p^2 over bins > t
    let mut s2 = vec![0.0; n];
    for t in (0..n - 1).rev() {
        s2[t] = s2[t + 1] + p[t + 1] * p[t + 1];
    }

    let mut best: Option<(usize, f64)> = None;
    for t in 0..n - 1 {
        if !cum.splits(t) {
            continue;
        }
        let p1 = cum.lower_mass(t);
        let p2 = cum.upper_mass(t);
        let crit = -(s1[t] * s2[t]).ln() + 2.0 * (p1 * p2).ln();
        if best.is_none_or(|(_, b)| crit > b) {
            best = Some((t, crit));
        }
    }

    match best {
        Some((bin, crit)) => {
            log::debug!("yen: bin {} (crit = {})", bin, crit);
            Ok(BinSelection::criterion(bin))
        }
        None => Err(ThresholdError::NoValidSplit { method: "Yen" }),
    }
}
