//! Kittler-Illingworth minimum-error thresholding
//!
//! Fits a two-Gaussian mixture to the histogram at every split and keeps
//! the split minimizing
//!
//! ```text
//! J(t) = 1 + 2 (P1 ln s1 + P2 ln s2) - 2 (P1 ln P1 + P2 ln P2)
//! ```
//!
//! where `P` are the class priors and `s` the class standard deviations.
//!
//! Reference: J. Kittler and J. Illingworth, "Minimum error
//! thresholding", Pattern Recognition 19 (1986).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::Cumulative;
use crate::selection::{BinSelection, degenerate};

/// Select the minimum-error bin
///
/// A split is a candidate only when each class spans at least two
/// occupied bins, so both variances are strictly positive.
///
/// # Errors
///
/// Returns [`ThresholdError::NoValidSplit`] if no split qualifies, for
/// example when only two bins are occupied.
pub fn kittler_illingworth(hist: &Histogram) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let cum = Cumulative::new(hist);
    let mut best: Option<(usize, f64)> = None;
    for t in 0..cum.len() - 1 {
        if cum.lower_occupied(t) < 2 || cum.upper_occupied(t) < 2 {
            continue;
        }
        let (Some(v1), Some(v2)) = (cum.lower_variance(t), cum.upper_variance(t)) else {
            continue;
        };
        if v1 <= 0.0 || v2 <= 0.0 {
            continue;
        }
        let p1 = cum.lower_mass(t);
        let p2 = cum.upper_mass(t);
        // 2 P ln s == P ln s^2
        let j = 1.0 + (p1 * v1.ln() + p2 * v2.ln()) - 2.0 * (p1 * p1.ln() + p2 * p2.ln());
        if best.is_none_or(|(_, b)| j < b) {
            best = Some((t, j));
        }
    }

    match best {
        Some((bin, j)) => {
            log::debug!("kittler-illingworth: bin {} (J = {})", bin, j);
            Ok(BinSelection::criterion(bin))
        }
        None => Err(ThresholdError::NoValidSplit {
            method: "Kittler-Illingworth",
        }),
    }
}
