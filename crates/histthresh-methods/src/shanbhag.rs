//! Shanbhag information-measure thresholding
//!
//! Each bin's membership in the lower class falls off with the mass
//! between it and the split, and likewise for the upper class. The
//! selected split balances the two classes' information measures.
//!
//! Reference: A. G. Shanbhag, "Utilization of information measure as a
//! means of image thresholding", CVGIP: Graphical Models and Image
//! Processing 56 (1994).

use histthresh_core::Histogram;

use crate::error::{ThresholdError, ThresholdResult};
use crate::moments::Cumulative;
use crate::selection::{BinSelection, degenerate};

/// Select the bin where the two information measures are closest
///
/// Splits with an empty side are skipped.
///
/// # Errors
///
/// Returns [`ThresholdError::NoValidSplit`] if every split leaves one
/// side empty.
pub fn shanbhag(hist: &Histogram) -> ThresholdResult<BinSelection> {
    if let Some(sel) = degenerate(hist) {
        return Ok(sel);
    }

    let p = hist.probabilities();
    let cum = Cumulative::new(hist);
    let n = cum.len();

    let mut best: Option<(usize, f64)> = None;
    for t in 0..n {
        if !cum.splits(t) {
            continue;
        }

        let term = 0.5 / cum.lower_mass(t);
        let mut ent_back = 0.0;
        for ih in 1..=t {
            ent_back -= p[ih] * (1.0 - term * cum.lower_mass(ih - 1)).ln();
        }
        ent_back *= term;

        let term = 0.5 / cum.upper_mass(t);
        let mut ent_obj = 0.0;
        for ih in t + 1..n {
            ent_obj -= p[ih] * (1.0 - term * cum.upper_mass(ih)).ln();
        }
        ent_obj *= term;

        let diff = (ent_back - ent_obj).abs();
        if best.is_none_or(|(_, b)| diff < b) {
            best = Some((t, diff));
        }
    }

    match best {
        Some((bin, _)) => {
            log::debug!("shanbhag: bin {}", bin);
            Ok(BinSelection::criterion(bin))
        }
        None => Err(ThresholdError::NoValidSplit { method: "Shanbhag" }),
    }
}
