//! Selected bins and per-criterion diagnostics

use histthresh_core::Histogram;

use crate::method::ThresholdMethod;

/// How a criterion arrived at its bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Optimum (or fixed point) of the criterion
    Criterion,
    /// All samples in one bin; that bin is the answer
    Degenerate,
    /// Intermodes: midpoint of the two modes
    InterMode,
    /// Intermodes: lowest bin of the valley between the two modes
    Valley,
    /// Triangle: line drawn to the tail below the peak
    LowTail,
    /// Triangle: line drawn to the tail above the peak
    HighTail,
}

/// Diagnostics attached to every selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostics {
    /// Refinement or smoothing passes performed (0 for closed-form criteria)
    pub iterations: usize,
    /// False when an iterative criterion stopped at its cap
    pub converged: bool,
    /// Branch taken
    pub branch: Branch,
}

/// A histogram bin chosen by one criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinSelection {
    /// Selected bin; samples in bins `<= bin` form the lower class
    pub bin: usize,
    /// How the bin was found
    pub diagnostics: Diagnostics,
}

impl BinSelection {
    pub(crate) fn new(bin: usize, iterations: usize, converged: bool, branch: Branch) -> Self {
        Self {
            bin,
            diagnostics: Diagnostics {
                iterations,
                converged,
                branch,
            },
        }
    }

    /// Closed-form optimum
    pub(crate) fn criterion(bin: usize) -> Self {
        Self::new(bin, 0, true, Branch::Criterion)
    }

    /// Fixed point of an iterative criterion
    pub(crate) fn iterative(bin: usize, iterations: usize, converged: bool) -> Self {
        Self::new(bin, iterations, converged, Branch::Criterion)
    }
}

/// The single occupied bin of a degenerate histogram
pub(crate) fn degenerate(hist: &Histogram) -> Option<BinSelection> {
    if hist.is_degenerate() {
        Some(BinSelection::new(
            hist.first_occupied(),
            0,
            true,
            Branch::Degenerate,
        ))
    } else {
        None
    }
}

/// A threshold in both bin and sample units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedThreshold {
    /// Criterion that produced it
    pub method: ThresholdMethod,
    /// Selected bin
    pub bin: usize,
    /// Upper edge of `bin` in sample units
    pub value: f64,
    /// How the bin was found
    pub diagnostics: Diagnostics,
}
