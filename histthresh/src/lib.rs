//! Histthresh - Histogram-based threshold selection for Rust
//!
//! Picks a single global threshold for a scalar image (or any 2D grid of
//! samples) from its intensity histogram, using one of nine classic
//! criteria, and optionally binarizes the samples with it.
//!
//! # Overview
//!
//! - Histogram construction over an optional rectangular region
//! - Huang, IsoData, Intermodes, Kittler-Illingworth, Li, Shanbhag,
//!   Triangle, Yen and maximum-entropy criteria
//! - Bin-to-value mapping so every criterion reports comparable values
//! - Two-label binarization
//!
//! # Example
//!
//! ```
//! use histthresh::{SampleGrid, ThresholdMethod, ThresholdOptions, compute_threshold};
//!
//! let grid = SampleGrid::from_fn(8, 8, |x, _| if x < 4 { 30u8 } else { 220u8 });
//! let t = compute_threshold(&grid, ThresholdMethod::Yen, &ThresholdOptions::default()).unwrap();
//! assert!(t.value >= 30.0 && t.value < 220.0);
//! ```

// Re-export core types (histogram, sources, regions)
pub use histthresh_core::*;

// Re-export the criteria
pub use histthresh_methods::{
    BinSelection, BinaryLabels, Branch, ComputedThreshold, Diagnostics, ThresholdError,
    ThresholdMethod, ThresholdOptions, ThresholdResult, binarize, compute_threshold, huang,
    intermodes, isodata, kittler_illingworth, li, max_entropy, shanbhag, threshold_to_binary,
    triangle, yen,
};

// Per-criterion modules
pub use histthresh_methods as methods;
