//! Histthresh Methods - Histogram-based global threshold selection
//!
//! Nine classic criteria pick a split bin from a [`Histogram`]:
//!
//! - **Huang** ([`huang`]): fuzzy entropy minimization
//! - **IsoData** ([`isodata`]): iterative intermeans
//! - **Intermodes** ([`intermodes`]): smoothing until bimodal
//! - **Kittler-Illingworth** ([`kittler_illingworth`]): minimum error
//! - **Li** ([`li`]): iterative minimum cross entropy
//! - **Shanbhag** ([`shanbhag`]): balanced information measures
//! - **Triangle** ([`triangle`]): peak-to-tail geometry
//! - **Yen** ([`yen`]): maximum correlation
//! - **MaxEntropy** ([`max_entropy`]): Kapur-Sahoo-Wong entropy
//!
//! All criteria break ties toward the lowest bin and answer a degenerate
//! histogram (one occupied bin) with that bin. Samples in bins `<= bin`
//! form the lower class; [`ThresholdMethod::compute`] reports the bin's
//! upper edge in sample units.
//!
//! [`Histogram`]: histthresh_core::Histogram

pub mod binarize;
pub mod error;
pub mod huang;
pub mod intermodes;
pub mod isodata;
pub mod kittler;
pub mod li;
pub mod max_entropy;
pub mod method;
mod moments;
pub mod options;
pub mod selection;
pub mod shanbhag;
pub mod triangle;
pub mod yen;

// Re-export core types
pub use histthresh_core;

// Re-export error types
pub use error::{ThresholdError, ThresholdResult};

// Re-export criteria
pub use huang::huang;
pub use intermodes::intermodes;
pub use isodata::isodata;
pub use kittler::kittler_illingworth;
pub use li::li;
pub use max_entropy::max_entropy;
pub use shanbhag::shanbhag;
pub use triangle::triangle;
pub use yen::yen;

// Re-export selection types
pub use binarize::{BinaryLabels, binarize, threshold_to_binary};
pub use method::{ThresholdMethod, compute_threshold};
pub use options::ThresholdOptions;
pub use selection::{BinSelection, Branch, ComputedThreshold, Diagnostics};
