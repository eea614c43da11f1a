//! histthresh Core - Histograms and sample sources for threshold selection
//!
//! This crate provides the data structures shared by every threshold
//! criterion:
//!
//! - [`SampleSource`] / [`SampleGrid`] - Read-only, restartable 2D sample access
//! - [`Region`] - Rectangle restricting which samples are read
//! - [`HistogramBuilder`] / [`Histogram`] - Fixed-width histogram over the observed range
//! - [`ThresholdMapper`] - Bin index <-> sample value conversion
//!
//! Enable the `image` feature (on by default) to read single-channel
//! `image::ImageBuffer`s directly.

pub mod error;
pub mod histogram;
#[cfg(feature = "image")]
mod image_source;
pub mod mapper;
pub mod region;
pub mod source;

pub use error::{Error, Result};
pub use histogram::{DEFAULT_BINS, Histogram, HistogramBuilder};
pub use mapper::ThresholdMapper;
pub use region::Region;
pub use source::{Sample, SampleGrid, SampleSource, Samples};
