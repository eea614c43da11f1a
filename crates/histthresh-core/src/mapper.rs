//! Bin index <-> sample value mapping
//!
//! A threshold bin `t` is reported in sample units as the upper edge of
//! the bin, `min + (t + 1) * bin_width`, so every criterion yields values
//! that are directly comparable.

use crate::error::{Error, Result};

/// Maps between histogram bins and the sample domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdMapper {
    min: f64,
    bin_width: f64,
    bins: usize,
}

impl ThresholdMapper {
    /// Create a mapper for `bins` bins of width `bin_width` starting at `min`
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` is zero or `bin_width` is not a positive
    /// finite number.
    pub fn new(min: f64, bin_width: f64, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter("bins must be >= 1".to_string()));
        }
        if !bin_width.is_finite() || bin_width <= 0.0 || !min.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "invalid bin geometry: min={}, width={}",
                min, bin_width
            )));
        }
        Ok(Self {
            min,
            bin_width,
            bins,
        })
    }

    /// Mapper from already validated geometry
    pub(crate) const fn from_parts(min: f64, bin_width: f64, bins: usize) -> Self {
        Self {
            min,
            bin_width,
            bins,
        }
    }

    /// Number of bins
    #[inline]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Width of one bin in sample units
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Upper edge of bin `t` in sample units
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `t >= bins`.
    ///
    /// # Examples
    ///
    /// ```
    /// use histthresh_core::ThresholdMapper;
    ///
    /// let mapper = ThresholdMapper::new(10.0, 2.5, 4).unwrap();
    /// assert_eq!(mapper.bin_to_value(0).unwrap(), 12.5);
    /// assert_eq!(mapper.bin_to_value(3).unwrap(), 20.0);
    /// assert!(mapper.bin_to_value(4).is_err());
    /// ```
    pub fn bin_to_value(&self, t: usize) -> Result<f64> {
        if t >= self.bins {
            return Err(Error::OutOfRange {
                index: t,
                len: self.bins,
            });
        }
        Ok(self.min + (t + 1) as f64 * self.bin_width)
    }

    /// Bin containing `v`
    ///
    /// Values below the first edge fold into bin 0 and values at or past
    /// the last edge fold into the last bin.
    pub fn value_to_bin(&self, v: f64) -> usize {
        let pos = (v - self.min) / self.bin_width;
        if !(pos > 0.0) {
            return 0;
        }
        let bin = pos.floor();
        if bin >= (self.bins - 1) as f64 {
            self.bins - 1
        } else {
            bin as usize
        }
    }
}
