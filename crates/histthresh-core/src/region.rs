//! Region - Rectangular sample restriction
//!
//! A region selects the samples of a 2D source that take part in
//! histogram construction. Regions may extend past the source; they are
//! clipped against the source dimensions before use.

use crate::error::{Error, Result};

/// A rectangle region
///
/// This is a small `Copy` type. Coordinates are signed so that a region
/// partially outside the source can be expressed and clipped later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Region {
    /// Create a new region
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "region dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a region without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Region covering a whole `width x height` source
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width.min(i32::MAX as u32) as i32,
            h: height.min(i32::MAX as u32) as i32,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Compute the intersection of two regions
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Region {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Clip the region to fit within `width x height`
    ///
    /// Returns `None` when nothing of the region lies inside the bounds.
    pub fn clip(&self, width: u32, height: u32) -> Option<Region> {
        self.intersect(&Region::full(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(Region::new(0, 0, -1, 4).is_err());
        assert!(Region::new(0, 0, 4, -1).is_err());
        assert!(Region::new(-3, -3, 4, 4).is_ok());
    }

    #[test]
    fn test_clip_partial() {
        let r = Region::new_unchecked(-2, 3, 6, 10);
        let c = r.clip(10, 8).unwrap();
        assert_eq!(c, Region::new_unchecked(0, 3, 4, 5));
    }

    #[test]
    fn test_clip_outside() {
        let r = Region::new_unchecked(20, 20, 5, 5);
        assert_eq!(r.clip(10, 10), None);
        assert_eq!(Region::new_unchecked(0, 0, 0, 5).clip(10, 10), None);
    }
}
