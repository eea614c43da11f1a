//! Sample sources
//!
//! Histogram construction reads scalar samples through [`SampleSource`],
//! a read-only, restartable view over a 2D grid of values. Every call to
//! [`SampleSource::samples`] starts a fresh row-major pass over the
//! (optionally region-restricted) samples, so the builder can scan once
//! for the value range and again for binning.
//!
//! Implementations are provided for:
//!
//! - [`SampleGrid`] - an owned row-major buffer
//! - slices and vectors of primitive scalars, viewed as a single row
//! - `image::ImageBuffer<Luma<P>, C>` (feature `image`)

use crate::error::{Error, Result};
use crate::region::Region;

/// Scalar types that can be read as samples
pub trait Sample: Copy {
    /// Widen the value to `f64`
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// A read-only 2D grid of scalar samples
///
/// Implementors only provide the dimensions and random access; the
/// region-restricted iteration is shared.
pub trait SampleSource {
    /// Width and height of the grid
    fn dimensions(&self) -> (u32, u32);

    /// Value at `(x, y)`
    ///
    /// Callers guarantee `x < width` and `y < height`.
    fn sample(&self, x: u32, y: u32) -> f64;

    /// Check that the source can be read through [`dimensions`] and
    /// [`sample`] without losing samples
    ///
    /// [`dimensions`]: SampleSource::dimensions
    /// [`sample`]: SampleSource::sample
    ///
    /// # Errors
    ///
    /// Implementation defined; the default accepts every source.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Iterate the samples inside `region` in row-major order
    ///
    /// `None` selects the whole grid. A region is clipped against the
    /// grid; if nothing remains, the iterator is empty.
    fn samples(&self, region: Option<&Region>) -> Samples<'_, Self> {
        Samples::new(self, region)
    }
}

/// Row-major iterator over the samples of a [`SampleSource`]
pub struct Samples<'a, S: ?Sized> {
    source: &'a S,
    left: u32,
    right: u32,
    bottom: u32,
    x: u32,
    y: u32,
}

impl<'a, S: SampleSource + ?Sized> Samples<'a, S> {
    fn new(source: &'a S, region: Option<&Region>) -> Self {
        let (width, height) = source.dimensions();
        let clipped = match region {
            Some(r) => r.clip(width, height),
            None => Region::full(width, height).clip(width, height),
        };
        match clipped {
            Some(r) => Self {
                source,
                left: r.x as u32,
                right: r.right() as u32,
                bottom: r.bottom() as u32,
                x: r.x as u32,
                y: r.y as u32,
            },
            None => Self {
                source,
                left: 0,
                right: 0,
                bottom: 0,
                x: 0,
                y: 0,
            },
        }
    }

    fn remaining(&self) -> usize {
        if self.y >= self.bottom || self.left >= self.right {
            return 0;
        }
        let row = (self.right - self.left) as usize;
        let rows = (self.bottom - self.y) as usize;
        rows * row - (self.x - self.left) as usize
    }
}

impl<S: SampleSource + ?Sized> Iterator for Samples<'_, S> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.bottom || self.left >= self.right {
            return None;
        }
        let val = self.source.sample(self.x, self.y);
        self.x += 1;
        if self.x >= self.right {
            self.x = self.left;
            self.y += 1;
        }
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<S: SampleSource + ?Sized> ExactSizeIterator for Samples<'_, S> {}

/// Owned row-major grid of samples
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Sample> SampleGrid<T> {
    /// Create a grid from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn new(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "grid data length {} does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a grid by evaluating `f(x, y)` at every position
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a value, or `None` outside the grid
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Get the underlying row-major data
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Sample> SampleSource for SampleGrid<T> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> f64 {
        self.data[y as usize * self.width as usize + x as usize].to_f64()
    }
}

/// Row length of a slice viewed as a single row
fn row_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        Error::InvalidParameter(format!("{} samples exceed one row of u32::MAX", len))
    })
}

impl<T: Sample> SampleSource for [T] {
    /// Rows longer than `u32::MAX` are cut short here; [`validate`]
    /// rejects them
    ///
    /// [`validate`]: SampleSource::validate
    fn dimensions(&self) -> (u32, u32) {
        let len = row_len(self.len()).unwrap_or(u32::MAX);
        (len, u32::from(len > 0))
    }

    fn validate(&self) -> Result<()> {
        row_len(self.len()).map(|_| ())
    }

    #[inline]
    fn sample(&self, x: u32, _y: u32) -> f64 {
        self[x as usize].to_f64()
    }
}

impl<T: Sample> SampleSource for Vec<T> {
    fn dimensions(&self) -> (u32, u32) {
        self.as_slice().dimensions()
    }

    fn validate(&self) -> Result<()> {
        self.as_slice().validate()
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> f64 {
        self.as_slice().sample(x, y)
    }
}
