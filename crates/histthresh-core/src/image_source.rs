//! [`SampleSource`] for single-channel `image` buffers

use std::ops::Deref;

use image::{ImageBuffer, Luma, Primitive};

use crate::source::SampleSource;

impl<P, C> SampleSource for ImageBuffer<Luma<P>, C>
where
    P: Primitive + Into<f64>,
    C: Deref<Target = [P]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    #[inline]
    fn sample(&self, x: u32, y: u32) -> f64 {
        self.get_pixel(x, y).0[0].into()
    }
}
