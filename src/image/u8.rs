//! Borrowed 8-bit mask view.
//!
//! The mask is expected to already hold a binary inside/outside
//! classification; any nonzero value counts as inside. Thresholding from
//! grayscale sources happens before the transform is invoked.

#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Binary classification of a pixel: nonzero means inside the shape.
    #[inline]
    pub fn is_inside(&self, x: usize, y: usize) -> bool {
        self.get(x, y) > 0
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
