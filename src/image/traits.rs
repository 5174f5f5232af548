//! Narrow pixel-buffer contract consumed by the transform engines.
//!
//! The engines only need bounded random access over a `width × height` grid:
//! reads from the mask, writes into the distance buffer. Row access is the
//! primitive; `(x, y)` accessors on the concrete types build on it.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];
}
