/// Mask with a single foreground pixel at (x, y).
pub fn single_point_mask(width: usize, height: usize, x: usize, y: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    assert!(x < width && y < height, "point must lie inside the mask");

    let mut mask = vec![0u8; width * height];
    mask[y * width + x] = 255;
    mask
}

/// Mask whose left `split` columns are foreground.
pub fn half_plane_mask(width: usize, height: usize, split: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    assert!(split <= width, "split must not exceed the width");

    let mut mask = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..split {
            mask[y * width + x] = 255;
        }
    }
    mask
}

/// Mask with a filled foreground rectangle `[x0, x1) × [y0, y1)`.
pub fn filled_rect_mask(
    width: usize,
    height: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    assert!(x0 <= x1 && x1 <= width && y0 <= y1 && y1 <= height, "rectangle out of bounds");

    let mut mask = vec![0u8; width * height];
    for y in y0..y1 {
        for x in x0..x1 {
            mask[y * width + x] = 255;
        }
    }
    mask
}
