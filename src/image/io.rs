//! I/O helpers for masks, distance fields, and JSON summaries.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_distance_field`: remap a signed distance field into an 8-bit PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! This is the export layer around the transform core: bit-depth mapping and
//! value-range remapping live here, never inside the engines.
use super::{ImageF32, ImageU8, ImageView};
use image::GrayImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayMaskU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayMaskU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw pixel bytes in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayMaskU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayMaskU8::new(width, height, data))
}

/// Remap one signed distance to an 8-bit sample.
///
/// `[-spread, +spread]` maps to `[255, 0]`: the boundary lands at mid-gray,
/// inside pixels are bright, outside pixels dark. Infinities (degenerate
/// all-inside / all-outside masks) clamp to the range edges.
#[inline]
pub fn distance_to_byte(distance: f32, spread: f32) -> u8 {
    let normalized = (0.5 - distance / (2.0 * spread)).clamp(0.0, 1.0);
    (normalized * 255.0) as u8
}

/// Save a signed distance field to a grayscale PNG, remapped via
/// [`distance_to_byte`] with the given spread.
pub fn save_distance_field(field: &ImageF32, path: &Path, spread: f32) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(field.w as u32, field.h as u32);
    for y in 0..field.h {
        let row = field.row(y);
        for (x, &d) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, image::Luma([distance_to_byte(d, spread)]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::distance_to_byte;

    #[test]
    fn remap_centers_the_boundary() {
        assert_eq!(distance_to_byte(0.0, 8.0), 127);
        assert_eq!(distance_to_byte(-8.0, 8.0), 255);
        assert_eq!(distance_to_byte(8.0, 8.0), 0);
    }

    #[test]
    fn remap_clamps_sentinels() {
        assert_eq!(distance_to_byte(f32::INFINITY, 8.0), 0);
        assert_eq!(distance_to_byte(f32::NEG_INFINITY, 8.0), 255);
        assert_eq!(distance_to_byte(100.0, 8.0), 0);
        assert_eq!(distance_to_byte(-100.0, 8.0), 255);
    }
}
