//! I/O helpers for source images.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned 24-bit RGB buffer,
//!   rejecting images larger than the display tooling accepts.
use super::{RgbImageU8, MAX_IMAGE_HEIGHT, MAX_IMAGE_WIDTH};
use log::debug;
use std::path::Path;

/// Load an image from disk and convert to 24-bit RGB.
///
/// Dimensions are checked on the decoded image before any color-mode
/// conversion; anything wider than [`MAX_IMAGE_WIDTH`] or taller than
/// [`MAX_IMAGE_HEIGHT`] is rejected.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageU8, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width > MAX_IMAGE_WIDTH || height > MAX_IMAGE_HEIGHT {
        return Err(format!(
            "Image can't exceed {MAX_IMAGE_WIDTH} pixels wide or {MAX_IMAGE_HEIGHT} pixels tall \
             (got {width}x{height})"
        ));
    }
    debug!("loaded {}: {width}x{height}", path.display());
    let data = img.into_rgb8().into_raw();
    Ok(RgbImageU8::new(width, height, data))
}
