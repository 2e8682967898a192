//! 16-bit RGB565 color packing and the row-major color-table scan.

use crate::image::RgbImageU8;
use log::debug;

/// Packs 8-bit (r, g, b) channels into a 16-bit 5/6/5 value.
///
/// Red lands in bits 11-15, green in 5-10, blue in 0-4. The low bits of each
/// channel are truncated, not rounded.
#[inline]
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    (((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16)
}

/// Lazy row-major scan of `img` as packed RGB565 values.
///
/// Yields exactly `width * height` values, all of row 0 first.
pub fn color_table(img: &RgbImageU8) -> impl Iterator<Item = u16> + '_ {
    debug!(
        "color table: {}x{} -> {} entries",
        img.width(),
        img.height(),
        img.width() * img.height()
    );
    (0..img.height()).flat_map(move |y| {
        (0..img.width()).map(move |x| {
            let (r, g, b) = img.get(x, y);
            pack_rgb565(r, g, b)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primary_colors() {
        assert_eq!(pack_rgb565(0, 0, 0), 0x0000);
        assert_eq!(pack_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(pack_rgb565(255, 0, 0), 0xF800);
        assert_eq!(pack_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(pack_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn truncates_low_channel_bits() {
        // 0x07 of red and 0x03 of green and 0x07 of blue are dropped.
        assert_eq!(pack_rgb565(0x07, 0x03, 0x07), 0x0000);
        assert_eq!(pack_rgb565(0x08, 0x04, 0x08), 0x0821);
    }

    #[test]
    fn scans_row_major() {
        // 2x2 image: red, green / blue, white.
        let data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let img = RgbImageU8::new(2, 2, data);
        let table: Vec<u16> = color_table(&img).collect();
        assert_eq!(table, vec![0xF800, 0x07E0, 0x001F, 0xFFFF]);
    }
}
