use polar_tablegen::RgbImageU8;

/// Builds an image whose pixel at (x, y) is (x, y, 0x40), truncated to u8.
pub fn gradient_rgb(width: usize, height: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, 0x40]);
        }
    }
    RgbImageU8::new(width, height, data)
}

/// Builds a single-color image.
pub fn solid_rgb(width: usize, height: usize, rgb: (u8, u8, u8)) -> RgbImageU8 {
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        data.extend_from_slice(&[rgb.0, rgb.1, rgb.2]);
    }
    RgbImageU8::new(width, height, data)
}
