pub mod io;
pub mod rgb;

pub use self::rgb::RgbImageU8;

/// Maximum accepted source image width in pixels.
pub const MAX_IMAGE_WIDTH: usize = 512;

/// Maximum accepted source image height in pixels.
pub const MAX_IMAGE_HEIGHT: usize = 128;
