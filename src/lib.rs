#![doc = include_str!("../README.md")]

pub mod color;
pub mod emit;
pub mod image;
pub mod polar;

// --- High-level re-exports -------------------------------------------------

// Main entry points: loader + whole-document writer.
pub use crate::emit::{write_source, EmitOptions};
pub use crate::image::io::load_rgb_image;
pub use crate::image::RgbImageU8;

// Table generators, useful on their own.
pub use crate::color::{color_table, pack_rgb565};
pub use crate::polar::{polar_entry, polar_table};
