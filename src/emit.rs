//! Column-wrapped C-source emission of 16-bit tables.
//!
//! - `HexTableWriter`: streams one table's values as zero-padded hex
//!   literals, wrapped and comma-separated, closing with ` };`.
//! - `write_table`: drives one writer over a value sequence.
//! - `write_source`: emits the whole generated document (width/height
//!   defines, color table, polar table).

use crate::color::color_table;
use crate::image::RgbImageU8;
use crate::polar::{polar_table, GRID_SIZE};
use log::info;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Formatting knobs for table emission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Values per output line.
    pub columns: usize,
    /// Hex digits per value, excluding the `0x` prefix.
    pub hex_digits: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            columns: 8,
            hex_digits: 4,
        }
    }
}

/// Streams one table's worth of values into a writer.
///
/// Owns the column and element counters for a single table, so two tables
/// emitted back to back cannot contaminate each other's layout. The column
/// counter starts saturated, forcing a line break before the first value
/// (the declaration's opening brace ends the previous line).
pub struct HexTableWriter {
    options: EmitOptions,
    column: usize,
    counter: usize,
    limit: usize,
}

impl HexTableWriter {
    /// A fresh writer expecting exactly `limit` values.
    pub fn new(limit: usize, options: EmitOptions) -> Self {
        Self {
            options,
            column: options.columns,
            counter: 0,
            limit,
        }
    }

    /// Writes one value with wrapping, separators and the final ` };` cap.
    pub fn value<W: Write>(&mut self, out: &mut W, n: u16) -> std::io::Result<()> {
        self.column += 1;
        if self.column >= self.options.columns {
            write!(out, "\n  ")?;
            self.column = 0;
        }
        write!(out, "{:#0width$X}", n, width = self.options.hex_digits + 2)?;
        self.counter += 1;
        if self.counter < self.limit {
            write!(out, ",")?;
            if self.column < self.options.columns - 1 {
                write!(out, " ")?;
            }
        } else {
            writeln!(out, " }};")?;
        }
        Ok(())
    }
}

/// Emits `limit` values from `values` as one wrapped table body.
pub fn write_table<W, I>(
    out: &mut W,
    values: I,
    limit: usize,
    options: &EmitOptions,
) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = u16>,
{
    let mut writer = HexTableWriter::new(limit, *options);
    for v in values {
        writer.value(out, v)?;
    }
    Ok(())
}

/// Emits the complete generated source: dimension defines, the image color
/// table and the polar remap table, in compilable C.
pub fn write_source<W: Write>(
    out: &mut W,
    img: &RgbImageU8,
    options: &EmitOptions,
) -> std::io::Result<()> {
    let (w, h) = (img.width(), img.height());
    info!("generating tables for {w}x{h} image");

    writeln!(out, "#define IMG_WIDTH  {w}")?;
    writeln!(out, "#define IMG_HEIGHT {h}")?;
    writeln!(out)?;

    write!(out, "const uint16_t img[IMG_HEIGHT][IMG_WIDTH] = {{")?;
    write_table(out, color_table(img), w * h, options)?;

    write!(out, "\nconst uint16_t polar[{GRID_SIZE}][{GRID_SIZE}] = {{")?;
    write_table(out, polar_table(), GRID_SIZE * GRID_SIZE, options)?;
    Ok(())
}
