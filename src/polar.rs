//! Polar remap table for circular-display rendering.
//!
//! One 16-bit entry per screen cell of a fixed 128x128 grid: the high 9 bits
//! are the cell's angle around the display center (fixed point, 0-511), the
//! low 7 bits its distance from the circle perimeter (fixed point, 127 at the
//! center down toward 0 at the rim). Cells outside the inscribed circle get
//! the sentinel value 127 (angle 0, distance 127).

use log::debug;
use std::f64::consts::PI;

/// Cells across the square polar grid (minor axis of the display).
pub const GRID_SIZE: usize = 128;

/// Circle radius in cells. Real-valued: cell offsets are measured from the
/// true center, half a cell off the integer grid.
pub const RADIUS: f64 = GRID_SIZE as f64 / 2.0;

/// Packed value for cells on or outside the inscribed circle.
pub const OUTSIDE_CIRCLE: u16 = 127;

/// Packed (angle, distance) entry for grid cell (x, y).
///
/// The angle field stays within [0, 511] and the distance field within
/// [0, 127] for every in-circle cell; a cell whose center lies exactly on
/// the circle boundary counts as outside.
pub fn polar_entry(x: usize, y: usize) -> u16 {
    let dx = x as f64 - RADIUS + 0.5;
    let dy = y as f64 - RADIUS + 0.5;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= RADIUS {
        return OUTSIDE_CIRCLE;
    }
    let mut angle = dy.atan2(dx); // -pi to +pi
    angle += PI; // 0 to 2pi
    angle /= 2.0 * PI; // 0 to <1
    let a = (angle * 512.0) as u16; // 0 to 511
    let d = 127 - (distance / RADIUS * 128.0) as u16; // 127 at center
    (a << 7) | d
}

/// Lazy row-major scan of the full polar table.
///
/// Always yields exactly `GRID_SIZE * GRID_SIZE` values, independent of any
/// source image.
pub fn polar_table() -> impl Iterator<Item = u16> {
    debug!(
        "polar table: {GRID_SIZE}x{GRID_SIZE} -> {} entries",
        GRID_SIZE * GRID_SIZE
    );
    (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| polar_entry(x, y)))
}
