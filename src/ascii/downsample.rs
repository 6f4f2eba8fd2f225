//! Nearest-neighbor sampling from pixel data to a character grid.
//!
//! Each cell takes the pixel under its center. There is no averaging
//! across neighbors: this is point sampling, not box filtering.

use super::grayscale::luminance;
use crate::raster::RasterImage;

/// Map an output cell index to a source pixel index along one axis.
///
/// Uses the cell center: `floor((cell + 0.5) * source / cells)`, clamped
/// to `[0, source - 1]`. Monotonic in `cell`.
#[inline]
pub fn source_coord(cell: u32, cells: u32, source: u32) -> u32 {
    if source == 0 || cells == 0 {
        return 0;
    }
    let pos = ((cell as f64 + 0.5) * source as f64 / cells as f64).floor();
    (pos as u32).min(source - 1)
}

/// Sample an image down to a grid of brightness values.
///
/// # Arguments
/// * `image` - Decoded source image
/// * `cols` - Output width in characters
/// * `rows` - Output height in characters
///
/// # Returns
/// Brightness values (0-255), one per cell, row-major. The length is
/// `cols * rows`.
pub fn downsample(image: &RasterImage, cols: u32, rows: u32) -> Vec<u8> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let mut buffer = Vec::with_capacity(cols as usize * rows as usize);

    // Column lookups are the same for every row.
    let xs: Vec<u32> = (0..cols)
        .map(|x| source_coord(x, cols, image.width()))
        .collect();

    for y in 0..rows {
        let sy = source_coord(y, rows, image.height());
        for &sx in &xs {
            buffer.push(luminance(image.pixel(sx, sy)));
        }
    }

    buffer
}
