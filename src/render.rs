//! End-to-end rendering: decode, size, sample, map, write.

use std::io;

use crate::ascii;
use crate::config::{Destination, RenderConfig};
use crate::error::AppError;
use crate::raster::RasterImage;
use crate::sink::{LineSink, WriterSink};

/// Largest grid `render_image` will allocate.
pub const MAX_CELLS: u64 = 50_000_000;

/// A `rows x cols` canvas of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<char>,
}

impl Grid {
    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Glyphs of row `y`.
    pub fn row(&self, y: u32) -> &[char] {
        let width = self.cols as usize;
        let start = y as usize * width;
        &self.cells[start..start + width]
    }

    /// Each row as a string of exactly `cols` glyphs, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().collect())
    }
}

/// Render a decoded image to a glyph grid.
///
/// Takes ownership of the image; the pixel buffer is released as soon as
/// sampling finishes. Fails without allocating if the grid would exceed
/// [`MAX_CELLS`].
pub fn render_image(image: RasterImage, config: &RenderConfig) -> Result<Grid, AppError> {
    let (cols, rows) = ascii::resolve(
        image.width(),
        image.height(),
        config.target_columns,
        config.char_aspect,
    );
    log::debug!(
        "Sampling {}x{} image to {}x{} cells (aspect {})",
        image.width(),
        image.height(),
        cols,
        rows,
        config.char_aspect
    );

    let total = u64::from(cols)
        .checked_mul(u64::from(rows))
        .filter(|&total| total <= MAX_CELLS);
    if total.is_none() {
        return Err(AppError::GridTooLarge {
            cols,
            rows,
            max: MAX_CELLS,
        });
    }

    let brightness = ascii::downsample(&image, cols, rows);
    drop(image);

    let cells = ascii::map_to_chars(&brightness, &config.charset, config.invert);
    Ok(Grid { cols, rows, cells })
}

/// Write every row of a grid to a sink, then flush it.
pub fn write_grid(grid: &Grid, sink: &mut dyn LineSink) -> io::Result<()> {
    for line in grid.lines() {
        sink.write_line(&line)?;
    }
    sink.finish()
}

/// Run the whole pipeline for one configuration.
///
/// The output file, if any, is only opened after the image decodes, so a
/// failed load never creates or truncates it.
pub fn run(config: &RenderConfig) -> Result<(), AppError> {
    let image = RasterImage::open(&config.source)
        .map_err(|e| AppError::load(config.source.clone(), e))?;
    log::info!(
        "Loaded '{}' ({}x{}, {} channel(s))",
        config.source.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let grid = render_image(image, config)?;

    match &config.destination {
        Destination::Stdout => write_grid(&grid, &mut WriterSink::stdout())?,
        Destination::File(path) => {
            let mut sink = WriterSink::create(path).map_err(|e| AppError::OpenOutput {
                path: path.clone(),
                source: e,
            })?;
            write_grid(&grid, &mut sink)?;
        }
    }

    Ok(())
}
