//! Decoded source images.
//!
//! Decoding is delegated to the `image` crate; this module only normalizes
//! its output to 8-bit samples with 1-4 interleaved channels.

use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// A decoded image: row-major, interleaved 8-bit channels.
///
/// Channel meaning by count: 1 = gray, 2 = gray + alpha, 3 = RGB,
/// 4 = RGBA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

/// Reasons a pixel buffer cannot form a [`RasterImage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("image has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },

    #[error("unsupported channel count {0} (expected 1-4)")]
    UnsupportedChannels(u8),

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl RasterImage {
    /// Wrap a pixel buffer, checking that it matches the stated geometry.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroSize { width, height });
        }
        if !(1..=4).contains(&channels) {
            return Err(RasterError::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Decode an image file.
    ///
    /// The format is guessed from the file contents and extension.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let decoded = image::open(path)?;
        Ok(Self::from_dynamic(decoded)?)
    }

    /// Normalize a decoded image to 8-bit samples.
    ///
    /// 8-bit layouts are taken as-is. Deeper or floating-point layouts are
    /// converted, keeping gray as gray and keeping alpha when present.
    pub fn from_dynamic(decoded: DynamicImage) -> Result<Self, RasterError> {
        let (width, height) = decoded.dimensions();
        let color = decoded.color();

        let (channels, pixels) = match decoded {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            other => {
                let has_color = color.has_color();
                match (has_color, color.has_alpha()) {
                    (false, false) => (1, other.into_luma8().into_raw()),
                    (false, true) => (2, other.into_luma_alpha8().into_raw()),
                    (true, false) => (3, other.into_rgb8().into_raw()),
                    (true, true) => (4, other.into_rgba8().into_raw()),
                }
            }
        };

        log::debug!("Normalized {:?} image to {} channel(s)", color, channels);
        Self::new(width, height, channels, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Channel values of the pixel at `(x, y)`.
    ///
    /// Coordinates are clamped to the image bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let bpp = self.channels as usize;
        let start = (y * self.width as usize + x) * bpp;
        &self.pixels[start..start + bpp]
    }
}

/// Errors from [`RasterImage::open`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Invalid(#[from] RasterError),
}
