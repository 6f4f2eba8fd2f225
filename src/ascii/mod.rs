//! ASCII rendering core.
//!
//! The pipeline from decoded pixels to glyphs:
//!
//! 1. **Geometry** - Source size and target columns to a character grid
//! 2. **Sampling** - One nearest-neighbor source pixel per cell
//! 3. **Luminance** - Pixel channels to brightness using BT.709
//! 4. **Character mapping** - Brightness to a glyph from the palette
//!
//! Everything here is a pure function of its inputs.

mod charset;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;

pub use charset::{Charset, EmptyCharsetError, DEFAULT_CHARSET, STANDARD_CHARSET};
pub use dimensions::{clamp_aspect, resolve, DEFAULT_CHAR_ASPECT, MIN_CHAR_ASPECT};
pub use downsample::{downsample, source_coord};
pub use grayscale::{luminance, LUMA_B, LUMA_G, LUMA_R};
pub use mapping::{glyph_index, map_to_char, map_to_chars};
