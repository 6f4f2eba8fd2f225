//! Brightness to character mapping.

use super::charset::Charset;

/// Palette index for a brightness value.
///
/// `t = brightness / 255` (or `1 - t` when inverted) is scaled onto
/// `0..=levels-1` with rounding, so both ends of the palette get a
/// half-width bucket.
#[inline]
pub fn glyph_index(brightness: u8, levels: usize, invert: bool) -> usize {
    if levels <= 1 {
        return 0;
    }

    let mut t = brightness as f32 / 255.0;
    if invert {
        t = 1.0 - t;
    }
    let max = (levels - 1) as f32;
    (t * max).round().clamp(0.0, max) as usize
}

/// Map a single brightness value to a glyph.
///
/// A one-glyph palette always yields that glyph.
#[inline]
pub fn map_to_char(brightness: u8, charset: &Charset, invert: bool) -> char {
    let glyphs = charset.glyphs();
    glyphs[glyph_index(brightness, glyphs.len(), invert)]
}

/// Map brightness values to characters.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
/// * `charset` - Palette; index 0 is used for the darkest cells
/// * `invert` - If true, bright cells take the start of the palette
///
/// # Returns
/// A vector of characters, one per input brightness value.
pub fn map_to_chars(brightness: &[u8], charset: &Charset, invert: bool) -> Vec<char> {
    brightness
        .iter()
        .map(|&b| map_to_char(b, charset, invert))
        .collect()
}
