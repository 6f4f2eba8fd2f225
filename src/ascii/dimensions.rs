//! Dimension calculation for aspect-ratio-correct ASCII rendering.

/// Default character cell aspect ratio (width / height).
/// Monospace glyphs are typically about half as wide as they are tall.
pub const DEFAULT_CHAR_ASPECT: f32 = 0.5;

/// Smallest accepted character aspect ratio.
pub const MIN_CHAR_ASPECT: f32 = 0.05;

/// Clamp a user-supplied aspect ratio to the accepted floor.
///
/// NaN is treated as the floor as well.
pub fn clamp_aspect(aspect: f32) -> f32 {
    if aspect.is_nan() {
        MIN_CHAR_ASPECT
    } else {
        aspect.max(MIN_CHAR_ASPECT)
    }
}

/// Compute the character grid for an image.
///
/// Characters are taller than they are wide, so a naive one-pixel-per-cell
/// mapping looks vertically stretched. Dividing the scaled height by the
/// cell aspect (width / height) produces proportionally fewer rows.
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels (> 0)
/// * `img_height` - Height of the source image in pixels (> 0)
/// * `target_columns` - Requested output width in characters
/// * `char_aspect` - Character cell width / height, clamped to [`MIN_CHAR_ASPECT`]
///
/// # Returns
/// `(cols, rows)` where `cols == max(1, target_columns)` and `rows >= 1`.
///
/// # Example
/// ```ignore
/// // A 640x480 image at 80 columns with 0.5 aspect -> 80x120
/// let (cols, rows) = resolve(640, 480, 80, 0.5);
/// ```
pub fn resolve(img_width: u32, img_height: u32, target_columns: u32, char_aspect: f32) -> (u32, u32) {
    let cols = target_columns.max(1);
    let aspect = clamp_aspect(char_aspect) as f64;

    // Image dimensions are validated by the loader; guard anyway so the
    // division below is always defined.
    let img_width = img_width.max(1) as f64;
    let scale = cols as f64 / img_width;
    let rows = (img_height as f64 * scale / aspect).round();

    // `as` saturates for out-of-range floats.
    let rows = (rows as u32).max(1);
    (cols, rows)
}
