//! Pixel to luminance conversion using ITU-R BT.709 coefficients.

/// BT.709 red weight.
pub const LUMA_R: f32 = 0.2126;
/// BT.709 green weight.
pub const LUMA_G: f32 = 0.7152;
/// BT.709 blue weight.
pub const LUMA_B: f32 = 0.0722;

/// Convert one pixel to a brightness value (0-255).
///
/// The slice length is the channel count:
/// - 1: gray
/// - 2: gray + alpha, composited against black
/// - 3: R, G, B
/// - 4: R, G, B + alpha, each color channel composited against black
///   before the weighted sum
///
/// Channels beyond the fourth are ignored. An empty slice is black.
///
/// The formula is: Y = 0.2126*R + 0.7152*G + 0.0722*B on normalized
/// channels, then `round(Y * 255)`.
pub fn luminance(pixel: &[u8]) -> u8 {
    let y = match *pixel {
        [] => 0.0,
        [gray] => norm(gray),
        [gray, alpha] => norm(gray) * norm(alpha),
        [r, g, b] => weighted(norm(r), norm(g), norm(b)),
        [r, g, b, alpha, ..] => {
            let a = norm(alpha);
            weighted(norm(r) * a, norm(g) * a, norm(b) * a)
        }
    };

    (y * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn norm(channel: u8) -> f32 {
    channel as f32 / 255.0
}

#[inline]
fn weighted(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
