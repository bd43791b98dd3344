//! RGB to grayscale conversion.

use crate::image::Rgb;

/// Integer approximation of ITU-R BT.601 luminance.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, with the weights rounded to
/// percentages (30, 59, 11) so the result is reproducible integer math.
/// The weights sum to 100, so the result always fits in a `u8`.
#[inline]
pub fn luminance(px: Rgb) -> u8 {
    let r = px.r as u32;
    let g = px.g as u32;
    let b = px.b as u32;
    ((r * 30 + g * 59 + b * 11) / 100) as u8
}
