//! Brightness to character mapping.

use super::charset::Ramp;

/// Index into a ramp of `levels` glyphs for a gray value.
///
/// Scales 0-255 linearly onto `0..levels` with floor division. A ramp with
/// a single level (or none) always maps to index 0.
#[inline]
pub fn ramp_index(gray: u8, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    gray as usize * (levels - 1) / 255
}

impl Ramp {
    /// Glyph for a gray value.
    #[inline]
    pub fn glyph(&self, gray: u8) -> char {
        self.chars()[ramp_index(gray, self.len())]
    }
}
