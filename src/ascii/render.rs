//! Pixel grid to text lines.

use std::io::Write;

use super::charset::Ramp;
use super::grayscale::luminance;
use crate::error::ConfigError;
use crate::image::PixelGrid;

/// Rendered art: one line per retained grid row, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write every line followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}

impl std::fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render a grid as text.
///
/// Keeps rows `0, v, 2v, ...` for `vertical_scale = v` and drops the rest,
/// compensating for glyphs being taller than they are wide. Rows are
/// skipped, not averaged.
///
/// # Arguments
/// * `grid` - Pixels to render, usually already resized
/// * `ramp` - Glyphs ordered from darkest to lightest pixel
/// * `vertical_scale` - Row stride, at least 1
///
/// # Returns
/// `ceil(height / vertical_scale)` lines, each `width` glyphs long.
pub fn render(grid: &PixelGrid, ramp: &Ramp, vertical_scale: usize) -> Result<AsciiArt, ConfigError> {
    if vertical_scale == 0 {
        return Err(ConfigError::InvalidVerticalScale);
    }

    let lines = grid
        .rows()
        .step_by(vertical_scale)
        .map(|row| row.iter().map(|&px| ramp.glyph(luminance(px))).collect())
        .collect();

    Ok(AsciiArt { lines })
}
