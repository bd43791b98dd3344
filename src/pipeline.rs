//! Decode, resize and render in one pass.
//!
//! Stages run strictly in sequence and each owns its output until the next
//! one consumes it. Nothing is printed or written until rendering finished,
//! so a failing stage never leaves partial art behind.

use std::path::Path;

use crate::ascii::{self, AsciiArt, Ramp};
use crate::bmp;
use crate::error::{ConfigError, Error, Result};
use crate::resize;

/// Default target width in characters.
pub const DEFAULT_WIDTH: usize = 100;

/// Default row stride for glyph aspect correction.
pub const DEFAULT_VERTICAL_SCALE: usize = 2;

/// Parameters for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    pub vertical_scale: usize,
    pub ramp: Ramp,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            vertical_scale: DEFAULT_VERTICAL_SCALE,
            ramp: Ramp::default(),
        }
    }
}

impl RenderOptions {
    /// Reject parameters the algorithms cannot work with.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::InvalidWidth);
        }
        if self.vertical_scale == 0 {
            return Err(ConfigError::InvalidVerticalScale);
        }
        if self.ramp.is_empty() {
            return Err(ConfigError::EmptyRamp);
        }
        Ok(())
    }
}

/// Convert an in-memory BMP file to ASCII art.
pub fn convert(data: &[u8], options: &RenderOptions) -> Result<AsciiArt> {
    options.validate()?;

    let grid = bmp::decode(data)?;
    log::info!("Loaded {} BMP image.", grid.dimensions());

    let resized = resize::resize(&grid, options.width)?;
    drop(grid);
    log::info!(
        "Resized to target width {} (height adjusted to {}).",
        resized.width(),
        resized.height()
    );
    if resized.height() == 0 {
        log::warn!("Image collapsed to zero rows at width {}", options.width);
    }

    let art = ascii::render(&resized, &options.ramp, options.vertical_scale)?;
    Ok(art)
}

/// Read a BMP file fully into memory and convert it.
pub fn convert_file(path: &Path, options: &RenderOptions) -> Result<AsciiArt> {
    options.validate()?;
    let data = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    convert(&data, options)
}

/// Write the art to `path`, one line per row, each ending in a newline.
///
/// The file handle is closed before returning on every path.
pub fn write_output(art: &AsciiArt, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    art.write_to(std::io::BufWriter::new(file))
        .map_err(|e| Error::io(path, e))?;
    log::info!("ASCII art saved to {}", path.display());
    Ok(())
}
