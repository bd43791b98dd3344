//! Nearest-neighbor resampling to a target width.

use crate::error::ConfigError;
use crate::image::{PixelGrid, Rgb};

/// Height that keeps the aspect ratio of a `width`x`height` image scaled to
/// `target_width`. Rounds down, so an extreme downscale may yield 0.
pub fn scaled_height(width: usize, height: usize, target_width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let scale = target_width as f64 / width as f64;
    (height as f64 * scale).floor() as usize
}

/// Resize `grid` to `target_width` columns, preserving aspect ratio.
///
/// Each destination pixel copies the source pixel at
/// `(floor(x / scale), floor(y / scale))`, clamped to the source bounds.
/// No blending is done.
///
/// # Returns
/// A grid of exactly `target_width` x `scaled_height(..)` pixels. The result
/// is empty (height 0) when the downscale is so large that no row survives.
///
/// # Errors
/// [`ConfigError::InvalidWidth`] if `target_width` is 0, or so large that
/// the output grid cannot be allocated.
pub fn resize(grid: &PixelGrid, target_width: usize) -> Result<PixelGrid, ConfigError> {
    if target_width == 0 {
        return Err(ConfigError::InvalidWidth);
    }

    let src_w = grid.width();
    let src_h = grid.height();
    let dst_h = scaled_height(src_w, src_h, target_width);

    if src_w == 0 || src_h == 0 || dst_h == 0 {
        return Ok(PixelGrid::empty(target_width));
    }

    let scale = target_width as f64 / src_w as f64;

    let total = target_width
        .checked_mul(dst_h)
        .ok_or(ConfigError::InvalidWidth)?;
    let mut pixels: Vec<Rgb> = Vec::new();
    pixels
        .try_reserve_exact(total)
        .map_err(|_| ConfigError::InvalidWidth)?;

    // Source column for each destination column is the same on every row.
    let mut src_cols: Vec<usize> = Vec::new();
    src_cols
        .try_reserve_exact(target_width)
        .map_err(|_| ConfigError::InvalidWidth)?;
    src_cols.extend((0..target_width).map(|x| ((x as f64 / scale) as usize).min(src_w - 1)));

    let src = grid.pixels();
    for y in 0..dst_h {
        let src_y = ((y as f64 / scale) as usize).min(src_h - 1);
        let row = &src[src_y * src_w..(src_y + 1) * src_w];
        pixels.extend(src_cols.iter().map(|&sx| row[sx]));
    }

    log::trace!(
        "resized {}x{} -> {}x{} (scale {:.4})",
        src_w,
        src_h,
        target_width,
        dst_h,
        scale
    );

    Ok(PixelGrid::from_parts(target_width, dst_h, pixels))
}
