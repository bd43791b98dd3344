//! Pixel grid shared by the decoder, resampler and renderer.

use crate::error::FormatError;

/// One pixel, alpha already discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Width and height of a [`PixelGrid`] in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Row-major grid of pixels. Row 0 is the visual top of the image.
///
/// Pixels live in one contiguous buffer indexed by `y * width + x`; the
/// constructors refuse buffers whose length disagrees with the declared
/// dimensions, so every row is exactly `width` pixels long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Build a grid from a flat row-major buffer.
    ///
    /// A zero-height grid of any width is allowed; zero-width rows are not.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, FormatError> {
        if width == 0 && height > 0 {
            return Err(FormatError::ZeroWidthRows { height });
        }
        let expected = width.checked_mul(height).ok_or(FormatError::Overflow)?;
        if pixels.len() != expected {
            return Err(FormatError::ShapeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Grid of the given width with no rows.
    pub fn empty(width: usize) -> Self {
        Self {
            width,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Caller guarantees `pixels.len() == width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from explicit rows, which must all share one length.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, FormatError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let pixels: Vec<Rgb> = rows.into_iter().flatten().collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Row `y` as a slice of exactly `width` pixels.
    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    /// Rows from top to bottom. Yields nothing for a zero-height grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks_exact panics on 0; only a zero-height grid can have zero width
        let chunk = self.width.max(1);
        self.pixels.chunks_exact(chunk).take(self.height)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}
