//! Decoder for uncompressed 24-bit and 32-bit BMP files.
//!
//! Only the fixed-offset fields of the file header and BITMAPINFOHEADER are
//! read. All fields are little-endian:
//!
//! | Offset | Size | Field                       |
//! |--------|------|-----------------------------|
//! | 0      | 2    | signature `BM`              |
//! | 10     | 4    | pixel data offset (u32)     |
//! | 18     | 4    | width (i32)                 |
//! | 22     | 4    | height (i32, sign = order)  |
//! | 28     | 2    | bits per pixel (u16)        |
//!
//! Rows are padded to a multiple of 4 bytes. A positive height means rows
//! are stored bottom-up; the decoder always returns the visual top first.

use crate::error::FormatError;
use crate::image::{PixelGrid, Rgb};

/// Magic bytes at the start of every BMP file.
pub const SIGNATURE: &[u8; 2] = b"BM";

/// Bytes needed to read every header field the decoder uses.
pub const MIN_HEADER_LEN: usize = 30;

const DATA_OFFSET_POS: usize = 10;
const WIDTH_POS: usize = 18;
const HEIGHT_POS: usize = 22;
const BPP_POS: usize = 28;

/// Header fields needed to locate pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub data_offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// Parse and validate the header fields.
    ///
    /// Fails on a missing signature, a truncated header, a bit depth other
    /// than 24 or 32, or a zero width or height.
    pub fn parse(data: &[u8]) -> Result<Self, FormatError> {
        if data.get(0..2) != Some(SIGNATURE.as_slice()) {
            return Err(FormatError::BadSignature);
        }
        if data.len() < MIN_HEADER_LEN {
            return Err(FormatError::TruncatedHeader { len: data.len() });
        }

        let header = BmpHeader {
            data_offset: read_u32(data, DATA_OFFSET_POS)?,
            width: read_i32(data, WIDTH_POS)?,
            height: read_i32(data, HEIGHT_POS)?,
            bits_per_pixel: read_u16(data, BPP_POS)?,
        };

        if header.bits_per_pixel != 24 && header.bits_per_pixel != 32 {
            return Err(FormatError::UnsupportedBitDepth(header.bits_per_pixel));
        }
        if header.width == 0 || header.height == 0 {
            return Err(FormatError::ZeroDimension {
                width: header.width,
                height: header.height,
            });
        }

        Ok(header)
    }

    pub fn abs_width(&self) -> usize {
        self.width.unsigned_abs() as usize
    }

    pub fn abs_height(&self) -> usize {
        self.height.unsigned_abs() as usize
    }

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    /// Rows are stored bottom-to-top when the signed height is positive.
    pub fn is_bottom_up(&self) -> bool {
        self.height > 0
    }

    /// On-disk row index holding visual row `y`, or `None` past the last row.
    pub fn disk_row(&self, y: usize) -> Option<usize> {
        let last = self.abs_height().checked_sub(1)?;
        if y > last {
            return None;
        }
        Some(if self.is_bottom_up() { last - y } else { y })
    }
}

/// Bytes occupied by one scanline, rounded up to a 4-byte boundary.
///
/// Returns `None` if the computation overflows.
pub fn row_size(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    let raw = width.checked_mul(bytes_per_pixel)?;
    Some(raw.checked_add(3)? & !3)
}

/// Decode a complete BMP file held in memory.
///
/// # Returns
/// A grid whose row 0 is the visual top of the image, regardless of the
/// storage order on disk. Alpha bytes of 32-bit images are dropped.
///
/// # Errors
/// Any [`FormatError`]; in particular a header that declares more pixel
/// data than the buffer holds fails with
/// [`FormatError::PixelDataOutOfBounds`] before any pixel is read.
pub fn decode(data: &[u8]) -> Result<PixelGrid, FormatError> {
    let header = BmpHeader::parse(data)?;
    log::debug!(
        "BMP header: offset={} width={} height={} bpp={}",
        header.data_offset,
        header.width,
        header.height,
        header.bits_per_pixel
    );

    let width = header.abs_width();
    let height = header.abs_height();
    let bpp = header.bytes_per_pixel();
    let stride = row_size(width, bpp).ok_or(FormatError::Overflow)?;
    let offset = header.data_offset as usize;

    // Last byte touched is the final pixel of the last stored row; padding
    // after it is never read, so it need not be present.
    let required = (height - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(width * bpp))
        .and_then(|n| n.checked_add(offset))
        .ok_or(FormatError::Overflow)?;
    if required > data.len() {
        return Err(FormatError::PixelDataOutOfBounds {
            offset: required,
            len: data.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        let disk_row = header.disk_row(y).ok_or(FormatError::Overflow)?;
        let row_start = offset + disk_row * stride;
        for x in 0..width {
            let start = row_start + x * bpp;
            let px = data
                .get(start..start + bpp)
                .ok_or(FormatError::PixelDataOutOfBounds {
                    offset: start + bpp,
                    len: data.len(),
                })?;
            // stored as B, G, R[, A]
            pixels.push(Rgb::new(px[2], px[1], px[0]));
        }
    }

    PixelGrid::from_pixels(width, height, pixels)
}

fn field<const N: usize>(data: &[u8], pos: usize) -> Result<[u8; N], FormatError> {
    data.get(pos..pos + N)
        .and_then(|b| b.try_into().ok())
        .ok_or(FormatError::TruncatedHeader { len: data.len() })
}

fn read_u16(data: &[u8], pos: usize) -> Result<u16, FormatError> {
    field(data, pos).map(u16::from_le_bytes)
}

fn read_u32(data: &[u8], pos: usize) -> Result<u32, FormatError> {
    field(data, pos).map(u32::from_le_bytes)
}

fn read_i32(data: &[u8], pos: usize) -> Result<i32, FormatError> {
    field(data, pos).map(i32::from_le_bytes)
}
