//! Error types for decoding, configuration and I/O.
//!
//! Every stage reports through [`Error`], so the binary has a single
//! failure value to print before exiting.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The input bytes are not a BMP this crate can decode.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a BMP file")]
    BadSignature,

    #[error("unsupported bit depth: {0}. Only 24-bit and 32-bit are supported")]
    UnsupportedBitDepth(u16),

    #[error("truncated BMP header: {len} bytes")]
    TruncatedHeader { len: usize },

    #[error("invalid image dimensions {width}x{height}")]
    ZeroDimension { width: i32, height: i32 },

    #[error("pixel data out of bounds: offset {offset} exceeds buffer of {len} bytes")]
    PixelDataOutOfBounds { offset: usize, len: usize },

    #[error("image geometry overflows addressable memory")]
    Overflow,

    #[error("pixel buffer holds {actual} pixels, expected {width}x{height}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("grid declares {height} rows of zero width")]
    ZeroWidthRows { height: usize },
}

/// Caller-supplied parameters or the configuration file are invalid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("target width must be a positive integer")]
    InvalidWidth,

    #[error("vertical scale must be a positive integer")]
    InvalidVerticalScale,

    #[error("character set must contain at least one character")]
    EmptyRamp,

    #[error("config file not found: '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Single failure channel surfaced to the command line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        assert_eq!(FormatError::BadSignature.to_string(), "not a BMP file");
        assert_eq!(
            FormatError::UnsupportedBitDepth(8).to_string(),
            "unsupported bit depth: 8. Only 24-bit and 32-bit are supported"
        );
    }

    #[test]
    fn test_error_is_transparent_over_format() {
        let err: Error = FormatError::BadSignature.into();
        assert_eq!(err.to_string(), "not a BMP file");
        assert!(matches!(err, Error::Format(FormatError::BadSignature)));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = Error::io(
            "missing.bmp",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        );
        assert_eq!(err.to_string(), "missing.bmp: No such file");
    }
}
