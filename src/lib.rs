//! bmp2ascii library crate.
//!
//! Decodes uncompressed 24/32-bit BMP files, resizes them with
//! nearest-neighbor sampling and renders the result as text:
//!
//! ```no_run
//! use bmp2ascii::pipeline::{convert_file, RenderOptions};
//!
//! let art = convert_file("photo.bmp".as_ref(), &RenderOptions::default())?;
//! print!("{art}");
//! # Ok::<(), bmp2ascii::Error>(())
//! ```

pub mod ascii;
pub mod bmp;
pub mod cli;
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod resize;

pub use error::{ConfigError, Error, FormatError, Result};
pub use image::{Dimensions, PixelGrid, Rgb};
