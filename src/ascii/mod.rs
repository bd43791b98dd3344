//! ASCII renderer for converting pixel grids to text.
//!
//! 1. **Grayscale conversion** - RGB to luminance with integer BT.601 weights
//! 2. **Row decimation** - keep every `vertical_scale`-th row
//! 3. **Character mapping** - map brightness onto a [`Ramp`]
//!
//! # Ramps
//!
//! Named presets are available via [`Preset`]:
//! - `Standard` - 10-level ASCII density ramp (the default)
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod grayscale;
mod mapping;
mod render;

pub use charset::{Preset, Ramp, BLOCKS_RAMP, DEFAULT_RAMP, MINIMAL_RAMP};
pub use grayscale::luminance;
pub use mapping::ramp_index;
pub use render::{render, AsciiArt};
