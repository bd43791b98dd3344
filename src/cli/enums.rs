//! CLI enum types for ramp presets.

use clap::ValueEnum;

use crate::ascii;

/// Named character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::Preset {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::Preset::Standard,
            CharacterSet::Blocks => ascii::Preset::Blocks,
            CharacterSet::Minimal => ascii::Preset::Minimal,
        }
    }
}
