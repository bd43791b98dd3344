//! Character ramps used to map brightness to glyphs.

use crate::error::ConfigError;

/// Default 10-level ramp, darkest pixel first.
/// Dense glyphs for dark pixels, so it reads well on light backgrounds.
pub const DEFAULT_RAMP: &str = "@%#*+=-:. ";

/// Unicode block ramp (5 levels), darkest pixel first.
pub const BLOCKS_RAMP: &str = "█▓▒░ ";

/// Minimal ramp (4 levels) for a clean, less noisy look.
pub const MINIMAL_RAMP: &str = "#:. ";

/// Named ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Standard 10-level ASCII density ramp
    #[default]
    Standard,
    /// Unicode block characters
    Blocks,
    /// 4-level ASCII ramp
    Minimal,
}

impl Preset {
    pub fn chars(&self) -> &'static str {
        match self {
            Preset::Standard => DEFAULT_RAMP,
            Preset::Blocks => BLOCKS_RAMP,
            Preset::Minimal => MINIMAL_RAMP,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Blocks => "blocks",
            Preset::Minimal => "minimal",
        }
    }

    /// Parse a preset name as written in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(Preset::Standard),
            "blocks" => Some(Preset::Blocks),
            "minimal" => Some(Preset::Minimal),
            _ => None,
        }
    }
}

/// Ordered, non-empty sequence of glyphs.
///
/// Index 0 is used for the darkest pixels. A single-glyph ramp is legal and
/// renders every pixel with that glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    pub fn new(chars: &str) -> Result<Self, ConfigError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(ConfigError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    /// Same glyphs in the opposite order (for dark terminals).
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Preset::Standard.into()
    }
}

impl From<Preset> for Ramp {
    fn from(preset: Preset) -> Self {
        Self {
            chars: preset.chars().chars().collect(),
        }
    }
}

impl std::fmt::Display for Ramp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ramp_has_ten_levels() {
        let ramp = Ramp::default();
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.chars()[0], '@');
        assert_eq!(ramp.chars()[9], ' ');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(matches!(Ramp::new(""), Err(ConfigError::EmptyRamp)));
    }

    #[test]
    fn test_single_char_ramp_allowed() {
        let ramp = Ramp::new("x").unwrap();
        assert_eq!(ramp.len(), 1);
    }

    #[test]
    fn test_reversed() {
        let ramp = Ramp::new("@%#").unwrap().reversed();
        assert_eq!(ramp.to_string(), "#%@");
    }

    #[test]
    fn test_unicode_ramp_counts_chars_not_bytes() {
        let ramp: Ramp = Preset::Blocks.into();
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp.chars()[0], '█');
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in [Preset::Standard, Preset::Blocks, Preset::Minimal] {
            assert_eq!(Preset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(Preset::from_name("BLOCKS"), Some(Preset::Blocks));
        assert_eq!(Preset::from_name("braille"), None);
    }
}
