//! Configuration file handling for bmp2ascii.
//!
//! Loads configuration from `<config dir>/bmp2ascii/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{Preset, Ramp};
use crate::error::ConfigError;
use crate::pipeline::{RenderOptions, DEFAULT_VERTICAL_SCALE, DEFAULT_WIDTH};

/// Configuration file structure for bmp2ascii.
/// Loaded from the default path (or a custom path via --config).
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub width: Option<usize>,
    #[serde(default)]
    pub vertical_scale: Option<usize>,
    /// Custom ramp, darkest pixel first. Takes precedence over `preset`.
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub reverse: bool,
}

/// Settings supplied on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub width: Option<usize>,
    pub vertical_scale: Option<usize>,
    pub charset: Option<String>,
    pub preset: Option<Preset>,
    pub reverse: bool,
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::read(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Merge settings: CLI > config file > built-in defaults.
    pub fn resolve(&self, cli: &Overrides) -> Result<RenderOptions, ConfigError> {
        let render = &self.render;

        let width = cli.width.or(render.width).unwrap_or(DEFAULT_WIDTH);
        let vertical_scale = cli
            .vertical_scale
            .or(render.vertical_scale)
            .unwrap_or(DEFAULT_VERTICAL_SCALE);

        // A custom charset beats a preset from the same source; CLI beats file.
        let mut ramp = if let Some(chars) = &cli.charset {
            Ramp::new(chars)?
        } else if let Some(preset) = cli.preset {
            preset.into()
        } else if let Some(chars) = &render.charset {
            Ramp::new(chars)?
        } else if let Some(name) = &render.preset {
            match Preset::from_name(name) {
                Some(preset) => preset.into(),
                None => {
                    log::warn!("Unknown preset '{}' in config, using standard", name);
                    Ramp::default()
                }
            }
        } else {
            Ramp::default()
        };

        if cli.reverse || render.reverse {
            ramp = ramp.reversed();
        }

        let options = RenderOptions {
            width,
            vertical_scale,
            ramp,
        };
        options.validate()?;
        Ok(options)
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("bmp2ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/bmp2ascii/config.toml")
        })
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# bmp2ascii configuration

[render]
# Target width of the ASCII art in characters
width = 100

# Keep every Nth row to compensate for tall terminal glyphs
vertical_scale = 2

# Named ramp: standard | blocks | minimal
preset = "standard"

# Custom ramp, darkest pixel first (overrides preset)
# charset = "@%#*+=-:. "

# Reverse the ramp (useful on dark terminals)
reverse = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.render.width, Some(100));
        assert_eq!(config.render.vertical_scale, Some(2));
        assert_eq!(config.render.preset.as_deref(), Some("standard"));
        assert!(config.render.charset.is_none());
        assert!(!config.render.reverse);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        let opts = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(opts, RenderOptions::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = toml::from_str("[render]\nwdith = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config: Config =
            toml::from_str("[render]\nwidth = 40\nvertical_scale = 3\ncharset = \"ab\"\n").unwrap();
        let cli = Overrides {
            width: Some(80),
            charset: Some("xyz".to_string()),
            ..Default::default()
        };
        let opts = config.resolve(&cli).unwrap();
        assert_eq!(opts.width, 80);
        assert_eq!(opts.vertical_scale, 3);
        assert_eq!(opts.ramp.to_string(), "xyz");
    }

    #[test]
    fn test_cli_preset_beats_file_charset() {
        let config: Config = toml::from_str("[render]\ncharset = \"ab\"\n").unwrap();
        let cli = Overrides {
            preset: Some(Preset::Minimal),
            ..Default::default()
        };
        let opts = config.resolve(&cli).unwrap();
        assert_eq!(opts.ramp.to_string(), "#:. ");
    }

    #[test]
    fn test_file_preset_and_reverse() {
        let config: Config =
            toml::from_str("[render]\npreset = \"minimal\"\nreverse = true\n").unwrap();
        let opts = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(opts.ramp.to_string(), " .:#");
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let config: Config = toml::from_str("[render]\npreset = \"sparkles\"\n").unwrap();
        let opts = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(opts.ramp, Ramp::default());
    }

    #[test]
    fn test_zero_width_in_file_rejected() {
        let config: Config = toml::from_str("[render]\nwidth = 0\n").unwrap();
        assert!(matches!(
            config.resolve(&Overrides::default()),
            Err(ConfigError::InvalidWidth)
        ));
    }

    #[test]
    fn test_empty_charset_rejected() {
        let cli = Overrides {
            charset: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            Config::default().resolve(&cli),
            Err(ConfigError::EmptyRamp)
        ));
    }

    #[test]
    fn test_explicit_missing_path() {
        let err = Config::load_from_explicit(Path::new("/nonexistent/bmp2ascii.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("bmp2ascii/config.toml"));
    }
}
