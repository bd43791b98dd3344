//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::config::Overrides;

/// Parse a strictly positive integer (width, vertical scale).
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;
    if n == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(n)
}

/// Convert BMP images to ASCII art
#[derive(Parser, Debug)]
#[command(name = "bmp2ascii")]
#[command(version, about = "Convert BMP images to ASCII art", long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the input BMP file
    #[arg(required = true)]
    pub input: Option<PathBuf>,

    /// Also save the ASCII art to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target width of the ASCII art [default: 100]
    #[arg(short, long, value_parser = parse_positive)]
    pub width: Option<usize>,

    /// Keep every Nth row to compensate for font aspect ratio [default: 2]
    #[arg(short, long, value_parser = parse_positive)]
    pub vertical_scale: Option<usize>,

    /// Custom character set, from dark to light
    #[arg(short = 's', long = "set")]
    pub set: Option<String>,

    /// Named character set (ignored when --set is given)
    #[arg(short, long)]
    pub preset: Option<CharacterSet>,

    /// Reverse the character set intensities
    #[arg(short, long)]
    pub reverse: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective settings
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Rendering settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            vertical_scale: self.vertical_scale,
            charset: self.set.clone(),
            preset: self.preset.map(Into::into),
            reverse: self.reverse,
        }
    }
}
