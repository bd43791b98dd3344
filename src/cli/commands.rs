//! Handlers for the conversion and `config` subcommands.

use std::io::Write;
use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::config::{self, Config, Overrides};
use crate::error::{Error, Result};
use crate::pipeline;

/// Load the config file, honouring an explicit `--config` path.
///
/// An explicit path must exist and parse. A broken default file only logs a
/// warning and the built-in defaults are used.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Ok(Config::load_from_explicit(path)?),
        None => match Config::load() {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Ok(Config::default())
            }
        },
    }
}

/// Convert the input file and emit the art.
///
/// Lines go to stdout only after the whole pipeline succeeded; the optional
/// output file is written afterwards.
pub fn run(args: &Args) -> Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let options = cfg.resolve(&args.overrides())?;

    let Some(input) = args.input.as_deref() else {
        // clap enforces INPUT when no subcommand is given
        return Ok(());
    };

    let art = pipeline::convert_file(input, &options)?;

    let stdout = std::io::stdout();
    art.write_to(stdout.lock())
        .map_err(|e| Error::io("<stdout>", e))?;

    if let Some(output) = args.output.as_deref() {
        pipeline::write_output(&art, output)?;
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: &ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = load_config(explicit)?;
            let options = cfg.resolve(&Overrides::default())?;

            let mut out = std::io::stdout().lock();
            let show = |out: &mut std::io::StdoutLock<'_>| -> std::io::Result<()> {
                writeln!(out, "Current configuration:")?;
                writeln!(out, "  Width: {}", options.width)?;
                writeln!(out, "  Vertical scale: {}", options.vertical_scale)?;
                writeln!(out, "  Character set: \"{}\"", options.ramp)?;
                writeln!(out)?;

                let config_path = explicit
                    .map(Path::to_path_buf)
                    .unwrap_or_else(config::default_path);
                let state = if config_path.exists() { "exists" } else { "not found" };
                writeln!(out, "Config file: {} ({})", config_path.display(), state)
            };
            show(&mut out).map_err(|e| Error::io("<stdout>", e))
        }
        ConfigAction::Init => {
            let config_path = explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(config::default_path);
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Write the commented default config, refusing to overwrite.
pub(crate) fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "config file already exists",
            ),
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, config::DEFAULT_CONFIG).map_err(|e| Error::io(path, e))?;
    log::debug!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, config::DEFAULT_CONFIG);
        assert!(Config::load_from_explicit(&path).is_ok());
    }

    #[test]
    fn test_init_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        let err = init_config(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn test_load_config_explicit_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[render\nwidth = ").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
