use std::path::PathBuf;

use bevy::prelude::*;

/// Command-line arguments parsed at startup.
#[derive(Resource, Debug, Default, PartialEq)]
pub struct CliArgs {
    /// Config file to use instead of the platform default.
    /// Usage: `cargo run -- --config <path>`
    pub config_path: Option<PathBuf>,

    /// Write the effective config back to disk after loading it.
    /// Usage: `cargo run -- --write-config`
    pub write_config: bool,
}

impl CliArgs {
    /// Parse the process arguments.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, program name excluded.
    /// Supports:
    /// - `--config <path>`: Load and save the config at `path`
    /// - `--write-config`: Save the effective config on startup
    pub fn parse_from(args: impl IntoIterator<Item = String>) -> Self {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => match args.next() {
                    Some(path) => {
                        info!("CLI: Using config file '{}'", path);
                        cli.config_path = Some(PathBuf::from(path));
                    }
                    None => warn!("CLI: --config requires a path argument"),
                },
                "--write-config" => cli.write_config = true,
                arg if arg.starts_with('-') => warn!("CLI: Unknown argument '{}'", arg),
                _ => {}
            }
        }

        cli
    }
}
