//! CLI handler for inspecting the configuration.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::{ConfigCliArgs, ConfigCommand};
use crate::config::Config;

pub fn handle_config_command(
    args: ConfigCliArgs,
    config: &Config,
    config_path: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
            println!("{}", content.trim_end());
            println!("\n# mapping file: {}", config.mapping_path().display());
        }
        ConfigCommand::Path => match config_path {
            Some(path) => println!("{}", path.display()),
            None => println!("{}", Config::config_path()?.display()),
        },
    }

    Ok(())
}
