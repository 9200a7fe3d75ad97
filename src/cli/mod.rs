//! Command line interface.

pub mod args;
mod config;
mod make;
mod normalize;

pub use args::{Cli, CliCommand, OutputFormat};
pub use config::handle_config_command;
pub use make::handle_make_command;
pub use normalize::handle_normalize_command;

use crate::config::Config;
use anyhow::Result;
use std::path::Path;

/// Load `path` when given, otherwise the default config file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
