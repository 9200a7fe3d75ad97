use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fisher-labels";

/// Location of the character mapping file relative to the run root.
pub const MAPPING_FILE: &str = "labels/ctc/fisher/char2num.txt";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn mapping_file(run_root: &Path) -> PathBuf {
    run_root.join(MAPPING_FILE)
}
