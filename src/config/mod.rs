use crate::corpus::Speaker;
use crate::global;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `labels/ctc/fisher/char2num.txt`
    pub run_root: PathBuf,
    /// Default directory searched for label files
    pub label_dir: Option<PathBuf>,
    /// Default directory for `.npy` label files
    pub save_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub label_extension: String,
    pub default_speaker: Speaker,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            run_root: PathBuf::from("."),
            label_dir: None,
            save_dir: None,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            label_extension: "txt".to_string(),
            default_speaker: Speaker::A,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn mapping_path(&self) -> PathBuf {
        global::mapping_file(&self.paths.run_root)
    }

    pub fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}
