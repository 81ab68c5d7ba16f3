use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::{Deserialize, Serialize};
use vz_core::{NormalizeOptions, PronounceOptions};

use crate::error::{Result, StoreError};

pub const CONFIG_FILE: &str = "config.toml";

/// User-level defaults for every operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Candidate denominators for mixed fractions. Empty means 1..=20.
    pub denominators: Vec<u32>,
    pub pronounce: PronounceOptions,
    pub normalize: NormalizeOptions,
}

impl Config {
    /// Parse and validate TOML content. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects zero denominators, and the normalizer steps that need a
    /// tagger or resolver, which nothing reading this file can supply.
    pub fn validate(&self) -> Result<()> {
        if self.denominators.contains(&0) {
            return Err(StoreError::InvalidData(
                "denominators must be positive".to_string(),
            ));
        }
        if self.normalize.make_singular {
            return Err(StoreError::InvalidData(
                "normalize.make_singular requires a tagger and cannot be set in config".to_string(),
            ));
        }
        if self.normalize.solve_corefs {
            return Err(StoreError::InvalidData(
                "normalize.solve_corefs requires a coreference resolver and cannot be set in config"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Default base directory for vz storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".verbalize")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Reads and writes `config.toml` in a data directory.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    base_dir: PathBuf,
}

impl ConfigStore {
    /// Resolve the data directory.
    /// Priority: explicit override > VZ_DATA_DIR env > ~/.verbalize
    pub fn open(base_dir: Option<&Path>) -> Self {
        let base_dir = base_dir
            .map(Path::to_path_buf)
            .or_else(|| env::var("VZ_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(default_base_dir);
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Load the config, or defaults when no file exists yet.
    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        match fs::read_to_string(&path) {
            Ok(content) => {
                let config = Config::from_toml_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        fs::create_dir_all(&self.base_dir)?;
        let path = self.config_path();
        fs::write(&path, config.to_toml_string()?)?;
        tracing::info!("wrote config: {}", path.display());
        Ok(())
    }
}
