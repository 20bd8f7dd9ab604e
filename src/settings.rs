use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_BACKUP_DIR, DEFAULT_RES_DIR, DEFAULT_SOURCE_ICON};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source_icon: PathBuf,
    pub res_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_icon: PathBuf::from(DEFAULT_SOURCE_ICON),
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
        }
    }
}

impl Settings {
    /// Loads `icongen.ini` from the working directory, or the defaults if it is absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().trim_matches('"').to_string());
            } else {
                tracing::warn!(line, "ignoring malformed config line");
            }
        }

        if let Some(source_icon) = config_map.remove("source_icon") {
            settings.source_icon = PathBuf::from(source_icon);
        }
        if let Some(res_dir) = config_map.remove("res_dir") {
            settings.res_dir = PathBuf::from(res_dir);
        }
        if let Some(backup_dir) = config_map.remove("backup_dir") {
            settings.backup_dir = PathBuf::from(backup_dir);
        }
        for key in config_map.keys() {
            tracing::warn!(key = %key, "ignoring unknown config key");
        }

        tracing::debug!(?settings, path = %config_path.display(), "loaded config");
        Ok(settings)
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }
}
